// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Error types for the orders WebSocket client.

use thiserror::Error;

/// A typed error enumeration for the orders WebSocket client.
///
/// Clone so transport errors can ride the broadcast error stream.
#[derive(Debug, Clone, Error)]
pub enum OrdersWsError {
    /// General client error.
    #[error("Client error: {0}")]
    ClientError(String),
    /// Network or connection error reported by the transport.
    #[error("Transport error: {0}")]
    TransportError(String),
    /// Operation timed out.
    #[error("Timeout: {0}")]
    Timeout(String),
}

/// Result type for orders WebSocket operations.
pub type OrdersWsResult<T> = Result<T, OrdersWsError>;
