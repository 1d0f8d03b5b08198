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

//! Error types for the orders HTTP client.

use thiserror::Error;

/// A typed error enumeration for the orders HTTP client.
#[derive(Debug, Clone, Error)]
pub enum OrdersHttpError {
    /// Failure during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    JsonError(String),
    /// Network or connection error.
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Request timed out.
    #[error("Timeout: {0}")]
    Timeout(String),
    /// Any unexpected HTTP status returned by the gateway.
    #[error("Unexpected HTTP status code {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },
}

impl From<serde_json::Error> for OrdersHttpError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<reqwest::Error> for OrdersHttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

/// Result type for orders HTTP operations.
pub type OrdersHttpResult<T> = Result<T, OrdersHttpError>;
