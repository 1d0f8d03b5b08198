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

//! WebSocket client for the orders gateway message socket.
//!
//! This module provides a two-layer architecture:
//! - Outer client: owns the connection lifecycle and the notification streams
//! - Transport task: the I/O boundary running in a dedicated Tokio task
//!
//! There is no reconnection, no message acknowledgement, and no send queueing
//! while disconnected; failures degrade to notifications or logged no-ops.

pub mod client;
pub mod error;
pub mod messages;

pub use client::OrdersWebSocketClient;
pub use error::{OrdersWsError, OrdersWsResult};
pub use messages::WsMessage;
