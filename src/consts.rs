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

//! Core constants shared across the client components.

/// User agent sent with every HTTP request.
pub const ORDERS_USER_AGENT: &str = concat!("orders-client/", env!("CARGO_PKG_VERSION"));

/// Default REST API base URL.
pub const DEFAULT_HTTP_URL: &str = "http://127.0.0.1:8080/api";

/// Default WebSocket URL.
pub const DEFAULT_WS_URL: &str = "ws://127.0.0.1:8080/ws";

/// Environment variable overriding the REST API base URL.
pub const ENV_HTTP_URL: &str = "ORDERS_HTTP_URL";

/// Environment variable overriding the WebSocket URL.
pub const ENV_WS_URL: &str = "ORDERS_WS_URL";

/// Resource path for the orders collection, relative to the REST base URL.
pub const ORDERS_PATH: &str = "/orders";
