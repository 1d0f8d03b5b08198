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

//! Configuration structures for the orders clients.

use crate::consts::{DEFAULT_HTTP_URL, DEFAULT_WS_URL, ENV_HTTP_URL, ENV_WS_URL};

/// Configuration for the orders HTTP and WebSocket clients.
///
/// Neither address is validated; both are passed through to the underlying
/// transport as supplied.
#[derive(Clone, Debug)]
pub struct OrdersClientConfig {
    /// Optional override for the REST base URL.
    pub base_url_http: Option<String>,
    /// Optional override for the WebSocket URL.
    pub base_url_ws: Option<String>,
    /// Optional REST timeout in seconds.
    pub http_timeout_secs: Option<u64>,
}

impl Default for OrdersClientConfig {
    fn default() -> Self {
        Self {
            base_url_http: None,
            base_url_ws: None,
            http_timeout_secs: Some(60),
        }
    }
}

impl OrdersClientConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads `ORDERS_HTTP_URL` and `ORDERS_WS_URL`; unset variables fall back to
    /// the crate defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url_http: std::env::var(ENV_HTTP_URL).ok(),
            base_url_ws: std::env::var(ENV_WS_URL).ok(),
            ..Default::default()
        }
    }

    /// Returns the REST base URL, considering overrides.
    #[must_use]
    pub fn http_base_url(&self) -> String {
        self.base_url_http
            .clone()
            .unwrap_or_else(|| DEFAULT_HTTP_URL.to_string())
    }

    /// Returns the WebSocket URL, considering overrides.
    #[must_use]
    pub fn ws_url(&self) -> String {
        self.base_url_ws
            .clone()
            .unwrap_or_else(|| DEFAULT_WS_URL.to_string())
    }
}
