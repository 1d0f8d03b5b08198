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

//! Provides the HTTP client integration for the orders REST API.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;

use super::{
    error::{OrdersHttpError, OrdersHttpResult},
    models::{Order, OrderUpdate},
};
use crate::{
    config::OrdersClientConfig,
    consts::{ORDERS_PATH, ORDERS_USER_AGENT},
};

/// Provides an HTTP client for the orders REST API.
///
/// Issues JSON request/response exchanges against a fixed base address. The client
/// performs no retries, no rate limiting, and no interpretation of gateway error
/// bodies; every failure is surfaced to the caller as an [`OrdersHttpError`].
#[derive(Clone, Debug)]
pub struct OrdersHttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl OrdersHttpClient {
    /// Creates a new [`OrdersHttpClient`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(base_url: String, timeout_secs: Option<u64>) -> OrdersHttpResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(ORDERS_USER_AGENT);
        if let Some(timeout_secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }

        let client = builder.build().map_err(|e| {
            OrdersHttpError::NetworkError(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self { base_url, client })
    }

    /// Creates a new [`OrdersHttpClient`] from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn from_config(config: &OrdersClientConfig) -> OrdersHttpResult<Self> {
        Self::new(config.http_base_url(), config.http_timeout_secs)
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists all orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn list_orders(&self) -> OrdersHttpResult<Vec<Order>> {
        let body = self
            .send_request(Method::GET, ORDERS_PATH.to_string(), None::<&()>)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Gets a single order by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn get_order(&self, order_id: &str) -> OrdersHttpResult<Order> {
        let body = self
            .send_request(Method::GET, format!("{ORDERS_PATH}/{order_id}"), None::<&()>)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Creates a new order from the given partial shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn create_order(&self, order: &OrderUpdate) -> OrdersHttpResult<Order> {
        let body = self
            .send_request(Method::POST, ORDERS_PATH.to_string(), Some(order))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Updates an order by identifier (full replace).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn update_order(&self, order_id: &str, order: &OrderUpdate) -> OrdersHttpResult<Order> {
        let body = self
            .send_request(Method::PUT, format!("{ORDERS_PATH}/{order_id}"), Some(order))
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Deletes an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_order(&self, order_id: &str) -> OrdersHttpResult<()> {
        self.send_request(
            Method::DELETE,
            format!("{ORDERS_PATH}/{order_id}"),
            None::<&()>,
        )
        .await?;
        Ok(())
    }

    async fn send_request<B: Serialize>(
        &self,
        method: Method,
        path: String,
        body: Option<&B>,
    ) -> OrdersHttpResult<String> {
        let url = format!("{}{path}", self.base_url);
        log::trace!("{method} {url}");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OrdersHttpError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
