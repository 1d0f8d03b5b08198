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

//! Data models for the orders REST API.
//!
//! The order shape is open-ended: only the identifier is required, all other
//! fields are carried through untyped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An order as returned by the gateway.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The order identifier.
    pub id: String,
    /// All remaining named fields, untyped.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Order {
    /// Creates a new [`Order`] instance with the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Adds a named field to the order.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// A partial order shape accepted by create and update operations.
///
/// Carries no identifier; the gateway assigns or resolves it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// The named fields to submit, untyped.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl OrderUpdate {
    /// Creates an empty [`OrderUpdate`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named field to the update.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// Response envelope carrying an ordered sequence of orders and an optional total count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    /// The orders in the response.
    pub orders: Vec<Order>,
    /// Optional total count across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}
