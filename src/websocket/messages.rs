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

//! Message types published on the inbound notification stream.

use serde_json::Value;

/// An inbound payload published on the message stream.
///
/// Payloads are opaque to the client: a structured decode is attempted and the
/// raw text is published unchanged when decoding fails. Decode failure is the
/// fallback path, never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum WsMessage {
    /// The payload decoded as JSON.
    Json(Value),
    /// The raw text payload, published when JSON decoding fails.
    Text(String),
}

impl WsMessage {
    /// Decodes a raw text payload, falling back to the text unchanged when it is
    /// not valid JSON.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        }
    }
}
