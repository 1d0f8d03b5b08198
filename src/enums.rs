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

//! Enumerations shared across the client components.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle state of the WebSocket connection.
///
/// Exactly one value is current at any time. The value is written only by the
/// connection state machine: `connect()` moves `Closed -> Connecting`, the transport
/// reporting open moves `Connecting -> Open`, `disconnect()` moves `Open -> Closing`,
/// and the transport closing moves any state to `Closed`. A remote-initiated close
/// skips `Closing` entirely.
#[repr(u8)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionState {
    /// A connection attempt is in flight.
    Connecting = 0,
    /// The connection is established and usable.
    Open = 1,
    /// An explicit disconnect was requested and the close has not yet completed.
    Closing = 2,
    /// No connection is established.
    #[default]
    Closed = 3,
}

impl ConnectionState {
    /// Decodes a state previously stored with `as u8`, defaulting to `Closed`.
    #[must_use]
    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Connecting,
            1 => Self::Open,
            2 => Self::Closing,
            _ => Self::Closed,
        }
    }
}
