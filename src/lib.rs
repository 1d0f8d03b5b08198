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

//! Client-side data-access layer for an orders gateway.
//!
//! This crate provides two thin clients against a single externally configured gateway:
//!
//! - [`http::OrdersHttpClient`]: typed request/response operations (list, get, create,
//!   update, delete) for the `Order` entity against a fixed REST base address.
//! - [`websocket::OrdersWebSocketClient`]: one persistent WebSocket connection with a
//!   four-state lifecycle ([`enums::ConnectionState`]) and broadcast streams for inbound
//!   messages and transport errors.
//!
//! The socket client is deliberately "fire-and-observe": `connect`, `disconnect`, and the
//! send operations return immediately, and outcomes are observed through the state signal
//! and the notification streams. Nothing is retried and no failure is raised to the caller
//! from the socket core; delivery correctness is entirely the caller's responsibility.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod consts;
pub mod enums;
pub mod http;
pub mod websocket;
