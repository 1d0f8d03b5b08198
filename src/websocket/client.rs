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

//! Provides the WebSocket client for the orders gateway message socket.
//!
//! This module defines and implements [`OrdersWebSocketClient`], which maintains one
//! logical connection to a fixed, externally configured endpoint. The client owns at
//! most one transport handle at a time and republishes transport events as typed
//! notifications and [`ConnectionState`] transitions.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU8, Ordering},
    },
    time::Duration,
};

use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{
    error::{OrdersWsError, OrdersWsResult},
    messages::WsMessage,
};
use crate::{config::OrdersClientConfig, enums::ConnectionState};

/// Capacity of the broadcast notification streams.
const NOTIFICATION_CHANNEL_CAPACITY: usize = 1024;

/// Provides a WebSocket client for the orders gateway message socket.
///
/// The client is "fire-and-observe": [`connect`](Self::connect),
/// [`disconnect`](Self::disconnect), and the send operations all return immediately,
/// with outcomes observed asynchronously through [`connection_state`](Self::connection_state)
/// and the [`messages`](Self::messages) and [`errors`](Self::errors) streams. Nothing is
/// retried and no failure is raised to the caller: connect failures and transport errors
/// surface as error notifications, decode failures fall back to the raw payload, and
/// misuse (send while closed, duplicate connect) degrades to a logged warning.
///
/// The cached state signal and the live transport status can transiently disagree,
/// e.g. immediately after a remote close before the close event is processed;
/// [`is_connected`](Self::is_connected) always queries the live transport status.
#[derive(Debug)]
pub struct OrdersWebSocketClient {
    url: String,
    state: Arc<AtomicU8>,
    handle: Option<TransportHandle>,
    message_tx: broadcast::Sender<WsMessage>,
    error_tx: broadcast::Sender<OrdersWsError>,
}

/// The live transport owned by the client, at most one at a time.
#[derive(Debug)]
struct TransportHandle {
    open: Arc<AtomicBool>,
    out_tx: mpsc::UnboundedSender<Message>,
    _task: tokio::task::JoinHandle<()>,
}

impl TransportHandle {
    /// Live transport status, independent of the cached state signal.
    fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }
}

impl OrdersWebSocketClient {
    /// Creates a new [`OrdersWebSocketClient`] instance bound to the given URL.
    ///
    /// The URL is not validated. The initial connection state is `Closed`.
    #[must_use]
    pub fn new(url: String) -> Self {
        let (message_tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        let (error_tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);

        Self {
            url,
            state: Arc::new(AtomicU8::new(ConnectionState::Closed as u8)),
            handle: None,
            message_tx,
            error_tx,
        }
    }

    /// Creates a new [`OrdersWebSocketClient`] from the given configuration.
    #[must_use]
    pub fn from_config(config: &OrdersClientConfig) -> Self {
        Self::new(config.ws_url())
    }

    /// Returns the WebSocket URL being used by the client.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the cached connection state signal.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Relaxed))
    }

    /// Returns `true` iff a transport handle exists and its live status is open.
    ///
    /// This queries the transport directly and may transiently disagree with
    /// [`connection_state`](Self::connection_state).
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.handle.as_ref().is_some_and(TransportHandle::is_open)
    }

    /// Subscribes to the inbound message notification stream.
    ///
    /// Subscribers receive messages published after subscription, in per-subscriber
    /// FIFO order.
    #[must_use]
    pub fn messages(&self) -> broadcast::Receiver<WsMessage> {
        self.message_tx.subscribe()
    }

    /// Subscribes to the transport error notification stream.
    #[must_use]
    pub fn errors(&self) -> broadcast::Receiver<OrdersWsError> {
        self.error_tx.subscribe()
    }

    /// Opens the WebSocket connection.
    ///
    /// If a transport handle already exists and reports open, this is a no-op apart
    /// from a logged warning; no second handle is created. Otherwise the state moves
    /// to `Connecting` synchronously and a transport task is spawned; completion is
    /// observed via state changes and notifications, not a return value. A failed
    /// attempt surfaces as a transport error notification followed by `Closed`.
    ///
    /// Must be called within a Tokio runtime.
    pub fn connect(&mut self) {
        if let Some(handle) = &self.handle
            && handle.is_open()
        {
            log::warn!("WebSocket is already connected");
            return;
        }

        self.set_state(ConnectionState::Connecting);

        let open = Arc::new(AtomicBool::new(false));
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_transport(
            self.url.clone(),
            self.state.clone(),
            open.clone(),
            out_rx,
            self.message_tx.clone(),
            self.error_tx.clone(),
        ));

        self.handle = Some(TransportHandle {
            open,
            out_tx,
            _task: task,
        });
    }

    /// Closes the WebSocket connection.
    ///
    /// Sets the state to `Closing`, requests the transport to close, and clears the
    /// handle reference immediately without waiting for the close to complete; the
    /// detached transport task finishes the close handshake and moves the state to
    /// `Closed`. No-op if no handle exists.
    pub fn disconnect(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.set_state(ConnectionState::Closing);

            if handle.out_tx.send(Message::Close(None)).is_err() {
                log::debug!("Transport already terminated on disconnect");
            }
        }
    }

    /// Sends a textual payload verbatim.
    ///
    /// Only transmits while the transport reports open; otherwise the payload is
    /// dropped with a logged warning and no error is raised.
    pub fn send_text(&self, text: impl Into<String>) {
        let Some(handle) = self.handle.as_ref().filter(|h| h.is_open()) else {
            log::warn!("WebSocket is not connected, dropping outbound message");
            return;
        };

        let text = text.into();
        log::trace!("Sending: {text}");

        if let Err(e) = handle.out_tx.send(Message::Text(text.into())) {
            log::warn!("Failed to queue outbound message: {e}");
        }
    }

    /// Serializes a payload to JSON text and sends it.
    ///
    /// Serialization failure drops the payload with a logged warning (silent-drop
    /// policy); no error is raised.
    pub fn send_json<T: Serialize>(&self, message: &T) {
        match serde_json::to_string(message) {
            Ok(payload) => self.send_text(payload),
            Err(e) => log::warn!("Failed to serialize outbound message, dropping: {e}"),
        }
    }

    /// Waits until the transport reports open.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is not open within `timeout_secs`.
    pub async fn wait_until_active(&self, timeout_secs: f64) -> OrdersWsResult<()> {
        let timeout = Duration::from_secs_f64(timeout_secs);

        tokio::time::timeout(timeout, async {
            while !self.is_connected() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .map_err(|_| {
            OrdersWsError::Timeout(format!(
                "WebSocket connection timeout after {timeout_secs} seconds"
            ))
        })
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.store(state as u8, Ordering::Relaxed);
    }
}

/// Runs one transport's life: dial, then pump inbound and outbound until the
/// stream ends.
///
/// Owns the WebSocket stream exclusively. Shared with the client only through the
/// state signal, the open flag, and the notification streams, so the task outlives
/// the client's handle reference after a disconnect.
async fn run_transport(
    url: String,
    state: Arc<AtomicU8>,
    open: Arc<AtomicBool>,
    mut out_rx: mpsc::UnboundedReceiver<Message>,
    message_tx: broadcast::Sender<WsMessage>,
    error_tx: broadcast::Sender<OrdersWsError>,
) {
    let stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            log::error!("WebSocket connect failed: {e}");
            let _ = error_tx.send(OrdersWsError::TransportError(e.to_string()));
            state.store(ConnectionState::Closed as u8, Ordering::Relaxed);
            return;
        }
    };

    open.store(true, Ordering::Relaxed);
    state.store(ConnectionState::Open as u8, Ordering::Relaxed);
    log::info!("WebSocket connected to {url}");

    let (mut writer, mut reader) = stream.split();

    loop {
        tokio::select! {
            Some(outbound) = out_rx.recv() => {
                if let Err(e) = writer.send(outbound).await {
                    tracing::error!(error = %e, "Failed to send message");
                    let _ = error_tx.send(OrdersWsError::TransportError(e.to_string()));
                }
            }
            inbound = reader.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    log::trace!("Raw websocket message: {text}");
                    let _ = message_tx.send(WsMessage::from_text(text.as_str()));
                }
                Some(Ok(Message::Binary(data))) => {
                    log::debug!("Received binary message with {} bytes", data.len());
                }
                Some(Ok(Message::Ping(data))) => {
                    if let Err(e) = writer.send(Message::Pong(data)).await {
                        log::warn!("Failed to send pong frame: {e}");
                    }
                }
                Some(Ok(Message::Pong(_))) => {}
                Some(Ok(Message::Close(frame))) => {
                    log::debug!("Received close frame: {frame:?}");
                }
                Some(Ok(Message::Frame(_))) => {}
                Some(Err(e)) => {
                    log::error!("WebSocket error: {e}");
                    let _ = error_tx.send(OrdersWsError::TransportError(e.to_string()));
                }
                None => break,
            }
        }
    }

    open.store(false, Ordering::Relaxed);
    state.store(ConnectionState::Closed as u8, Ordering::Relaxed);
    log::info!("WebSocket disconnected");
}
