//! WebSocket-backed interop channel.
//!
//! Frames each invocation as a [`Request`] with a UUID correlation id,
//! sends it through the write pump, and waits for the host shim's
//! [`Ack`] routed back by the read pump.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio_tungstenite::tungstenite;
use tokio_util::sync::CancellationToken;
use tracing::info;

use webconsole_protocol::constants::{WS_MAX_MESSAGE_SIZE, WS_REQUEST_TIMEOUT};
use webconsole_protocol::{Invocation, Request};

use crate::InteropChannel;
use crate::error::ChannelError;
use crate::pumps::read::PendingMap;

/// Per-connection tuning.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// How long to wait for the host to acknowledge one invocation.
    pub request_timeout: Duration,
    /// Maximum WebSocket frame size accepted from the host.
    pub max_message_size: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            request_timeout: WS_REQUEST_TIMEOUT,
            max_message_size: WS_MAX_MESSAGE_SIZE,
        }
    }
}

/// Interop channel over a WebSocket connection to the host console shim.
///
/// One instance is shared for the application's lifetime; it is read-only
/// after construction. Concurrent callers are not coordinated — ordering
/// comes from the single write pump draining the outbound queue.
pub struct WsChannel {
    write_tx: mpsc::Sender<tungstenite::Message>,
    pending: PendingMap,
    request_timeout: Duration,
    _read_handle: tokio::task::JoinHandle<()>,
    _write_handle: tokio::task::JoinHandle<()>,
    _ping_handle: tokio::task::JoinHandle<()>,
    cancel: CancellationToken,
}

impl WsChannel {
    /// Connects to the host shim with default tuning.
    pub async fn connect(url: &str) -> Result<Self, ChannelError> {
        Self::connect_with(url, ChannelConfig::default()).await
    }

    /// Connects to the host shim.
    pub async fn connect_with(url: &str, config: ChannelConfig) -> Result<Self, ChannelError> {
        let mut ws_config = tungstenite::protocol::WebSocketConfig::default();
        ws_config.max_message_size = Some(config.max_message_size);
        ws_config.max_frame_size = Some(config.max_message_size);
        let (ws_stream, _) =
            tokio_tungstenite::connect_async_with_config(url, Some(ws_config), false).await?;
        let (write, read) = ws_stream.split();

        info!(%url, "connected to console host");

        let (write_tx, write_rx) = mpsc::channel::<tungstenite::Message>(256);
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let cancel = CancellationToken::new();

        let write_handle = {
            let cancel = cancel.clone();
            tokio::spawn(crate::pumps::write::write_pump(write, write_rx, cancel))
        };

        let read_handle = {
            let pending = pending.clone();
            let write_tx = write_tx.clone();
            let cancel = cancel.clone();
            tokio::spawn(crate::pumps::read::read_pump(
                read, pending, write_tx, cancel,
            ))
        };

        let ping_handle = {
            let write_tx = write_tx.clone();
            let cancel = cancel.clone();
            tokio::spawn(crate::pumps::ping::ping_pump(write_tx, cancel))
        };

        Ok(Self {
            write_tx,
            pending,
            request_timeout: config.request_timeout,
            _read_handle: read_handle,
            _write_handle: write_handle,
            _ping_handle: ping_handle,
            cancel,
        })
    }

    /// Sends one invocation and waits for the host's acknowledgment.
    async fn send(&self, call: Invocation) -> Result<(), ChannelError> {
        let id = uuid::Uuid::new_v4().to_string();
        let req = Request::new(&id, call);
        let json = serde_json::to_string(&req)?;

        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id.clone(), tx);

        if self
            .write_tx
            .send(tungstenite::Message::Text(json.into()))
            .await
            .is_err()
        {
            self.pending.lock().await.remove(&id);
            return Err(ChannelError::Closed);
        }

        let result = tokio::time::timeout(self.request_timeout, rx).await;

        // Clean up the pending entry on any exit path.
        self.pending.lock().await.remove(&id);

        match result {
            Ok(Ok(ack)) => ack.into_result().map_err(ChannelError::from),
            Ok(Err(_)) => Err(ChannelError::Closed),
            Err(_) => Err(ChannelError::Timeout),
        }
    }

    /// Gracefully closes the connection.
    pub async fn close(&self) {
        info!("closing console host connection");
        self.cancel.cancel();
        let _ = self.write_tx.send(tungstenite::Message::Close(None)).await;
    }
}

impl InteropChannel for WsChannel {
    fn invoke(
        &self,
        call: Invocation,
    ) -> impl std::future::Future<Output = Result<(), ChannelError>> + Send {
        self.send(call)
    }
}

impl Drop for WsChannel {
    fn drop(&mut self) {
        self.cancel.cancel();
        self._read_handle.abort();
        self._write_handle.abort();
        self._ping_handle.abort();
    }
}
