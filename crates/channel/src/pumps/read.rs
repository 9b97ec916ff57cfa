//! WebSocket read pump — routes host acknowledgments to waiting callers.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio_tungstenite::tungstenite;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use webconsole_protocol::Ack;
use webconsole_protocol::constants::{WS_MAX_MESSAGE_SIZE, WS_PONG_WAIT};

/// Map of in-flight request ids to their ack waiters.
pub(crate) type PendingMap = Arc<Mutex<HashMap<String, oneshot::Sender<Ack>>>>;

/// Reads frames from the WebSocket and completes pending invocations.
///
/// Uses a traffic deadline to detect dead connections: if nothing arrives
/// within [`WS_PONG_WAIT`] (pongs included), the connection is considered
/// dead and the loop exits. On exit the pending map is drained so every
/// in-flight `invoke` fails with a closed-channel error instead of
/// waiting out its timeout.
pub(crate) async fn read_pump<S>(
    mut read: S,
    pending: PendingMap,
    write_tx: mpsc::Sender<tungstenite::Message>,
    cancel: CancellationToken,
) where
    S: StreamExt<Item = Result<tungstenite::Message, tungstenite::Error>> + Unpin,
{
    let traffic_deadline = tokio::time::sleep(WS_PONG_WAIT);
    tokio::pin!(traffic_deadline);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,

            () = &mut traffic_deadline => {
                warn!("traffic timeout — connection dead, closing");
                break;
            }

            msg = read.next() => {
                match msg {
                    Some(Ok(msg)) => {
                        // Any incoming frame counts as liveness.
                        traffic_deadline.as_mut().reset(tokio::time::Instant::now() + WS_PONG_WAIT);

                        match msg {
                            tungstenite::Message::Text(text) => {
                                handle_ack(&text, &pending).await;
                            }
                            tungstenite::Message::Ping(data) => {
                                trace!("received ping, sending pong");
                                let _ = write_tx.send(tungstenite::Message::Pong(data)).await;
                            }
                            tungstenite::Message::Pong(_) => {
                                trace!("received pong");
                            }
                            tungstenite::Message::Close(_) => {
                                debug!("received close frame");
                                break;
                            }
                            _ => {} // Binary — the host shim never sends these
                        }
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket read error: {e}");
                        break;
                    }
                    None => {
                        debug!("WebSocket stream ended");
                        break;
                    }
                }
            }
        }
    }

    // Fail every in-flight invocation: dropping the senders resolves the
    // waiting oneshot receivers with an error.
    pending.lock().await.clear();
}

/// Routes one text frame to its pending waiter.
async fn handle_ack(text: &str, pending: &PendingMap) {
    if text.len() > WS_MAX_MESSAGE_SIZE {
        warn!("frame too large ({} bytes), dropping", text.len());
        return;
    }

    let ack: Ack = match serde_json::from_str(text) {
        Ok(a) => a,
        Err(e) => {
            warn!("failed to parse ack: {e}");
            return;
        }
    };

    trace!(id = %ack.id, "received ack");

    let mut map = pending.lock().await;
    match map.remove(&ack.id) {
        Some(tx) => {
            let _ = tx.send(ack);
        }
        None => {
            warn!(id = %ack.id, "ack for unknown request — dropping");
        }
    }
}
