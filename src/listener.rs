use std::io::Write;

use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, trace, warn};

use crate::{
    error::{ProbeError, Result},
    message::InboundMessage,
    target::ConnectionTarget,
};

/// Connects once and prints every message until the session ends.
///
/// A normal end of session comes back as `Err(ProbeError::ConnectionClosed)`,
/// so the only way out of the loop is an error.
pub async fn listen<W: Write>(target: &ConnectionTarget, out: &mut W) -> Result<()> {
    let uri = target.request_uri();
    let (mut ws_stream, response) = connect_async(uri.as_str())
        .await
        .map_err(ProbeError::Connect)?;
    info!("Connected to {uri} ({})", response.status());

    writeln!(out, "Connected to WebSocket as user {}", target.user_id())?;
    out.flush()?;

    while let Some(msg) = ws_stream.next().await {
        let inbound = match msg.map_err(ProbeError::from_read)? {
            Message::Text(text) => InboundMessage::decode(&text),
            Message::Binary(bytes) => InboundMessage::decode_bytes(&bytes),
            // Keep polling so the queued close reply goes out; the stream ends after it.
            Message::Close(frame) => {
                debug!("close frame: {frame:?}");
                continue;
            }
            other => {
                trace!("control frame: {other:?}");
                continue;
            }
        };

        if let Some(notification) = inbound.notification() {
            debug!(
                kind = %notification.kind,
                user_id = ?notification.user_id,
                timestamp = ?notification.timestamp,
                "notification"
            );
        }

        writeln!(out, "{}", inbound.render())?;
        out.flush()?;
    }

    Err(ProbeError::ConnectionClosed)
}

/// Runs [`listen`] and prints how the session ended. Never fails.
pub async fn run<W: Write>(target: &ConnectionTarget, out: &mut W) {
    let outcome = listen(target, out).await;

    let line = match outcome {
        Ok(()) => return,
        Err(e) if e.is_closed() => {
            info!("{target} disconnected");
            e.to_string()
        }
        Err(e) => {
            warn!("{target}: {e:?}");
            format!("Error: {e}")
        }
    };

    if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
        warn!("failed to write output: {e}");
    }
}
