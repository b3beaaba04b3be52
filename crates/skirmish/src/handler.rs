//! Per-connection handler: read → frame → decode → resolve → reply.
//!
//! Each accepted connection gets its own Tokio task running this loop.
//! Messages on one connection are processed strictly in arrival order; a
//! response is written and flushed before the next message is touched.

use std::sync::Arc;

use skirmish_protocol::{Codec, CombatRequest, LineFramer};
use skirmish_resolver::resolve;
use skirmish_transport::{Connection, TcpConnection};
use tokio::sync::watch;

use crate::SkirmishError;
use crate::server::ServerState;

/// Handles a single connection from accept to close.
///
/// Exits when the peer closes, the socket errors, or the shutdown signal
/// fires; the socket is closed on every exit path. A malformed message is
/// logged and skipped without closing the connection — the framer
/// resynchronises on the next newline.
pub(crate) async fn handle_connection<C: Codec>(
    conn: TcpConnection,
    state: Arc<ServerState<C>>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), SkirmishError> {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "handling new connection");

    let mut framer = LineFramer::new();

    'outer: loop {
        let chunk = tokio::select! {
            _ = shutdown.changed() => {
                tracing::debug!(%conn_id, "shutdown signal, closing");
                break;
            }
            res = conn.recv() => match res {
                Ok(Some(chunk)) => chunk,
                Ok(None) => {
                    tracing::debug!(%conn_id, "peer closed connection");
                    break;
                }
                Err(e) => {
                    tracing::debug!(%conn_id, error = %e, "recv error");
                    break;
                }
            }
        };

        framer.extend(&chunk);

        while let Some(payload) = framer.next_payload() {
            let req: CombatRequest = match state.codec.decode(&payload) {
                Ok(req) => req,
                Err(e) => {
                    // Recoverable: discard this message, keep reading.
                    // The client gets no response for it.
                    tracing::warn!(
                        %conn_id,
                        error = %e,
                        "discarding malformed request"
                    );
                    continue;
                }
            };

            tracing::debug!(
                %conn_id,
                match_id = %req.match_id,
                actions = req.actions.len(),
                "resolving combat request"
            );
            let result = resolve(&req);

            let frame = state.codec.encode(&result)?;
            if let Err(e) = conn.send(&frame).await {
                tracing::debug!(%conn_id, error = %e, "send error");
                break 'outer;
            }
        }
    }

    let _ = conn.close().await;
    Ok(())
}
