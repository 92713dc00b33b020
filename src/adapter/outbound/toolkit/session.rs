//! Toolkit action session over WebSocket.
//!
//! # Connection Lifecycle
//!
//! 1. **Connect**: open `{ws_url}?type=toolkit` with the API key
//! 2. **Register**: send one `registerActions` frame, then report ready
//! 3. **Message Loop**: run each `action` frame in its own task and send
//!    back an `actionResult` frame
//! 4. **Termination**: return when the host closes or the transport fails;
//!    invocations still in flight are aborted
//!
//! The session does not reconnect. Pings are answered by tungstenite itself.

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};
use url::Url;

use super::message::{ActionInvocation, ActionResult, InboundFrame, OutboundFrame};
use crate::app::Toolkit;
use crate::error::{Error, Result};

/// Serves a [`Toolkit`]'s actions to the host.
pub struct ToolkitSession {
    ws_url: String,
    api_key: String,
    toolkit: Arc<Toolkit>,
}

impl ToolkitSession {
    pub fn new(ws_url: impl Into<String>, api_key: impl Into<String>, toolkit: Arc<Toolkit>) -> Self {
        Self {
            ws_url: ws_url.into(),
            api_key: api_key.into(),
            toolkit,
        }
    }

    /// Session URL with the toolkit role appended to the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL does not parse.
    pub fn session_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.ws_url)?;
        url.query_pairs_mut().append_pair("type", "toolkit");
        Ok(url)
    }

    /// Connect, register actions and serve invocations until the host
    /// closes the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// transport fails mid-session.
    pub async fn run(&self) -> Result<()> {
        let url = self.session_url()?;
        let mut request = url.as_str().into_client_request()?;
        let auth = HeaderValue::from_str(&self.api_key)
            .map_err(|e| Error::Connection(format!("invalid API key header: {e}")))?;
        request.headers_mut().insert("Authorization", auth);

        info!(url = %self.ws_url, "Connecting to toolkit host");
        let (ws, response) = connect_async(request).await?;
        info!(status = %response.status(), "Toolkit session connected");

        let (mut sink, mut stream) = ws.split();
        let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

        // Single writer owns the sink; action tasks send through `tx`.
        let writer = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                if let Err(e) = sink.send(message).await {
                    error!(error = %e, "Failed to send frame");
                    break;
                }
            }
            let _ = sink.close().await;
        });

        let register = serde_json::to_string(&OutboundFrame::register(self.toolkit.specs()))?;
        tx.send(Message::Text(register))
            .map_err(|_| Error::Connection("session writer stopped".into()))?;
        info!(actions = self.toolkit.len(), "Toolkit is ready to use");

        let mut invocations = JoinSet::new();
        let outcome = loop {
            let frame = tokio::select! {
                frame = stream.next() => frame,
                Some(joined) = invocations.join_next(), if !invocations.is_empty() => {
                    if let Err(e) = joined {
                        error!(error = %e, "Action task failed");
                    }
                    continue;
                }
            };
            let Some(frame) = frame else {
                info!("Toolkit session stream ended");
                break Ok(());
            };
            match frame {
                Ok(Message::Text(text)) => {
                    debug!(raw = %text, "Received frame");
                    match InboundFrame::parse(&text) {
                        Ok(InboundFrame::Action(invocation)) => {
                            self.spawn_invocation(&mut invocations, invocation, tx.clone());
                        }
                        Ok(InboundFrame::Other(kind)) => {
                            debug!(kind = %kind, "Ignoring frame");
                        }
                        Err(e) => {
                            warn!(error = %e, raw = %text, "Failed to parse frame");
                        }
                    }
                }
                Ok(Message::Ping(_)) => debug!("Received ping"),
                Ok(Message::Close(frame)) => {
                    info!(frame = ?frame, "Toolkit session closed by host");
                    break Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Toolkit session error");
                    break Err(Error::from(e));
                }
            }
        };

        if !invocations.is_empty() {
            warn!(pending = invocations.len(), "Aborting unfinished actions");
        }
        // Aborted tasks drop their senders, which lets the writer drain and stop.
        invocations.shutdown().await;
        drop(tx);
        let _ = writer.await;
        outcome
    }

    fn spawn_invocation(
        &self,
        invocations: &mut JoinSet<()>,
        invocation: ActionInvocation,
        tx: mpsc::UnboundedSender<Message>,
    ) {
        let toolkit = Arc::clone(&self.toolkit);
        invocations.spawn(async move {
            let ctx = invocation.context();
            info!(action = %ctx.action, action_id = ctx.action_id, agent_id = ctx.agent_id, "Action invoked");

            let result = toolkit.dispatch(&ctx, invocation.payload()).await;
            let frame = OutboundFrame::ActionResult(ActionResult::new(&ctx, result));
            match serde_json::to_string(&frame) {
                Ok(json) => {
                    if tx.send(Message::Text(json)).is_err() {
                        warn!(action_id = ctx.action_id, "Session closed before result was sent");
                    }
                }
                Err(e) => error!(error = %e, "Failed to encode action result"),
            }
        });
    }
}
