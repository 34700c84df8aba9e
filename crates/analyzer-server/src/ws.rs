//! Realtime progress channel endpoint
//!
//! Clients connect over WebSocket and receive a `node_update` event for
//! every pipeline progress label. Delivery is best-effort: a listener that
//! lags behind the broadcast channel skips the missed events.

use crate::AppState;
use analyzer_core::ProgressEvent;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Wire envelope for server-to-client events
#[derive(Debug, Serialize)]
struct WireEvent<'a> {
    event: &'a str,
    data: &'a ProgressEvent,
}

/// GET /ws - upgrade to the realtime progress channel
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let Some(progress) = state.progress.as_ref() else {
        return;
    };
    let mut events = progress.subscribe();

    debug!("Realtime client connected");

    let (mut sender, mut receiver) = socket.split();

    let greeting = ProgressEvent::new("AI Agent Connected");
    if send_event(&mut sender, &greeting).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    if send_event(&mut sender, &event).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Realtime listener lagged, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            message = receiver.next() => match message {
                // Client-to-server messages carry no meaning on this channel
                Some(Ok(_)) => {}
                _ => break,
            },
        }
    }

    debug!("Realtime client disconnected");
}

async fn send_event(
    sender: &mut SplitSink<WebSocket, Message>,
    event: &ProgressEvent,
) -> Result<(), axum::Error> {
    let payload = serde_json::to_string(&WireEvent {
        event: "node_update",
        data: event,
    })
    .map_err(axum::Error::new)?;

    sender.send(Message::Text(payload.into())).await
}
