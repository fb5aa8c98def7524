//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};

use crate::{
    domain::{Subscriber, SubscriberInbox},
    infrastructure::dto::websocket::{ChatMessage, SendMessageRequest},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Register before answering the upgrade: anything published after the
    // client sees the handshake response reaches this subscriber.
    let (subscriber, inbox) = state.join_room_usecase.execute();
    tracing::info!("Subscriber '{}' connected", subscriber.id());

    let failed_state = state.clone();
    let failed_subscriber = subscriber.clone();
    ws.on_failed_upgrade(move |e| {
        tracing::warn!(
            "WebSocket upgrade failed for '{}': {}",
            failed_subscriber.id(),
            e
        );
        failed_state.leave_room_usecase.execute(&failed_subscriber);
    })
    .on_upgrade(move |socket| handle_socket(socket, state, subscriber, inbox))
}

/// Spawns a task that drains the subscriber inbox into the WebSocket sink.
///
/// History replay and live broadcasts arrive through the same inbox and are
/// framed identically.
fn pusher_loop(
    mut inbox: SubscriberInbox,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(message) = inbox.recv().await {
            let frame = ChatMessage::from(message);
            let json = match serde_json::to_string(&frame) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize chat frame: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Spawns a task that turns inbound frames into published messages.
fn receiver_loop(
    mut receiver: SplitStream<WebSocket>,
    state: Arc<AppState>,
    subscriber_id: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let request = match serde_json::from_str::<SendMessageRequest>(&text) {
                        Ok(request) => request,
                        Err(e) => {
                            tracing::warn!("Ignoring malformed frame from '{}': {}", subscriber_id, e);
                            continue;
                        }
                    };
                    if let Err(e) = state
                        .send_message_usecase
                        .execute(request.sender, request.content)
                    {
                        tracing::warn!("Rejected message from '{}': {}", subscriber_id, e);
                    }
                }
                Message::Ping(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Subscriber '{}' requested close", subscriber_id);
                    break;
                }
                _ => {}
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    subscriber: Subscriber,
    inbox: SubscriberInbox,
) {
    let (sender, receiver) = socket.split();

    let mut send_task = pusher_loop(inbox, sender);
    let mut recv_task = receiver_loop(receiver, state.clone(), subscriber.id().to_string());

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.leave_room_usecase.execute(&subscriber);
    tracing::info!("Subscriber '{}' disconnected", subscriber.id());
}
