use crate::api_state::ApiContext;
use axum::extract::ws::{Message, WebSocket};
use tokio::select;
use tracing::{info, warn};

pub async fn handle_media_socket(mut socket: WebSocket, context: ApiContext) {
    // Connecting registers the observer; events emitted from here on are
    // delivered, nothing earlier is.
    let mut observer = context.broadcaster.connect();
    info!("WS observer connected");

    loop {
        select! {
            event = observer.recv() => {
                match event {
                    Some(event) => {
                        let text = match serde_json::to_string(&event) {
                            Ok(text) => text,
                            Err(e) => {
                                warn!("Failed to serialize broadcast event: {e}");
                                continue;
                            }
                        };
                        if socket.send(Message::Text(text.into())).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                    _ => {}
                }
            }
        }
    }

    // Dropping the observer deregisters it; queued events are discarded.
    info!("WS observer disconnected");
}
