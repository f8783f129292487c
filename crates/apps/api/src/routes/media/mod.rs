pub mod error;
pub mod handlers;
pub mod interfaces;
pub mod router;
pub mod websocket;
