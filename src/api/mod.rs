//! HTTP API module for conversion, health and usage endpoints.

pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::{bind_listener, serve};
