//! HTTP Layer - 单一 JSON 接口

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::ApiKeyVerifier;
pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
