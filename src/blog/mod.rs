//! The blog API: records, storage, handlers and the route table.

mod error;
pub mod handlers;
mod model;
mod store;

use std::sync::Arc;

pub use error::ApiError;
pub use model::{Blog, User};
pub use store::{BlogStore, MemoryStore, StoreError};

use crate::config::Config;
use crate::handler::with_state;
use crate::health;
use crate::method::Method;
use crate::middleware::Trace;
use crate::router::Router;

/// Builds the application router over `store`.
///
/// | Method    | Path         | Handler                   |
/// |-----------|--------------|---------------------------|
/// | GET       | `/`          | [`handlers::welcome`]     |
/// | POST, GET | `/blog`      | [`handlers::create_blog`] |
/// | GET       | `/blog/{id}` | [`handlers::get_blog`]    |
/// | DELETE    | `/blog/{id}` | [`handlers::delete_blog`] |
/// | GET       | `/healthz`   | [`health::liveness`]      |
/// | GET       | `/readyz`    | [`health::readiness`]     |
pub fn routes(config: &Config, store: Arc<dyn BlogStore>) -> Router {
    Router::new()
        .layer(Trace)
        .layer(config.response_header.clone())
        .on(Method::Get, "/", handlers::welcome)
        .on_many(
            &[Method::Post, Method::Get],
            "/blog",
            with_state(Arc::clone(&store), handlers::create_blog),
        )
        .on(Method::Get, "/blog/{id}", with_state(Arc::clone(&store), handlers::get_blog))
        .on(Method::Delete, "/blog/{id}", with_state(store, handlers::delete_blog))
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", health::readiness)
}

/// The default application: [`routes`] over a fresh [`MemoryStore`].
pub fn app(config: &Config) -> Router {
    routes(config, Arc::new(MemoryStore::new()))
}
