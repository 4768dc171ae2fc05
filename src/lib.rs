//! # blog-api
//!
//! A small HTTP API over an in-memory collection of blog posts.
//!
//! ## Layout
//!
//! - [`Router`] / [`Server`] — radix-tree routing via [`matchit`] on top of
//!   hyper, with graceful shutdown on SIGTERM / Ctrl-C.
//! - [`middleware`] — layers wrapping the whole router; the app installs
//!   [`middleware::Trace`] and a fixed `x-request-id` header.
//! - [`blog`] — the records, the [`blog::BlogStore`] abstraction and the
//!   handlers.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use blog_api::{Config, Server, blog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), blog_api::Error> {
//!     let config = Config::default();
//!     Server::bind(config.addr).serve(blog::app(&config)).await
//! }
//! ```

mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;

pub mod blog;
pub mod health;
pub mod middleware;

pub use config::{Config, DEFAULT_ADDR, REQUEST_ID_HEADER, REQUEST_ID_VALUE};
pub use error::Error;
pub use handler::{BoxFuture, Handler, with_state};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{Server, serve_listener, shutdown_signal};
