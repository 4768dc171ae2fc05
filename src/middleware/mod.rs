//! Middleware layer.
//!
//! Middleware wraps the whole router: it sees every request before routing
//! and every response after it, including the 404 / 405 fallbacks. It is the
//! right place for cross-cutting concerns such as tracing and fixed response
//! headers.
//!
//! ```rust,no_run
//! use blog_api::{Router, middleware::{SetHeader, Trace}};
//!
//! let app = Router::new()
//!     .layer(Trace)
//!     .layer(SetHeader::new("x-request-id", "12345"));
//! ```
//!
//! Layers run in registration order: the first one added is the outermost.

use std::sync::Arc;

use crate::handler::{BoxFuture, BoxedHandler};
use crate::request::Request;

mod header;
mod trace;

pub use header::SetHeader;
pub use trace::Trace;

/// A wrapping handler.
///
/// Implementations call [`Next::run`] to continue down the chain and may
/// inspect or modify the request before and the response after.
pub trait Middleware: Send + Sync + 'static {
    fn handle(&self, req: Request, next: Next) -> BoxFuture;
}

pub(crate) type Chain = Arc<[Arc<dyn Middleware>]>;

/// The remainder of the middleware chain, ending at the matched handler.
pub struct Next {
    chain: Chain,
    index: usize,
    endpoint: BoxedHandler,
}

impl Next {
    pub(crate) fn new(chain: Chain, endpoint: BoxedHandler) -> Self {
        Self { chain, index: 0, endpoint }
    }

    /// Runs the rest of the chain against `req`.
    pub fn run(self, req: Request) -> BoxFuture {
        match self.chain.get(self.index).cloned() {
            Some(layer) => {
                let next = Self { index: self.index + 1, ..self };
                layer.handle(req, next)
            }
            None => self.endpoint.call(req),
        }
    }
}
