//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Requests that match no
//! tree fall back to `404`, or `405` when the path exists under another method
//! or the method itself is not one we route.
//! Middleware added with [`Router::layer`] wraps all of it.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use http::StatusCode;
use http::header::{ALLOW, HeaderValue};
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::{Chain, Middleware, Next};
use crate::request::Request;
use crate::response::Response;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    layers: Vec<Arc<dyn Middleware>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), layers: Vec::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.add(method, path, handler.into_boxed_handler())
    }

    /// Register the same handler under several methods.
    pub fn on_many(mut self, methods: &[Method], path: &str, handler: impl Handler) -> Self {
        let handler = handler.into_boxed_handler();
        for &method in methods {
            self = self.add(method, path, Arc::clone(&handler));
        }
        self
    }

    /// Wrap the router in `middleware`. The first layer added is the outermost.
    pub fn layer(mut self, middleware: impl Middleware) -> Self {
        self.layers.push(Arc::new(middleware));
        self
    }

    fn add(mut self, method: Method, path: &str, handler: BoxedHandler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods with a route matching `path`, sorted for a stable `allow` header.
    fn allowed(&self, path: &str) -> BTreeSet<Method> {
        self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| *method)
            .collect()
    }

    /// Runs `req` through the middleware chain and the matched handler.
    pub(crate) async fn dispatch(&self, chain: Chain, mut req: Request) -> Response {
        let method = Method::try_from(req.method()).ok();
        let matched = method.and_then(|m| self.lookup(m, req.path()));

        let endpoint = match matched {
            Some((handler, params)) => {
                req.params = params;
                handler
            }
            None => self.fallback(method.is_some(), req.path()),
        };

        Next::new(chain, endpoint).run(req).await
    }

    pub(crate) fn chain(&self) -> Chain {
        self.layers.iter().cloned().collect()
    }

    /// `404` for an unknown path under a known method, otherwise `405`.
    /// Methods outside RFC 9110 are always `405`; `allow` is omitted when the
    /// path has no routes at all.
    fn fallback(&self, known_method: bool, path: &str) -> BoxedHandler {
        let allowed = self.allowed(path);
        if known_method && allowed.is_empty() {
            return (|_req: Request| async { StatusCode::NOT_FOUND }).into_boxed_handler();
        }

        let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
        let handler = move |_req: Request| {
            let allow = allow.clone();
            async move {
                let mut res = Response::status(StatusCode::METHOD_NOT_ALLOWED);
                if allow.is_empty() {
                    return res;
                }
                if let Ok(value) = HeaderValue::from_str(&allow) {
                    res.set_header(ALLOW, value);
                }
                res
            }
        };
        handler.into_boxed_handler()
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
