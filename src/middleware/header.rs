use http::header::{HeaderName, HeaderValue};

use super::{Middleware, Next};
use crate::handler::BoxFuture;
use crate::request::Request;

/// Sets one fixed header on every response passing through it.
#[derive(Clone, Debug)]
pub struct SetHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl SetHeader {
    /// # Panics
    ///
    /// Panics if `name` is not a lowercase header name or `value` contains
    /// bytes not allowed in a header value. Both are fixed at startup.
    pub fn new(name: &'static str, value: &'static str) -> Self {
        Self { name: HeaderName::from_static(name), value: HeaderValue::from_static(value) }
    }
}

impl Middleware for SetHeader {
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        let name = self.name.clone();
        let value = self.value.clone();
        Box::pin(async move {
            let mut res = next.run(req).await;
            res.set_header(name, value);
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use http::{HeaderMap, StatusCode};

    use super::*;
    use crate::handler::Handler;
    use crate::response::Response;

    async fn teapot(_req: Request) -> Response {
        let mut res = Response::builder()
            .status(StatusCode::IM_A_TEAPOT)
            .text("short and stout");
        res.set_header(HeaderName::from_static("x-request-id"), HeaderValue::from_static("overwritten"));
        res
    }

    #[tokio::test]
    async fn sets_header_and_replaces_handler_value() {
        let layer: Arc<dyn Middleware> = Arc::new(SetHeader::new("x-request-id", "12345"));
        let req = Request::new(http::Method::GET, "/", HeaderMap::new(), Default::default());

        let res = Next::new(Arc::from(vec![layer]), teapot.into_boxed_handler()).run(req).await;

        assert_eq!(res.status_code(), StatusCode::IM_A_TEAPOT);
        assert_eq!(res.headers().get_all("x-request-id").iter().count(), 1);
        assert_eq!(res.headers()["x-request-id"], "12345");
    }
}
