use std::time::Instant;

use tracing::info;

use super::{Middleware, Next};
use crate::handler::BoxFuture;
use crate::request::Request;

/// Logs one line per request with method, path, status and latency.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl Middleware for Trace {
    fn handle(&self, req: Request, next: Next) -> BoxFuture {
        let method = req.method().clone();
        let path = req.path().to_owned();
        Box::pin(async move {
            let started = Instant::now();
            let res = next.run(req).await;
            info!(
                %method,
                %path,
                status = res.status_code().as_u16(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "request"
            );
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use http::{HeaderMap, StatusCode};

    use super::*;
    use crate::handler::Handler;
    use crate::response::Response;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn gone(_req: Request) -> Response {
        Response::builder().status(StatusCode::GONE).text("bye")
    }

    #[tokio::test]
    async fn logs_request_and_passes_response_through() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let layer: Arc<dyn Middleware> = Arc::new(Trace);
        let req = Request::new(http::Method::DELETE, "/blog/42", HeaderMap::new(), Default::default());
        let res = Next::new(Arc::from(vec![layer]), gone.into_boxed_handler()).run(req).await;

        assert_eq!(res.status_code(), StatusCode::GONE);
        assert_eq!(res.body(), b"bye");

        let line = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(line.contains("method=DELETE"), "{line}");
        assert!(line.contains("path=/blog/42"), "{line}");
        assert!(line.contains("status=410"), "{line}");
    }
}
