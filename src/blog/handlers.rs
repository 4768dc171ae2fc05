//! Blog endpoints.
//!
//! Every handler that touches the store takes it as its first argument; the
//! routes in [`super::routes`] bind it with [`with_state`](crate::with_state).
//! CORS headers are stamped on the final response, so 404s and 500s carry
//! them as well.

use std::sync::Arc;

use http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue};
use tracing::debug;

use super::error::ApiError;
use super::model::{Blog, User};
use super::store::BlogStore;
use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub const GREETING: &str = "Welcome to the blog API\n";

/// `GET /`
pub async fn welcome(_req: Request) -> &'static str {
    GREETING
}

/// `POST /blog`, `GET /blog`: creates a blog for a fresh user and returns it.
/// The request body is ignored.
pub async fn create_blog(store: Arc<dyn BlogStore>, _req: Request) -> Response {
    with_cors("POST, GET", create(store.as_ref()))
}

/// `GET /blog/{id}`
pub async fn get_blog(store: Arc<dyn BlogStore>, req: Request) -> Response {
    with_cors("GET", get(store.as_ref(), blog_id(&req)))
}

/// `DELETE /blog/{id}`: 200 with a confirmation, or a single 404.
pub async fn delete_blog(store: Arc<dyn BlogStore>, req: Request) -> Response {
    with_cors("DELETE", delete(store.as_ref(), blog_id(&req)))
}

fn create(store: &dyn BlogStore) -> Result<Response, ApiError> {
    let blog = Blog::new(User::generate());
    let body = serde_json::to_vec(&blog)?;
    debug!(blog_id = %blog.blog_id, "blog created");
    store.put(blog)?;
    Ok(Response::json(body))
}

fn get(store: &dyn BlogStore, id: &str) -> Result<Response, ApiError> {
    let blog = store.get(id)?.ok_or_else(|| ApiError::NotFound(id.to_owned()))?;
    Ok(Response::json(serde_json::to_vec(&blog)?))
}

fn delete(store: &dyn BlogStore, id: &str) -> Result<Response, ApiError> {
    if store.delete(id)?.is_none() {
        return Err(ApiError::NotFound(id.to_owned()));
    }
    debug!(blog_id = %id, "blog deleted");
    Ok(Response::text(format!("Blog with ID {id} is deleted")))
}

fn with_cors(methods: &'static str, result: Result<Response, ApiError>) -> Response {
    let mut res = result.into_response();
    res.set_header(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    res.set_header(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(methods));
    res
}

fn blog_id(req: &Request) -> &str {
    // Only reachable through `/blog/{id}`, so the param is always present.
    req.param("id").unwrap_or_default()
}
