use http::StatusCode;
use thiserror::Error;
use tracing::error;

use super::store::StoreError;
use crate::response::{IntoResponse, Response};

/// Request-level failures of the blog handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Blog with ID {0} is not found")]
    NotFound(String),

    #[error("store: {0}")]
    Store(#[from] StoreError),

    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .text(self.to_string()),
            Self::Store(_) | Self::Encode(_) => {
                error!("request failed: {self}");
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .text("internal server error")
            }
        }
    }
}
