use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Request failed: {}", self);

        let message = match self {
            Error::Config(msg)
            | Error::Validation(msg)
            | Error::Parse(msg)
            | Error::Upstream(msg)
            | Error::Internal(msg) => msg,
            Error::Multipart(err) => err.to_string(),
        };

        // Clients read the `error` field; the status line stays 200 and the
        // body shape is the whole contract.
        let body = Json(json!({ "error": message }));
        (StatusCode::OK, body).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(err.to_string())
    }
}
