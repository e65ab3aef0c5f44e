use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::path::PathBuf;
use thiserror::Error;

pub const MISSING_DOCUMENT_MESSAGE: &str = "OpenAPI file not found";
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse OpenAPI file";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("OpenAPI document not found at {}", path.display())]
    MissingDocument { path: PathBuf },

    #[error("Failed to read OpenAPI document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse OpenAPI document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Reference not found: {reference}")]
    UnresolvedReference { reference: String },

    #[error("Operation {method} is declared more than once on the same path")]
    DuplicateOperation { method: &'static str },
}

impl CatalogError {
    /// Fixed message shown to clients; the underlying cause stays in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::MissingDocument { .. } => MISSING_DOCUMENT_MESSAGE,
            Self::Read { .. }
            | Self::Parse(_)
            | Self::UnresolvedReference { .. }
            | Self::DuplicateOperation { .. } => PARSE_FAILURE_MESSAGE,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.client_message() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
