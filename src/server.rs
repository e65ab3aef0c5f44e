//! HTTP surface: `GET /` returns the route catalog.

use crate::catalog::RouteDescriptor;
use crate::config::Config;
use crate::error::CatalogError;
use crate::spec::{build_route_catalog, load_document};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct CatalogState {
    document_path: Arc<PathBuf>,
}

impl CatalogState {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: Arc::new(document_path.into()),
        }
    }

    pub fn document_path(&self) -> &PathBuf {
        &self.document_path
    }
}

/// Builds the router serving the catalog for `state`'s document.
pub fn router(state: CatalogState) -> Router {
    Router::new()
        .route("/", get(route_catalog))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_catalog(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<RouteDescriptor>>, CatalogError> {
    let result = async {
        let doc = load_document(state.document_path()).await?;
        build_route_catalog(&doc)
    }
    .await;

    match result {
        Ok(routes) => Ok(Json(routes)),
        Err(err @ CatalogError::MissingDocument { .. }) => {
            tracing::warn!(error = %err, "OpenAPI document missing");
            Err(err)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to build route catalog");
            Err(err)
        }
    }
}

/// Binds `0.0.0.0:<http_port>` and serves until the process stops.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn serve(config: &Config) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let app = router(CatalogState::new(config.document_path.clone()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        http_port = config.http_port,
        document = %config.document_path.display(),
        "Route catalog server running"
    );

    axum::serve(listener, app).await
}
