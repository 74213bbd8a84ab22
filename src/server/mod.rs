//! HTTP surface of the catalog.
//!
//! Thin axum layer: one parameterless GET per collection accessor plus a
//! liveness probe. All failure semantics live in the facade; handlers only
//! translate a surfaced fault into the fixed error body.

pub mod endpoints;
pub mod errors;

use std::io;
use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use log::{error, info};
use tower_http::cors::{Any, CorsLayer};

use crate::repo::FacadeCatalog;

/// Shared handler state: the read-access facade over the injected engine.
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<FacadeCatalog>,
}

impl AppState {
    pub fn new(facade: FacadeCatalog) -> Self {
        Self {
            facade: Arc::new(facade),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(endpoints::health))
        .route("/api/v1/fields", get(endpoints::field_index))
        .route("/api/v1/semesters", get(endpoints::semester_index))
        .route("/api/v1/users", get(endpoints::user_index))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([Method::GET]),
        )
        .with_state(state)
}

/// Binds `addr` and serves until ctrl-c or SIGTERM.
pub async fn serve(addr: &str, state: AppState) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("unable to install ctrl-c handler :: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("unable to install SIGTERM handler :: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
