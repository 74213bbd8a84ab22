use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::repo::FacadeError;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("failed to fetch {0}")]
    Fetch(&'static str),
}

impl From<FacadeError> for ServerError {
    fn from(value: FacadeError) -> Self {
        match value {
            FacadeError::Query { entity, .. } => Self::Fetch(entity),
        }
    }
}

/// Single-field error body the catalog's clients expect.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Fetch(entity) => format!("Failed to fetch {entity}"),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { message })).into_response()
    }
}
