//! Collection read endpoints.
//!
//! Each handler serializes the full collection as the response body. Under a
//! degrade policy the facade already resolved any fault to an empty
//! collection, so the error branch is only reachable for accessors
//! configured to surface.

use axum::{Json, extract::State};
use log::trace;

use crate::server::{AppState, errors::ServerError};
use crate::types;

pub async fn field_index(
    State(state): State<AppState>,
) -> Result<Json<Vec<types::Field>>, ServerError> {
    trace!("listing fields");
    let fetched = state.facade.fields().await?;
    Ok(Json(fetched.items))
}

pub async fn semester_index(
    State(state): State<AppState>,
) -> Result<Json<Vec<types::Semester>>, ServerError> {
    trace!("listing semesters");
    let fetched = state.facade.semesters().await?;
    Ok(Json(fetched.items))
}

pub async fn user_index(
    State(state): State<AppState>,
) -> Result<Json<Vec<types::User>>, ServerError> {
    trace!("listing users");
    let fetched = state.facade.users().await?;
    Ok(Json(fetched.items))
}
