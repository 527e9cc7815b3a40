use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use roster::data::{Activity, Directory, MessageResponse, ParticipantQuery};
use roster::errors::ActivityError;

use super::error::ApiError;
use crate::services::ActivityService;

/// Turns a rejected query string into a JSON `400` instead of axum's plain-text one.
fn participant_query(
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Query<ParticipantQuery>, ActivityError> {
    query.map_err(|rejection| ActivityError::InvalidQuery(rejection.body_text()))
}

/// Handler to list every activity with its roster
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<Directory>, ApiError> {
    let directory = state.activities.list().await?;
    Ok(Json(directory))
}

/// Handler to get a single activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let activity = state.activities.get(&activity_name).await?;
    Ok(Json(activity))
}

/// Handler to sign a participant up for an activity
pub async fn sign_up(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = participant_query(query)?;
    state
        .activities
        .sign_up(&activity_name, &query.email)
        .await?;
    Ok(Json(MessageResponse::signed_up(&query.email, &activity_name)))
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(query) = participant_query(query)?;
    state
        .activities
        .unregister(&activity_name, &query.email)
        .await?;
    Ok(Json(MessageResponse::unregistered(
        &query.email,
        &activity_name,
    )))
}
