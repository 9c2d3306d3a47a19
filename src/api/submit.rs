//! Registration submission endpoint

use axum::{extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Registration, RegistrationSubmission};

/// `POST /api/submit`
///
/// Validates the team and its participants, stores them atomically and
/// returns the created registration with `201 Created`.
pub async fn submit_registration(
    State(state): State<AppState>,
    Json(submission): Json<RegistrationSubmission>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let registration = state.registration_service.submit(submission).await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
