//! Log pipeline smoke test

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::api::types::Json;

/// Body returned by `GET /api/test`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResponse {
    pub status: String,
    pub message: String,
    pub error_message: String,
}

/// Emit one info and one error line so log shipping can be verified end to end
pub async fn log_test() -> Json<DiagnosticResponse> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let message = format!(
        "[DIAGNOSTIC LOG] This is a test log from the /api/test endpoint. Timestamp: {}",
        timestamp
    );
    let error_message = format!(
        "[DIAGNOSTIC ERROR] This is a test error from the /api/test endpoint. Timestamp: {}",
        timestamp
    );

    info!("{}", message);
    error!("{}", error_message);

    Json(DiagnosticResponse {
        status: "Test API executed successfully.".to_string(),
        message,
        error_message,
    })
}
