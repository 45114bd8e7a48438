//! JSON endpoints

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::domains::agenda::actions::get_event_by_id;
use crate::domains::member::actions::{
    submit_talent, SubmissionError, TalentSubmissionInput, ValidationIssue,
};
use crate::server::app::AppState;

/// POST /api/submit-talent
///
/// 200 with a confirmation message, 400 with every validation issue, or a
/// generic 500 when the email could not be sent.
pub async fn submit_talent_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<TalentSubmissionInput>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected talent submission body");
            let issues = vec![ValidationIssue::field("body", &rejection.body_text())];
            return (StatusCode::BAD_REQUEST, Json(json!({ "errors": issues }))).into_response();
        }
    };

    let deps = &state.deps;
    match submit_talent(input, deps.mailer.as_ref(), &deps.submission_recipient).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "message": "Submission received successfully!" })),
        )
            .into_response(),
        Err(SubmissionError::Invalid(issues)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "errors": issues }))).into_response()
        }
        Err(SubmissionError::Delivery(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Internal Server Error" })),
        )
            .into_response(),
    }
}

/// GET /api/events/:id
pub async fn event_details_api_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match get_event_by_id(state.deps.events.as_ref(), &id).await {
        Some(event) => Json(event).into_response(),
        None => (StatusCode::NOT_FOUND, Json(serde_json::Value::Null)).into_response(),
    }
}
