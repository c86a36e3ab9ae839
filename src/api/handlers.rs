//! HTTP request handlers for the Notice Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::perform_reconciliation;
use crate::documents::render_documents;
use crate::error::EngineResult;
use crate::models::ReconciliationReport;

use super::request::ReconciliationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reconcile", post(reconcile_handler))
        .with_state(state)
}

/// Handler for POST /reconcile.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconciliationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing reconciliation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return json_response(StatusCode::BAD_REQUEST, Json(error));
        }
    };

    let start_time = Instant::now();
    match handle_request(&state, request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                unserved_notice_days = report.result.unserved_notice_days,
                short_notice_days_unpaid = %report.result.short_notice_days_unpaid,
                last_payroll_date = %report.result.last_payroll_date,
                duration_us = start_time.elapsed().as_micros(),
                "Reconciliation completed successfully"
            );
            json_response(StatusCode::OK, Json(report))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Reconciliation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, Json(api_error.error))
        }
    }
}

fn handle_request(
    state: &AppState,
    request: ReconciliationRequest,
) -> EngineResult<ReconciliationReport> {
    let config = state.config();
    let policy = request.disposition;
    let include_documents = request.include_documents;
    let case = request.into_case(config.default_rest_days())?;

    let mut report = perform_reconciliation(&case, config, policy)?;
    if include_documents {
        let hr_contact = config.jurisdiction().hr_contact_email.as_deref();
        report.documents = Some(render_documents(&case, &report.result, hr_contact));
    }
    Ok(report)
}

fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: Json<T>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_router_for_test() -> Router {
        let config = ConfigLoader::load("./config/my-kl").expect("Failed to load config");
        create_router(AppState::new(config))
    }

    async fn post_json(body: String) -> (StatusCode, Value) {
        let response = create_router_for_test()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reconcile")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_reconcile_endpoint_returns_report() {
        let body = json!({
            "employee": {"id": "4200", "name": "John Doe"},
            "notice_accepted_date": "2024-07-12",
            "notice_period": "1 month",
            "requested_last_day": "2024-07-25",
            "leave_balance": "50"
        });
        let (status, value) = post_json(body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["employee_id"], "4200");
        assert_eq!(value["result"]["official_last_working_day"], "2024-08-11");
        assert!(value.get("documents").is_none());
    }

    #[tokio::test]
    async fn test_syntax_error_is_malformed_json() {
        let (status, value) = post_json("{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let body = json!({"employee": {"id": "4200", "name": "John Doe"}});
        let (status, value) = post_json(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["code"], "VALIDATION_ERROR");
    }
}
