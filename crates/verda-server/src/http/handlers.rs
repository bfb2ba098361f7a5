use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::{error, info, warn};
use verda_api::{map_error, ApiError, ApiErrorCode, InsertPledgeDto, PledgeDto};

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    let status =
        StatusCode::from_u16(map_error(err)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_body())).into_response()
}

pub(crate) fn is_draining(state: &AppState) -> bool {
    !state.accepting_requests.load(Ordering::Relaxed)
}

fn draining_response() -> Response {
    api_error_response(&ApiError::new(
        ApiErrorCode::NotReady,
        "Server draining; refusing new requests",
        serde_json::Value::Null,
    ))
}

pub(crate) async fn landing_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    if is_draining(&state) {
        return draining_response();
    }
    match state.store.probe().await {
        Ok(()) => Json(json!({"status": "ready"})).into_response(),
        Err(err) => {
            warn!(code = err.code.as_str(), "store probe failed: {err}");
            api_error_response(&ApiError::not_ready())
        }
    }
}

pub(crate) async fn create_pledge_handler(
    State(state): State<AppState>,
    payload: Result<Json<InsertPledgeDto>, JsonRejection>,
) -> Response {
    if is_draining(&state) {
        return draining_response();
    }
    let Json(dto) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            info!("rejected malformed pledge body");
            return api_error_response(&ApiError::malformed_body(&rejection.body_text()));
        }
    };
    let insert = match dto.validate() {
        Ok(insert) => insert,
        Err(failure) => {
            info!(
                failed_fields = failure.field_errors.len(),
                "pledge validation failed"
            );
            return api_error_response(&ApiError::validation_failed(&failure.field_errors));
        }
    };
    match state.store.create(insert).await {
        Ok(pledge) => {
            info!(pledge_id = %pledge.id.as_str(), "pledge created");
            Json(PledgeDto::from(pledge)).into_response()
        }
        Err(err) => {
            error!(code = err.code.as_str(), "pledge create failed: {err}");
            api_error_response(&ApiError::store_failure())
        }
    }
}

pub(crate) async fn list_pledges_handler(State(state): State<AppState>) -> Response {
    if is_draining(&state) {
        return draining_response();
    }
    match state.store.list_all().await {
        Ok(pledges) => {
            let rows: Vec<PledgeDto> = pledges.into_iter().map(PledgeDto::from).collect();
            Json(rows).into_response()
        }
        Err(err) => {
            error!(code = err.code.as_str(), "pledge list failed: {err}");
            api_error_response(&ApiError::new(
                ApiErrorCode::StoreFailure,
                "Failed to fetch pledges",
                serde_json::Value::Null,
            ))
        }
    }
}
