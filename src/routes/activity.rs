use crate::AppState;
use crate::db::models::activity::RecordActivityRequest;
use crate::db::models::api::ApiResponse;
use crate::services::ActivityService;
use crate::services::context::RequestContext;
use crate::validation::ValidatedJson;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

pub async fn record_activity(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    ValidatedJson(payload): ValidatedJson<RecordActivityRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match ActivityService::record(&mut conn, &ctx, &payload) {
        Ok(row) => {
            let response = ApiResponse::success(row, "Activity recorded successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_activity_stats(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match ActivityService::stats(&mut conn, &ctx) {
        Ok(stats) => {
            let response = ApiResponse::success(stats, "Activity stats retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
