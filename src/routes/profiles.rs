use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::profile::{AssessmentRequest, CareerRequest, UpdateProfileRequest};
use crate::services::ProfilesService;
use crate::services::context::RequestContext;
use crate::validation::ValidatedJson;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

pub async fn get_profile(
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

    match ProfilesService::get(&mut conn, &ctx) {
        Ok(profile) => {
            let response = ApiResponse::success(profile, "Profile retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match ProfilesService::update(&mut conn, &ctx, &payload) {
        Ok(profile) => {
            let response = ApiResponse::success(profile, "Profile updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn submit_assessment(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<AssessmentRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match ProfilesService::submit_assessment(&mut conn, &ctx, &payload) {
        Ok(profile) => {
            let response = ApiResponse::success(profile, "Assessment saved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn choose_career(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<CareerRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match ProfilesService::choose_career(&mut conn, &ctx, &payload) {
        Ok(profile) => {
            let response = ApiResponse::success(profile, "Career choice saved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn restart_onboarding(
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

    match ProfilesService::restart(&mut conn, &ctx) {
        Ok(profile) => {
            let response = ApiResponse::success(profile, "Onboarding restarted");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
