use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::progress::{CompleteSkillRequest, QuizSubmissionRequest, SkillQuery};
use crate::services::context::RequestContext;
use crate::services::{ProgressService, QuizService, RoadmapsService};
use crate::validation::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_progress(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(roadmap_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let roadmap = match RoadmapsService::get(&mut conn, &ctx, roadmap_id) {
        Ok(roadmap) => roadmap,
        Err(err) => return err.into_response(),
    };

    match ProgressService::progress(&mut conn, &ctx, &roadmap) {
        Ok(progress) => {
            let response = ApiResponse::success(progress, "Progress retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn complete_skill(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(roadmap_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CompleteSkillRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let roadmap = match RoadmapsService::get(&mut conn, &ctx, roadmap_id) {
        Ok(roadmap) => roadmap,
        Err(err) => return err.into_response(),
    };

    match ProgressService::complete_skill(&mut conn, &ctx, &roadmap, &payload) {
        Ok(row) => {
            let response = ApiResponse::success(row, "Skill marked complete");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn submit_quiz(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(roadmap_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<QuizSubmissionRequest>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let roadmap = match RoadmapsService::get(&mut conn, &ctx, roadmap_id) {
        Ok(roadmap) => roadmap,
        Err(err) => return err.into_response(),
    };

    match QuizService::submit(&mut conn, &ctx, &roadmap, &payload) {
        Ok(result) => {
            let message = if result.passed {
                "Quiz passed"
            } else {
                "Quiz failed"
            };
            let response = ApiResponse::success(result, message);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_skill_detail(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(roadmap_id): Path<Uuid>,
    Query(query): Query<SkillQuery>,
) -> impl IntoResponse {
    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    let roadmap = match RoadmapsService::get(&mut conn, &ctx, roadmap_id) {
        Ok(roadmap) => roadmap,
        Err(err) => return err.into_response(),
    };

    match ProgressService::skill_detail(&mut conn, &ctx, &roadmap, &query) {
        Ok(detail) => {
            let response = ApiResponse::success(detail, "Skill retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
