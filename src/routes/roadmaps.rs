use crate::AppState;
use crate::cache::RoadmapCache;
use crate::db::models::api::{ApiResponse, ResponseMeta};
use crate::db::models::roadmap::{GenerateRoadmapRequest, SkillRoadmap};
use crate::services::RoadmapsService;
use crate::services::context::RequestContext;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

// 生成端点沿用前端既有的裸响应格式，不走统一响应结构
#[derive(Serialize)]
pub struct GenerateSuccess {
    pub success: bool,
    pub roadmap: SkillRoadmap,
}

#[derive(Serialize)]
pub struct GenerateFailure {
    pub error: String,
}

pub async fn generate_roadmap(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Json(payload): Json<GenerateRoadmapRequest>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        let error = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Missing required fields".to_string());
        return (StatusCode::BAD_REQUEST, Json(GenerateFailure { error })).into_response();
    }

    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let body = GenerateFailure {
                error: "Database connection failed".to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    match RoadmapsService::generate(&mut conn, state.generator.as_ref(), &ctx, &payload).await {
        Ok(roadmap) => {
            let cache = RoadmapCache::new(&state.redis);
            let _ = cache.invalidate(ctx.user_id).await;
            let _ = cache.cache_active(ctx.user_id, &roadmap).await;

            (
                StatusCode::OK,
                Json(GenerateSuccess {
                    success: true,
                    roadmap,
                }),
            )
                .into_response()
        }
        Err(err) => {
            let status = err.status_code();
            let body = GenerateFailure {
                error: err.user_message(),
            };
            (status, Json(body)).into_response()
        }
    }
}

pub async fn get_current_roadmap(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
) -> impl IntoResponse {
    let cache = RoadmapCache::new(&state.redis);
    if let Ok(Some(roadmap)) = cache.get_active(ctx.user_id).await {
        if let Ok(detail) = RoadmapsService::detail(roadmap) {
            let response = ApiResponse::success(detail, "Roadmap retrieved successfully");
            return (StatusCode::OK, Json(response)).into_response();
        }
    }

    let mut conn = match state.db.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match RoadmapsService::resolve_active(&mut conn, &ctx) {
        Ok(Some(roadmap)) => {
            let _ = cache.cache_active(ctx.user_id, &roadmap).await;
            match RoadmapsService::detail(roadmap) {
                Ok(detail) => {
                    let response = ApiResponse::success(detail, "Roadmap retrieved successfully");
                    (StatusCode::OK, Json(response)).into_response()
                }
                Err(err) => err.into_response(),
            }
        }
        Ok(None) => {
            let response = ApiResponse::<()>::not_found("No roadmap found");
            (StatusCode::NOT_FOUND, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Generation history, newest first. Superseded roadmaps stay listed; only
/// the profile pointer decides which one is current.
pub async fn list_roadmaps(
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

    match RoadmapsService::list(&mut conn, &ctx) {
        Ok(summaries) => {
            let meta = ResponseMeta {
                request_id: None,
                total_count: Some(summaries.len() as i64),
                execution_time_ms: None,
            };
            let response =
                ApiResponse::success_with_meta(summaries, "Roadmaps retrieved successfully", meta);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_roadmap(
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

    match RoadmapsService::get(&mut conn, &ctx, roadmap_id).and_then(RoadmapsService::detail) {
        Ok(detail) => {
            let response = ApiResponse::success(detail, "Roadmap retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
