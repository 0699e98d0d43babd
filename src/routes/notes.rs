use crate::AppState;
use crate::db::models::api::ApiResponse;
use crate::db::models::note::SaveNoteRequest;
use crate::db::models::progress::SkillQuery;
use crate::services::context::RequestContext;
use crate::services::{NotesService, RoadmapsService};
use crate::validation::ValidatedJson;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn get_note(
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

    match NotesService::get(&mut conn, &ctx, &roadmap, &query) {
        Ok(note) => {
            let response = ApiResponse::success(note, "Note retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn save_note(
    State(state): State<Arc<AppState>>,
    Extension(ctx): Extension<RequestContext>,
    Path(roadmap_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SaveNoteRequest>,
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

    match NotesService::save(&mut conn, &ctx, &roadmap, &payload) {
        Ok(note) => {
            let response = ApiResponse::success(note, "Note saved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
