pub mod activity;
pub mod notes;
pub mod profiles;
pub mod progress;
pub mod roadmaps;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/profile", get(profiles::get_profile))
        .route("/profile", put(profiles::update_profile))
        .route("/profile/assessment", post(profiles::submit_assessment))
        .route("/profile/career", post(profiles::choose_career))
        .route("/profile/restart", post(profiles::restart_onboarding))
        .route("/generate-roadmap", post(roadmaps::generate_roadmap))
        .route("/roadmaps", get(roadmaps::list_roadmaps))
        .route("/roadmaps/current", get(roadmaps::get_current_roadmap))
        .route("/roadmaps/:roadmap_id", get(roadmaps::get_roadmap))
        .route(
            "/roadmaps/:roadmap_id/progress",
            get(progress::get_progress),
        )
        .route(
            "/roadmaps/:roadmap_id/skills/complete",
            post(progress::complete_skill),
        )
        .route(
            "/roadmaps/:roadmap_id/quiz/submit",
            post(progress::submit_quiz),
        )
        .route(
            "/roadmaps/:roadmap_id/skill",
            get(progress::get_skill_detail),
        )
        .route("/roadmaps/:roadmap_id/notes", get(notes::get_note))
        .route("/roadmaps/:roadmap_id/notes", put(notes::save_note))
        .route("/activity", post(activity::record_activity))
        .route("/activity/stats", get(activity::get_activity_stats))
        .with_state(state)
}
