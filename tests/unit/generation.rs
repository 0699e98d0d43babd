use roadmap_backend::db::models::roadmap::GenerationContext;
use roadmap_backend::error::AppError;
use roadmap_backend::generation::client::{truncate_for_log, validate_base_url};
use roadmap_backend::generation::{build_roadmap_prompt, map_generation_status, parse_roadmap_document};

#[test]
fn upstream_statuses_map_to_actionable_errors() {
    assert!(matches!(map_generation_status(429, ""), AppError::RateLimited));
    assert!(matches!(map_generation_status(402, ""), AppError::QuotaExhausted));
    assert!(matches!(
        map_generation_status(500, "boom"),
        AppError::GenerationFailed { .. }
    ));
    assert!(matches!(
        map_generation_status(503, ""),
        AppError::GenerationFailed { .. }
    ));
}

#[test]
fn generation_errors_carry_their_own_statuses() {
    assert_eq!(AppError::RateLimited.status_code().as_u16(), 429);
    assert_eq!(AppError::QuotaExhausted.status_code().as_u16(), 402);
    assert_eq!(AppError::GenerationParse.status_code().as_u16(), 502);
    assert_eq!(
        AppError::generation_failed("upstream status 500").status_code().as_u16(),
        502
    );
    // infrastructure detail never reaches the user-facing message
    let err = AppError::generation_failed("connect to 10.0.0.5:4317 refused");
    assert_eq!(err.user_message(), "Roadmap generation failed");
}

#[test]
fn document_gate_requires_a_phases_array() {
    assert!(parse_roadmap_document(r#"{"phases": []}"#).is_ok());
    assert!(matches!(
        parse_roadmap_document("this is not json"),
        Err(AppError::GenerationParse)
    ));
    assert!(matches!(
        parse_roadmap_document("{}"),
        Err(AppError::GenerationSchema)
    ));
    assert!(matches!(
        parse_roadmap_document(r#"{"phases": "nope"}"#),
        Err(AppError::GenerationSchema)
    ));
}

#[test]
fn prompt_carries_the_profile_lines() {
    let prompt = build_roadmap_prompt("Backend Developer", "Bachelor's degree", &[], 10, None);
    assert!(prompt.user.contains("Target Role/Skill: Backend Developer"));
    assert!(prompt.user.contains("Current Education: Bachelor's degree"));
    assert!(prompt.user.contains("Existing Skills: None specified"));
    assert!(prompt.user.contains("Weekly Learning Time: 10 hours"));
    assert!(
        prompt
            .user
            .ends_with("Ensure time estimates are realistic for 10 hours per week of study.")
    );
    // the contract fields the parser depends on are spelled out to the model
    assert!(prompt.system.contains("\"phases\""));
    assert!(prompt.system.contains("correctAnswer"));
}

#[test]
fn prompt_appends_context_hints_only_when_present() {
    let skills = vec!["HTML".to_string(), "CSS".to_string()];
    let ctx = GenerationContext {
        goal: Some("Get a frontend job".to_string()),
        daily_time: Some("2 hours".to_string()),
        ..Default::default()
    };
    let prompt = build_roadmap_prompt("Frontend Developer", "High school", &skills, 5, Some(&ctx));

    assert!(prompt.user.contains("Existing Skills: HTML, CSS"));
    assert!(prompt.user.contains("Goal: Get a frontend job"));
    assert!(prompt.user.contains("Daily Time Available: 2 hours"));
    assert!(!prompt.user.contains("Current Level:"));
    assert!(!prompt.user.contains("Background:"));
    assert!(!prompt.user.contains("Target Duration:"));
}

#[test]
fn base_url_scheme_rules() {
    assert!(validate_base_url("https://api.openai.com/v1").is_ok());
    assert!(validate_base_url("http://localhost:11434/v1").is_ok());
    assert!(validate_base_url("http://127.0.0.1:8080/v1").is_ok());
    assert!(validate_base_url("http://api.example.com/v1").is_err());
    assert!(validate_base_url("ftp://api.example.com").is_err());
    assert!(validate_base_url("not a url").is_err());
}

#[test]
fn log_truncation_respects_char_boundaries() {
    assert_eq!(truncate_for_log("hello", 10), "hello");
    assert_eq!(truncate_for_log("hello", 3), "hel");
    // the boundary falls inside the two-byte e-acute and backs off
    assert_eq!(truncate_for_log("héllo", 2), "h");
    assert_eq!(truncate_for_log("", 5), "");
}
