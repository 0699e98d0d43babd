use chrono::Utc;
use roadmap_backend::db::models::profile::{Profile, ProfileStage};
use roadmap_backend::services::ProfilesService;
use roadmap_backend::validation::profile::validate_assessment_answers;
use uuid::Uuid;

fn profile(skills: Vec<&str>, target: Option<&str>, onboarded: bool) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        email: Some("student@example.com".to_string()),
        full_name: None,
        education_level: None,
        existing_skills: skills.into_iter().map(String::from).collect(),
        target_skill: target.map(String::from),
        weekly_hours: None,
        weekly_goal_hours: None,
        onboarding_completed: onboarded,
        active_roadmap_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn assessed() -> Vec<&'static str> {
    vec![
        "General_Q1: I'm completely new",
        "General_Q2: A stable job",
        "General_Q3: Visual things",
        "General_Q4: Evenings",
        "Recommended: Frontend Development",
    ]
}

#[test]
fn stage_walks_the_onboarding_funnel() {
    assert_eq!(
        ProfilesService::compute_stage(&profile(vec![], None, false)),
        ProfileStage::NeedsAssessment
    );
    // plain skills alone do not count as a finished assessment
    assert_eq!(
        ProfilesService::compute_stage(&profile(vec!["HTML"], None, false)),
        ProfileStage::NeedsAssessment
    );
    assert_eq!(
        ProfilesService::compute_stage(&profile(assessed(), None, false)),
        ProfileStage::NeedsCareerChoice
    );
    // an empty target is the same as no target
    assert_eq!(
        ProfilesService::compute_stage(&profile(assessed(), Some(""), false)),
        ProfileStage::NeedsCareerChoice
    );
    assert_eq!(
        ProfilesService::compute_stage(&profile(assessed(), Some("Backend Developer"), false)),
        ProfileStage::NeedsOnboarding
    );
    assert_eq!(
        ProfilesService::compute_stage(&profile(assessed(), Some("Backend Developer"), true)),
        ProfileStage::Ready
    );
}

#[test]
fn assessment_replaces_tags_and_keeps_plain_skills() {
    let existing = vec![
        "HTML".to_string(),
        "General_Q1: old answer".to_string(),
        "Recommended: Backend Development".to_string(),
    ];
    let answers = vec![
        "I'm completely new to coding".to_string(),
        "Career change".to_string(),
        "Building interfaces".to_string(),
        "Weekends".to_string(),
    ];

    let merged = ProfilesService::apply_assessment(&existing, &answers);

    assert!(merged.contains(&"HTML".to_string()));
    assert!(merged.contains(&"General_Q1: I'm completely new to coding".to_string()));
    assert!(merged.contains(&"General_Q4: Weekends".to_string()));
    assert!(merged.contains(&"Recommended: Frontend Development".to_string()));
    assert!(!merged.contains(&"General_Q1: old answer".to_string()));
    assert!(!merged.contains(&"Recommended: Backend Development".to_string()));
    assert_eq!(
        merged.iter().filter(|s| s.starts_with("Recommended:")).count(),
        1
    );
}

#[test]
fn recommended_track_follows_the_familiarity_answer() {
    assert_eq!(
        ProfilesService::recommended_track("I'm completely new to this"),
        "Frontend Development"
    );
    assert_eq!(
        ProfilesService::recommended_track("I've tried a few tutorials"),
        "Full-Stack Development"
    );
    assert_eq!(
        ProfilesService::recommended_track("I build things regularly"),
        "Backend Development"
    );
}

#[test]
fn onboarding_merge_keeps_tags_and_replaces_plain_skills() {
    let existing = vec![
        "General_Q1: a".to_string(),
        "Recommended: Backend Development".to_string(),
        "Flash".to_string(),
    ];
    let selected = vec![
        "Python".to_string(),
        " Python ".to_string(),
        "SQL".to_string(),
        "  ".to_string(),
    ];

    let merged = ProfilesService::merge_onboarding_skills(&existing, &selected);

    assert!(merged.contains(&"General_Q1: a".to_string()));
    assert!(merged.contains(&"Recommended: Backend Development".to_string()));
    assert!(!merged.contains(&"Flash".to_string()));
    assert_eq!(merged.iter().filter(|s| *s == "Python").count(), 1);
    assert!(merged.contains(&"SQL".to_string()));
    assert_eq!(merged.len(), 4);
}

#[test]
fn plain_skills_filters_the_metadata_tags() {
    let skills: Vec<String> = assessed().into_iter().map(String::from).collect();
    assert!(ProfilesService::plain_skills(&skills).is_empty());

    let mut with_plain = skills.clone();
    with_plain.push("HTML".to_string());
    assert_eq!(ProfilesService::plain_skills(&with_plain), vec!["HTML"]);
}

#[test]
fn assessment_answers_are_validated() {
    let four: Vec<String> = (1..=4).map(|i| format!("answer {}", i)).collect();
    assert!(validate_assessment_answers(&four).is_ok());

    assert!(validate_assessment_answers(&four[..3]).is_err());

    let with_blank = vec![
        "a".to_string(),
        "   ".to_string(),
        "c".to_string(),
        "d".to_string(),
    ];
    assert!(validate_assessment_answers(&with_blank).is_err());

    let with_long = vec![
        "a".repeat(501),
        "b".to_string(),
        "c".to_string(),
        "d".to_string(),
    ];
    assert!(validate_assessment_answers(&with_long).is_err());
}
