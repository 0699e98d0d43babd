use chrono::Utc;
use roadmap_backend::db::models::progress::SkillProgress;
use roadmap_backend::db::models::roadmap::{Phase, QuizQuestion, RoadmapData, Skill};
use roadmap_backend::services::ProgressService;
use uuid::Uuid;

fn doc(phases: Vec<(&str, Vec<&str>)>) -> RoadmapData {
    RoadmapData {
        phases: phases
            .into_iter()
            .map(|(name, skills)| Phase {
                name: name.to_string(),
                skills: skills
                    .into_iter()
                    .map(|skill| Skill {
                        name: skill.to_string(),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
            .collect(),
    }
}

fn row(phase: &str, skill: &str, completed: bool) -> SkillProgress {
    let now = Utc::now();
    SkillProgress {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        roadmap_id: Uuid::new_v4(),
        phase: phase.to_string(),
        skill_name: skill.to_string(),
        completed,
        completed_at: completed.then_some(now),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn first_skill_is_never_locked() {
    let data = doc(vec![("Phase 1", vec!["HTML", "CSS"])]);
    assert!(!ProgressService::is_locked(&data, &[], "Phase 1", "HTML"));
}

#[test]
fn unlock_chain_crosses_phase_boundaries() {
    let data = doc(vec![
        ("Phase 1", vec!["HTML", "CSS"]),
        ("Phase 2", vec!["JavaScript"]),
    ]);

    assert!(ProgressService::is_locked(&data, &[], "Phase 1", "CSS"));
    assert!(ProgressService::is_locked(&data, &[], "Phase 2", "JavaScript"));

    let after_first = vec![row("Phase 1", "HTML", true)];
    assert!(!ProgressService::is_locked(&data, &after_first, "Phase 1", "CSS"));
    assert!(ProgressService::is_locked(&data, &after_first, "Phase 2", "JavaScript"));

    let after_second = vec![row("Phase 1", "HTML", true), row("Phase 1", "CSS", true)];
    assert!(!ProgressService::is_locked(&data, &after_second, "Phase 2", "JavaScript"));
}

#[test]
fn incomplete_predecessor_row_keeps_the_lock() {
    let data = doc(vec![("Phase 1", vec!["HTML", "CSS"])]);
    let rows = vec![row("Phase 1", "HTML", false)];
    assert!(ProgressService::is_locked(&data, &rows, "Phase 1", "CSS"));
}

#[test]
fn backfill_inserts_only_missing_pairs() {
    let data = doc(vec![
        ("Phase 1", vec!["HTML", "CSS"]),
        ("Phase 2", vec!["JavaScript"]),
    ]);
    let uid = Uuid::new_v4();
    let rid = Uuid::new_v4();

    let missing = ProgressService::missing_rows(uid, rid, &data, &[]);
    assert_eq!(missing.len(), 3);
    assert!(missing.iter().all(|r| !r.completed));
    assert!(missing.iter().all(|r| r.user_id == uid && r.roadmap_id == rid));

    let existing = vec![row("Phase 1", "HTML", true)];
    let missing = ProgressService::missing_rows(uid, rid, &data, &existing);
    assert_eq!(missing.len(), 2);
    assert!(
        missing
            .iter()
            .any(|r| r.phase == "Phase 1" && r.skill_name == "CSS")
    );
    assert!(
        missing
            .iter()
            .any(|r| r.phase == "Phase 2" && r.skill_name == "JavaScript")
    );
}

#[test]
fn backfill_is_idempotent_once_rows_exist() {
    let data = doc(vec![("Phase 1", vec!["HTML", "CSS"])]);
    let existing = vec![row("Phase 1", "HTML", true), row("Phase 1", "CSS", false)];
    let missing = ProgressService::missing_rows(Uuid::new_v4(), Uuid::new_v4(), &data, &existing);
    assert!(missing.is_empty());
}

#[test]
fn rows_for_removed_skills_are_left_alone() {
    // regenerating a roadmap can drop skills; their rows survive untouched
    let data = doc(vec![("Phase 1", vec!["HTML"])]);
    let existing = vec![row("Phase 1", "HTML", false), row("Phase 1", "Flash", true)];
    let missing = ProgressService::missing_rows(Uuid::new_v4(), Uuid::new_v4(), &data, &existing);
    assert!(missing.is_empty());
}

#[test]
fn view_reports_rounded_percentages_and_locks() {
    let data = doc(vec![
        ("Phase 1", vec!["HTML", "CSS"]),
        ("Phase 2", vec!["JavaScript"]),
    ]);
    let rid = Uuid::new_v4();
    let rows = vec![row("Phase 1", "HTML", true)];

    let view = ProgressService::build_view(rid, &data, &rows);
    assert_eq!(view.roadmap_id, rid);
    assert_eq!(view.total_skills, 3);
    assert_eq!(view.completed_skills, 1);
    assert_eq!(view.overall_percent, 33);
    assert_eq!(view.phases.len(), 2);
    assert_eq!(view.phases[0].completion_percent, 50);
    assert_eq!(view.phases[1].completion_percent, 0);

    let first = &view.phases[0].skills[0];
    assert!(first.completed && !first.locked);
    let second = &view.phases[0].skills[1];
    assert!(!second.completed && !second.locked);
    let third = &view.phases[1].skills[0];
    assert!(!third.completed && third.locked);
}

#[test]
fn view_flags_quiz_bearing_skills() {
    let mut data = doc(vec![("Phase 1", vec!["HTML", "CSS"])]);
    data.phases[0].skills[1].quiz = vec![QuizQuestion::default()];
    let view = ProgressService::build_view(Uuid::new_v4(), &data, &[]);
    assert!(!view.phases[0].skills[0].has_quiz);
    assert!(view.phases[0].skills[1].has_quiz);
}

#[test]
fn empty_document_reports_zero_percent() {
    let view = ProgressService::build_view(Uuid::new_v4(), &doc(vec![]), &[]);
    assert_eq!(view.total_skills, 0);
    assert_eq!(view.completed_skills, 0);
    assert_eq!(view.overall_percent, 0);
    assert!(view.phases.is_empty());
}

#[test]
fn percent_rounds_half_up() {
    assert_eq!(ProgressService::percent(1, 3), 33);
    assert_eq!(ProgressService::percent(2, 3), 67);
    assert_eq!(ProgressService::percent(1, 8), 13);
    assert_eq!(ProgressService::percent(3, 3), 100);
    assert_eq!(ProgressService::percent(0, 0), 0);
}
