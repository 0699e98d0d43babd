use roadmap_backend::db::enums::RoadmapSchemaVersion;
use roadmap_backend::db::models::roadmap::{RoadmapData, Skill};

const V2_DOC: &str = r#"{
    "phases": [
        {
            "name": "Foundations",
            "duration_days": 14,
            "skills": [
                {
                    "name": "HTML",
                    "description": "Structure of the web",
                    "days": "3 days",
                    "resources": ["https://developer.mozilla.org/en-US/docs/Web/HTML"],
                    "quiz": [
                        {
                            "question": "Which tag makes a link?",
                            "options": ["<div>", "<span>", "<a>", "<p>"],
                            "correctAnswer": 2
                        }
                    ]
                },
                { "name": "CSS", "estimatedTime": "1 week" }
            ]
        },
        {
            "name": "Scripting",
            "skills": [{ "name": "JavaScript", "days": "2 weeks" }]
        }
    ]
}"#;

#[test]
fn document_parses_with_camel_case_leaf_fields() {
    let data: RoadmapData = serde_json::from_str(V2_DOC).unwrap();
    assert_eq!(data.phases.len(), 2);
    assert_eq!(data.skill_count(), 3);

    let html = data.find_skill("Foundations", "HTML").unwrap();
    assert_eq!(html.quiz.len(), 1);
    assert_eq!(html.quiz[0].correct_answer, 2);
    assert_eq!(html.resources.len(), 1);

    let css = data.find_skill("Foundations", "CSS").unwrap();
    assert_eq!(css.estimated_time.as_deref(), Some("1 week"));
    assert!(css.days.is_none());

    assert!(data.find_skill("Foundations", "JavaScript").is_none());
    assert!(data.find_skill("Scripting", "JavaScript").is_some());
}

#[test]
fn skill_keys_flatten_in_document_order() {
    let data: RoadmapData = serde_json::from_str(V2_DOC).unwrap();
    let keys = data.skill_keys();
    assert_eq!(
        keys,
        vec![
            ("Foundations".to_string(), "HTML".to_string()),
            ("Foundations".to_string(), "CSS".to_string()),
            ("Scripting".to_string(), "JavaScript".to_string()),
        ]
    );
}

#[test]
fn missing_leaf_fields_default_instead_of_failing() {
    let data: RoadmapData = serde_json::from_str(r#"{"phases":[{"skills":[{}]}]}"#).unwrap();
    let skill = &data.phases[0].skills[0];
    assert_eq!(skill.name, "");
    assert!(skill.days.is_none());
    assert!(skill.resources.is_empty());
    assert!(skill.quiz.is_empty());

    let empty: RoadmapData = serde_json::from_str("{}").unwrap();
    assert!(empty.phases.is_empty());
}

#[test]
fn normalize_prefers_the_version_field() {
    let both = || Skill {
        name: "HTML".to_string(),
        days: Some("3 days".to_string()),
        estimated_time: Some("1 week".to_string()),
        ..Default::default()
    };

    let mut data: RoadmapData = serde_json::from_str(V2_DOC).unwrap();
    data.phases[0].skills[0] = both();
    data.normalize(RoadmapSchemaVersion::V2);
    assert_eq!(data.phases[0].skills[0].days.as_deref(), Some("3 days"));
    // the legacy field fills in when the canonical one is absent
    assert_eq!(data.phases[0].skills[1].days.as_deref(), Some("1 week"));

    let mut data: RoadmapData = serde_json::from_str(V2_DOC).unwrap();
    data.phases[0].skills[0] = both();
    data.normalize(RoadmapSchemaVersion::V1);
    assert_eq!(data.phases[0].skills[0].days.as_deref(), Some("1 week"));
    assert_eq!(data.phases[1].skills[0].days.as_deref(), Some("2 weeks"));
}

#[test]
fn normalize_clears_the_legacy_field_from_output() {
    let mut data: RoadmapData = serde_json::from_str(V2_DOC).unwrap();
    data.normalize(RoadmapSchemaVersion::V2);

    for phase in &data.phases {
        for skill in &phase.skills {
            assert!(skill.estimated_time.is_none());
        }
    }

    let rendered = serde_json::to_value(&data).unwrap();
    let css = &rendered["phases"][0]["skills"][1];
    assert_eq!(css["days"], "1 week");
    assert!(css.get("estimatedTime").is_none());
}
