use roadmap_backend::db::models::roadmap::GenerationContext;
use roadmap_backend::generation::{build_roadmap_prompt, parse_roadmap_document};
use roadmap_backend::utils::ResourceLink;

/// Demo showing what gets sent to the generation service and how its
/// output is validated, without calling anything.
fn main() {
    println!("🚀 Roadmap Generation Demo");
    println!("==========================\n");

    let existing_skills = vec!["HTML".to_string(), "CSS".to_string()];
    let context = GenerationContext {
        goal: Some("Land a junior frontend role".to_string()),
        daily_time: Some("2 hours on weekdays".to_string()),
        ..Default::default()
    };

    let prompt = build_roadmap_prompt(
        "Frontend Developer",
        "Bachelor's degree",
        &existing_skills,
        10,
        Some(&context),
    );

    println!("=== User prompt ===");
    println!("{}\n", prompt.user);

    println!("=== Document gate ===");
    let candidates = [
        r#"{"phases": [{"name": "Foundations", "skills": []}]}"#,
        r#"{"phases": "oops"}"#,
        "plain text, not a document",
    ];
    for candidate in candidates {
        match parse_roadmap_document(candidate) {
            Ok(_) => println!("accepted: {}", candidate),
            Err(err) => println!("rejected: {} ({})", candidate, err),
        }
    }
    println!();

    println!("=== Resource resolution ===");
    let resources = [
        "https://developer.mozilla.org/en-US/docs/Web/HTML",
        "YouTube: Flexbox crash course",
        "Official documentation",
    ];
    for raw in resources {
        let link = ResourceLink::parse(raw, "CSS");
        println!("{:?} -> [{}] {}", link.kind, link.label, link.url);
    }
}
