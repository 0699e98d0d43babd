use crate::db::models::roadmap::GenerationContext;

/// System/user message pair sent to the generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPrompt {
    pub system: String,
    pub user: String,
}

const SYSTEM_PROMPT: &str = r#"You are an expert career and learning advisor. Generate a structured skill learning roadmap based on the user's profile.

The roadmap MUST be returned as a JSON object with the following structure:
{
  "phases": [
    {
      "name": "Beginner / Foundation",
      "duration_days": 30,
      "description": "What this phase covers and why it comes first",
      "skills": [
        {
          "name": "Skill Name",
          "days": "5 days",
          "description": "Brief explanation of why this skill matters and how it connects to the goal",
          "resources": ["https://example.com/official-guide", "YouTube: Skill Name crash course"],
          "quiz": [
            { "question": "A concrete question about the skill", "options": ["A", "B", "C", "D"], "correctAnswer": 0 }
          ]
        }
      ]
    }
  ]
}

Guidelines:
- Each phase should have 3-5 skills
- Skills should be in logical learning order
- Estimated time should be realistic based on weekly hours available
- Descriptions should be 1-2 sentences explaining relevance
- Consider existing skills to avoid redundancy
- Make the path practical and actionable
- Give each skill 2-4 resources, either full URLs or "YouTube: <video title>" labels
- Give each skill exactly 3 quiz questions, each with 4 options and the index of the correct option in "correctAnswer""#;

/// Assemble the prompt pair from the onboarding answers. Optional context
/// hints are appended as extra profile lines when present.
pub fn build_roadmap_prompt(
    target_skill: &str,
    education_level: &str,
    existing_skills: &[String],
    weekly_hours: i32,
    context: Option<&GenerationContext>,
) -> RoadmapPrompt {
    let skills_line = if existing_skills.is_empty() {
        "None specified".to_string()
    } else {
        existing_skills.join(", ")
    };

    let mut user = format!(
        "Create a personalized learning roadmap for:\n\n\
         Target Role/Skill: {}\n\
         Current Education: {}\n\
         Existing Skills: {}\n\
         Weekly Learning Time: {} hours\n",
        target_skill, education_level, skills_line, weekly_hours
    );

    if let Some(ctx) = context {
        if let Some(level) = ctx.level.as_deref() {
            user.push_str(&format!("Current Level: {}\n", level));
        }
        if let Some(background) = ctx.background.as_deref() {
            user.push_str(&format!("Background: {}\n", background));
        }
        if let Some(goal) = ctx.goal.as_deref() {
            user.push_str(&format!("Goal: {}\n", goal));
        }
        if let Some(daily_time) = ctx.daily_time.as_deref() {
            user.push_str(&format!("Daily Time Available: {}\n", daily_time));
        }
        if let Some(target_duration) = ctx.target_duration.as_deref() {
            user.push_str(&format!("Target Duration: {}\n", target_duration));
        }
    }

    user.push_str(&format!(
        "\nGenerate a comprehensive roadmap with skills ordered from foundational to advanced. \
         Ensure time estimates are realistic for {} hours per week of study.",
        weekly_hours
    ));

    RoadmapPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
