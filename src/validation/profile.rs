use crate::error::AppError;

/// The assessment has a fixed set of four questions; anything else is a
/// stale or tampered client.
pub const ASSESSMENT_ANSWER_COUNT: usize = 4;

pub fn validate_assessment_answers(answers: &[String]) -> Result<(), AppError> {
    if answers.len() != ASSESSMENT_ANSWER_COUNT {
        return Err(AppError::validation(format!(
            "Assessment requires exactly {} answers",
            ASSESSMENT_ANSWER_COUNT
        )));
    }
    for answer in answers {
        if answer.trim().is_empty() {
            return Err(AppError::validation("Assessment answers cannot be empty"));
        }
        if answer.len() > 500 {
            return Err(AppError::validation(
                "Assessment answers must be 500 characters or less",
            ));
        }
    }
    Ok(())
}
