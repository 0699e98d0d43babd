use std::collections::BTreeMap;

use roadmap_backend::db::models::roadmap::QuizQuestion;
use roadmap_backend::error::AppError;
use roadmap_backend::services::QuizService;

fn quiz(correct: &[usize]) -> Vec<QuizQuestion> {
    correct
        .iter()
        .map(|&answer| QuizQuestion {
            question: "What does this do?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_answer: answer,
        })
        .collect()
}

fn answers(picks: &[usize]) -> BTreeMap<usize, usize> {
    picks.iter().copied().enumerate().collect()
}

#[test]
fn pass_threshold_is_two_thirds_rounded_up() {
    assert_eq!(QuizService::pass_threshold(1), 1);
    assert_eq!(QuizService::pass_threshold(2), 2);
    assert_eq!(QuizService::pass_threshold(3), 2);
    assert_eq!(QuizService::pass_threshold(4), 3);
    assert_eq!(QuizService::pass_threshold(5), 4);
    assert_eq!(QuizService::pass_threshold(6), 4);
}

#[test]
fn two_of_three_passes() {
    let quiz = quiz(&[0, 1, 2]);
    let result = QuizService::evaluate(&quiz, &answers(&[0, 1, 3])).unwrap();
    assert!(result.passed);
    assert_eq!(result.score, 2);
    assert_eq!(result.total, 3);
    assert_eq!(result.threshold, 2);
}

#[test]
fn one_of_three_fails() {
    let quiz = quiz(&[0, 1, 2]);
    let result = QuizService::evaluate(&quiz, &answers(&[0, 3, 3])).unwrap();
    assert!(!result.passed);
    assert_eq!(result.score, 1);
}

#[test]
fn all_wrong_scores_zero() {
    let quiz = quiz(&[0, 1, 2]);
    let result = QuizService::evaluate(&quiz, &answers(&[3, 3, 3])).unwrap();
    assert!(!result.passed);
    assert_eq!(result.score, 0);
}

#[test]
fn partial_submission_is_rejected_not_graded() {
    let quiz = quiz(&[0, 1, 2]);
    let mut partial = BTreeMap::new();
    partial.insert(0usize, 0usize);
    partial.insert(2usize, 2usize);
    let err = QuizService::evaluate(&quiz, &partial).unwrap_err();
    assert!(matches!(err, AppError::IncompleteSubmission));
}

#[test]
fn extra_answer_keys_are_ignored() {
    let quiz = quiz(&[0, 1, 2]);
    let mut submitted = answers(&[0, 1, 2]);
    submitted.insert(9, 0);
    let result = QuizService::evaluate(&quiz, &submitted).unwrap();
    assert!(result.passed);
    assert_eq!(result.score, 3);
    assert_eq!(result.total, 3);
}
