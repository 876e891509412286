use crate::scoring::error::InvalidAnswerError;
use faro_config::assessment::Thresholds;
use faro_model::answer::Answer;
use faro_model::result::{AssessmentResult, SectionScore, SelectedAnswer};
use indexmap::IndexMap;
use std::collections::HashMap;

pub mod error;

use faro_config::questionnaire::Questionnaire;

/// Matches the submitted answers against the questionnaire, producing one
/// resolved answer per question in questionnaire order.
///
/// Every question must be answered exactly once and every choice must exist.
fn resolve(questionnaire: &Questionnaire, answers: &[Answer]) -> Result<Vec<SelectedAnswer>, InvalidAnswerError> {
    let mut by_question: HashMap<&str, usize> = HashMap::with_capacity(answers.len());
    for answer in answers {
        if questionnaire.get(&answer.question_id).is_none() {
            return Err(InvalidAnswerError::UnknownQuestion {
                question: answer.question_id.clone(),
            });
        }
        if by_question.insert(&answer.question_id, answer.choice).is_some() {
            return Err(InvalidAnswerError::DuplicateAnswer {
                question: answer.question_id.clone(),
            });
        }
    }
    let mut resolved = Vec::with_capacity(questionnaire.len());
    for question in questionnaire.questions.values() {
        let Some(&choice) = by_question.get(question.id.as_str()) else {
            return Err(InvalidAnswerError::MissingAnswer {
                question: question.id.clone(),
            });
        };
        let Some(selected) = question.choice(choice) else {
            return Err(InvalidAnswerError::UnknownChoice {
                question: question.id.clone(),
                choice,
            });
        };
        resolved.push(SelectedAnswer {
            question_id: question.id.clone(),
            section: question.section.clone(),
            prompt: question.prompt.clone(),
            label: selected.label.clone(),
            weight: selected.weight,
        });
    }
    Ok(resolved)
}

/// Sections where at least one answer scored below the question's maximum,
/// keeping the lowest weight selected there. First-seen section order.
fn sections_to_improve(questionnaire: &Questionnaire, resolved: &[SelectedAnswer]) -> Vec<SectionScore> {
    let mut areas: IndexMap<&str, u8> = IndexMap::new();
    for answer in resolved {
        // resolve() guarantees the question exists
        let Some(question) = questionnaire.get(&answer.question_id) else {
            continue;
        };
        if answer.weight < question.max_weight() {
            areas
                .entry(answer.section.as_str())
                .and_modify(|score| *score = (*score).min(answer.weight))
                .or_insert(answer.weight);
        }
    }
    areas
        .into_iter()
        .map(|(section, score)| SectionScore {
            section: section.to_owned(),
            score,
        })
        .collect()
}

/// Total score of a complete answer set: the sum of the selected weights.
pub fn score(questionnaire: &Questionnaire, answers: &[Answer]) -> Result<u32, InvalidAnswerError> {
    let resolved = resolve(questionnaire, answers)?;
    Ok(total_of(&resolved))
}

fn total_of(resolved: &[SelectedAnswer]) -> u32 {
    resolved.iter().map(|answer| u32::from(answer.weight)).sum()
}

/// Scores a complete set of answers against the questionnaire.
///
/// Deterministic: the same questionnaire, thresholds, and answers always yield
/// the same result regardless of answer order in the input.
pub fn evaluate(
    questionnaire: &Questionnaire,
    thresholds: &Thresholds,
    answers: &[Answer],
) -> Result<AssessmentResult, InvalidAnswerError> {
    let resolved = resolve(questionnaire, answers)?;
    let total = total_of(&resolved);
    let level = thresholds.classify(total);
    let areas = sections_to_improve(questionnaire, &resolved);
    Ok(AssessmentResult {
        total,
        level,
        level_label: level.to_string(),
        answers: resolved,
        areas,
    })
}
