use crate::questionnaire::error::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Question {
    /// # Unique identifier for the question
    /// This ID is used to reference the question within the questionnaire.
    pub id: String,
    /// # Section the question belongs to
    /// Sections group related questions and drive the areas-to-strengthen summary.
    pub section: String,
    /// # Prompt shown to the user
    pub prompt: String,
    /// # Selectable choices, ordered by descending weight
    pub options: Vec<Choice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Choice {
    pub label: String,
    pub weight: u8,
}

impl Question {
    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.options.get(index)
    }

    #[must_use]
    pub fn max_weight(&self) -> u8 {
        self.options.iter().map(|choice| choice.weight).max().unwrap_or(0)
    }

    pub fn validate(&self, choice: usize) -> Result<(), ValidationError> {
        if choice >= self.options.len() {
            return Err(ValidationError::ChoiceOutOfRange {
                choice,
                available: self.options.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: "a".to_owned(),
            section: "Policy".to_owned(),
            prompt: "Is there a written inclusion policy?".to_owned(),
            options: vec![
                Choice {
                    label: "Yes, reviewed yearly".to_owned(),
                    weight: 3,
                },
                Choice {
                    label: "Drafted but not adopted".to_owned(),
                    weight: 2,
                },
                Choice {
                    label: "No".to_owned(),
                    weight: 1,
                },
            ],
        }
    }

    #[test]
    fn test_validate_choice_range() {
        let q = question();
        assert!(q.validate(0).is_ok());
        assert!(q.validate(2).is_ok());
        let Err(ValidationError::ChoiceOutOfRange { choice, available }) = q.validate(3) else {
            panic!("expected ChoiceOutOfRange error");
        };
        assert_eq!(choice, 3);
        assert_eq!(available, 3);
    }

    #[test]
    fn test_max_weight() {
        assert_eq!(question().max_weight(), 3);
    }
}
