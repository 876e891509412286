use crate::questionnaire::error::LoadError;
use crate::questionnaire::question::{Choice, Question};
use faro_utils::loader::{Filter, Loader, LoaderTrait};
use futures::StreamExt;
use indexmap::IndexMap;
use serde::Deserialize;

pub mod error;
pub mod question;

/// The immutable question bank, in source order. Loaded once at startup and
/// shared by reference afterwards.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    pub questions: IndexMap<String, Question>,
}

impl Questionnaire {
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.get(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One spreadsheet row: a single (question, option) pair.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Row {
    question_id: String,
    section: String,
    question: String,
    option: String,
    weight: u8,
}

/// Loads the first csv file found under the loader root.
pub async fn load(loader: &Loader) -> Result<Questionnaire, LoadError> {
    tracing::debug!("Loading questionnaire");
    let mut stream = loader.load_dir("", Filter::Csv);
    let Some(file) = stream.next().await else {
        return Err(LoadError::SourceNotFound);
    };
    let file = file?;
    let questionnaire = parse(&file.content)?;
    tracing::debug!(
        questions = questionnaire.len(),
        key = file.key,
        "loaded questionnaire"
    );
    Ok(questionnaire)
}

fn parse(content: &[u8]) -> Result<Questionnaire, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(content);
    let mut questions: IndexMap<String, Question> = IndexMap::new();
    for row in reader.deserialize() {
        let row: Row = row?;
        if row.option.is_empty() {
            return Err(LoadError::EmptyOption { question: row.question_id });
        }
        if row.weight == 0 {
            return Err(LoadError::InvalidWeight { question: row.question_id });
        }
        let question = questions.entry(row.question_id.clone()).or_insert_with(|| Question {
            id: row.question_id,
            section: row.section,
            prompt: row.question,
            options: Vec::new(),
        });
        question.options.push(Choice {
            label: row.option,
            weight: row.weight,
        });
    }
    if questions.is_empty() {
        return Err(LoadError::NoQuestions);
    }
    for question in questions.values_mut() {
        question.options.sort_by(|a, b| b.weight.cmp(&a.weight));
    }
    Ok(Questionnaire { questions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use faro_utils::loader::file_system::FileSystemLoader;
    use std::path::PathBuf;
    use test_log::test;

    fn test_loader() -> Loader {
        Loader::FileSystem(FileSystemLoader::new(PathBuf::from("test_configs")))
    }

    #[test(tokio::test)]
    async fn test_questionnaire_loading() {
        let questionnaire = load(&test_loader()).await.unwrap();
        assert_eq!(questionnaire.len(), 2);
        let question = questionnaire.get("a").unwrap();
        assert_eq!(question.section, "Policy");
        assert_eq!(question.options.len(), 3);
        // choices are ordered by descending weight regardless of row order
        assert_eq!(question.options[0].weight, 3);
        assert_eq!(question.options[2].weight, 1);
    }

    #[test]
    fn test_parse_rejects_zero_weight() {
        let content = b"question_id,section,question,option,weight\na,Policy,Is there a policy?,Yes,0\n";
        let result = parse(content);
        assert!(matches!(result, Err(LoadError::InvalidWeight { question }) if question == "a"));
    }

    #[test]
    fn test_parse_rejects_empty_option() {
        let content = b"question_id,section,question,option,weight\na,Policy,Is there a policy?,,3\n";
        let result = parse(content);
        assert!(matches!(result, Err(LoadError::EmptyOption { question }) if question == "a"));
    }

    #[test]
    fn test_parse_rejects_empty_bank() {
        let content = b"question_id,section,question,option,weight\n";
        assert!(matches!(parse(content), Err(LoadError::NoQuestions)));
    }

    #[test]
    fn test_parse_rejects_malformed_rows() {
        let content = b"question_id,section,question,option,weight\na,Policy,Is there a policy?,Yes,not-a-number\n";
        assert!(matches!(parse(content), Err(LoadError::Csv(_))));
    }
}
