use faro_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Loading(#[from] LoadingError),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("no question source found")]
    SourceNotFound,
    #[error("question bank contains no questions")]
    NoQuestions,
    #[error("question \"{question}\" has a row with an empty option label")]
    EmptyOption { question: String },
    #[error("question \"{question}\" has a row with no valid score weight")]
    InvalidWeight { question: String },
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid choice: index {choice} out of {available} options")]
    ChoiceOutOfRange { choice: usize, available: usize },
}
