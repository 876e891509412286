use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidAnswerError {
    #[error("unknown question \"{question}\"")]
    UnknownQuestion { question: String },
    #[error("question \"{question}\" has no choice {choice}")]
    UnknownChoice { question: String, choice: usize },
    #[error("question \"{question}\" was answered more than once")]
    DuplicateAnswer { question: String },
    #[error("question \"{question}\" has not been answered")]
    MissingAnswer { question: String },
}
