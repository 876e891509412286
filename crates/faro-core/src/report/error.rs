use faro_config::assessment::level::Level;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("no narrative configured for level {0}")]
    MissingNarrative(Level),
    #[error(transparent)]
    Pdf(#[from] printpdf::Error),
}
