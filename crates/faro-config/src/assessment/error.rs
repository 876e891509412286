use crate::assessment::level::Level;
use faro_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Loading(#[from] LoadingError),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
    #[error("no assessment configuration found")]
    SourceNotFound,
    #[error("thresholds are not increasing: initial-max {initial_max} is not below intermediate-max {intermediate_max}")]
    ThresholdOrder { initial_max: u32, intermediate_max: u32 },
    #[error("missing narrative for level {0}")]
    MissingNarrative(Level),
}
