use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocflowError {
    #[error("stage not found: {0}")]
    StageNotFound(String),

    #[error("invalid view '{0}': expected workflow, usecases, structure, or dependencies")]
    InvalidView(String),

    #[error("invalid doc filter '{0}': expected all, internal, or external")]
    InvalidDocFilter(String),

    #[error("invalid doc type '{0}': expected internal, external, or neither")]
    InvalidDocType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocflowError>;
