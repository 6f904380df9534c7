use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("duplicate term id: {0}")]
    DuplicateId(String),

    #[error("term `{id}`: required field `{field}` is empty")]
    EmptyField { id: String, field: &'static str },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
