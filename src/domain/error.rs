//! Domain error types.

/// Top-level error type for finboard.
#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("record source error: {reason}")]
    DataSource { reason: String },

    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FinanceError> for std::process::ExitCode {
    fn from(err: &FinanceError) -> Self {
        let code: u8 = match err {
            FinanceError::Io(_) => 1,
            FinanceError::ConfigParse { .. } | FinanceError::ConfigInvalid { .. } => 2,
            FinanceError::DataSource { .. } => 3,
            FinanceError::Serialize(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}
