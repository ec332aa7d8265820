#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {message}")]
    Invalid { message: String },

    #[error("unknown room category: {key}")]
    UnknownCategory { key: String },
}

impl CatalogError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
