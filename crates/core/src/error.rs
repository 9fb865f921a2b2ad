use thiserror::Error;

/// Knowledge base loading errors
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge document: {0}")]
    Parse(#[from] serde_json::Error),
}
