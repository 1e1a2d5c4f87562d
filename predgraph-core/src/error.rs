use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    // IO
    #[error("failed to read event log {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read event stream")]
    ReadStream(#[source] std::io::Error),

    // Decoding
    #[error("failed to decode {schema} record on line {line}")]
    Decode {
        schema: &'static str,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    // Output
    #[error("failed to create chart file {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart '{title}': {reason}")]
    Render { title: String, reason: String },
}

impl PredictionError {
    pub fn read_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadSource {
            path: path.into(),
            source,
        }
    }

    pub fn create_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.into(),
            source,
        }
    }

    pub fn render(title: impl Into<String>, reason: impl ToString) -> Self {
        Self::Render {
            title: title.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = PredictionError> = std::result::Result<T, E>;
