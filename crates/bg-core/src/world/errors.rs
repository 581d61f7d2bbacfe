//! Error types for loading game configuration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("could not read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid option '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
