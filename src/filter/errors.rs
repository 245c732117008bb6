use thiserror::Error;

/// Invalid filter configuration, reported before any traversal starts.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown node kind '{name}'")]
    UnknownKind { name: String },

    #[error("receiver type must not be empty")]
    EmptyReceiver,
}
