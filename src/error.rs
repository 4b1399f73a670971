use serde_json::error::Category;

/// Everything in jtail is fatal: the binary maps any of these to a
/// single stderr line and a non-zero exit. The library never prints.
#[derive(Debug, thiserror::Error)]
pub enum TailError {
    #[error("invalid filter: {0}")]
    FilterSyntax(String),

    #[error("cannot connect to the server {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error during JSON parsing: {0}")]
    StreamParse(serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot load config file '{path}': {message}")]
    Config { path: String, message: String },
}

impl From<serde_json::Error> for TailError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json folds transport failures into its own error type;
        // split them back out so the message names the real culprit.
        match err.classify() {
            Category::Io => TailError::Io(err.into()),
            _ => TailError::StreamParse(err),
        }
    }
}
