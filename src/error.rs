use thiserror::Error;

/// Problems with a game configuration. Raised when a config is built or
/// handed to an engine, never in the middle of a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no word in the list has a length between {min} and {max}")]
    NoQualifyingWord { min: usize, max: usize },
    #[error("minimum word length {min} is greater than maximum {max}")]
    InvertedBounds { min: usize, max: usize },
    #[error("at least one wrong guess must be allowed")]
    NoGuessesAllowed,
    #[error("unknown word list '{0}'")]
    UnknownWordList(String),
    #[error("configuration can only change before the first round")]
    AlreadyStarted,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
