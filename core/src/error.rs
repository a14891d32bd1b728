use thiserror::Error;

/// Feil ved hex → tekst-dekoding av en payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("odd number of hex digits in payload ({digits})")]
    OddLength { digits: usize },

    #[error("non-hex character {ch:?} at position {position}")]
    InvalidHexChar { ch: char, position: usize },

    #[error("decoded payload is not valid UTF-8")]
    InvalidUtf8,
}

/// Linja er en notifikasjon for riktig karakteristikk, men mangler `<hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("failed to find a payload match")]
    MissingPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollingError {
    #[error("powers ({powers}) and seconds ({seconds}) must have the same length")]
    LengthMismatch { powers: usize, seconds: usize },

    #[error("rolling window must be at least 1")]
    ZeroWindow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read/write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("could not read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("log is empty")]
    EmptyLog,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rolling(#[from] RollingError),

    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
}
