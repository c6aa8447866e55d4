#[derive(Debug, thiserror::Error)]
pub enum PcError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("bad site config: {0}")]
    Config(String),

    #[error("unknown theme: {0} (expected light, dark or system)")]
    UnknownTheme(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PcError>;
