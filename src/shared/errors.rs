use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolbarError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Workspace pages are not loaded yet")]
    PagesNotLoaded,

    #[error("Action throttled: {0}")]
    Throttled(&'static str),

    #[error("About dialog unavailable: {0}")]
    About(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ToolbarError>;
