use thiserror::Error;

/// Main error type for the podium engine
#[derive(Error, Debug)]
pub enum PodiumError {
    /// Filesystem errors while loading snapshots
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rank outside 1..=3
    #[error("Invalid rank: {0} (expected 1, 2 or 3)")]
    InvalidRank(u8),

    /// Game id not present in the leaderboard snapshot
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Malformed caller input (dates, ids, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for PodiumError {
    fn from(s: String) -> Self {
        PodiumError::Other(s)
    }
}

impl From<&str> for PodiumError {
    fn from(s: &str) -> Self {
        PodiumError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PodiumError>;
