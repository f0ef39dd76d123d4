//! # Podium Engine
//!
//! Daily-games leaderboard engine with:
//! - OCR-assisted top-three inference (fuzzy first-name matching)
//! - "You" → uploader substitution
//! - Placement scoring (3/2/1 + flawless bonus)
//! - Overall / category / daily standings and highlight cards
//! - Multiple interfaces: Rust library, Python bindings, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use podium_engine::{InferenceRequest, Player, RankEngine};
//!
//! let engine = RankEngine::default();
//!
//! let result = engine.infer(&InferenceRequest {
//!     roster: vec![Player::new("1", "Sam Lee"), Player::new("2", "Max Ray")],
//!     text: Some("1. Maxx 0:41\n2. You 0:58".to_string()),
//!     uploader_id: Some("1".into()),
//! });
//!
//! assert_eq!(result.at_rank(1).unwrap().name, "Max Ray");
//! assert_eq!(result.at_rank(2).unwrap().name, "Sam Lee");
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod ranking;

// Re-export primary types
pub use crate::core::{
    Match, Placement, Player, PlayerId, PlayerPlacement, Rank, RankingResult, ScoringConfig,
    Submission,
};
pub use engine::{infer_top_three, InferenceOptions, InferenceRequest, RankEngine};
pub use error::{PodiumError, Result};
pub use leaderboard::{Highlight, Leaderboard, LeaderboardData, LeaderboardMode, Standing};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
