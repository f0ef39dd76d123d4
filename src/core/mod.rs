pub mod placement;
pub mod player;
pub mod ranking_result;

pub use placement::{Placement, PlayerPlacement, Rank, ScoringConfig, Submission};
pub use player::{deserialize_id, find_player, Player, PlayerId};
pub use ranking_result::{Match, RankingResult};
