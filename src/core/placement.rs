use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::core::{PlayerId, RankingResult};
use crate::error::{PodiumError, Result};

/// Podium position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::First, Rank::Second, Rank::Third];

    /// 1-based rank number
    pub fn number(self) -> u8 {
        match self {
            Rank::First => 1,
            Rank::Second => 2,
            Rank::Third => 3,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<u8> for Rank {
    type Error = PodiumError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Rank::First),
            2 => Ok(Rank::Second),
            3 => Ok(Rank::Third),
            other => Err(PodiumError::InvalidRank(other)),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.number()
    }
}

/// Points awarded to a player for one result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Placement {
    /// Finished on the podium (points may include a flawless bonus)
    Ranked { rank: Rank, points: u32 },
    /// Off the podium, bonus points only
    Bonus { points: u32 },
}

impl Placement {
    pub fn points(&self) -> u32 {
        match self {
            Placement::Ranked { points, .. } | Placement::Bonus { points } => *points,
        }
    }

    pub fn rank_number(&self) -> Option<u8> {
        match self {
            Placement::Ranked { rank, .. } => Some(rank.number()),
            Placement::Bonus { .. } => None,
        }
    }

    fn add_points(&mut self, extra: u32) {
        match self {
            Placement::Ranked { points, .. } | Placement::Bonus { points } => *points += extra,
        }
    }
}

/// One row ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPlacement {
    pub player_id: PlayerId,
    pub placement: Placement,
}

/// Point values per rank plus the flawless bonus.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use podium_engine::ScoringConfig;
///
/// let mut config = HashMap::new();
/// config.insert("rank1_points".to_string(), 5);
///
/// let scoring = ScoringConfig::from_config(&config);
/// assert_eq!(scoring.rank_points, [5, 2, 1]);
/// assert_eq!(scoring.flawless_bonus, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for rank 1, 2, 3
    pub rank_points: [u32; 3],

    /// Added for a flawless run
    pub flawless_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rank_points: [3, 2, 1],
            flawless_bonus: 1,
        }
    }
}

impl ScoringConfig {
    /// Build from flat config keys, falling back to defaults for missing ones
    pub fn from_config(config: &HashMap<String, u32>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, fallback: u32| config.get(key).copied().unwrap_or(fallback);

        Self {
            rank_points: [
                get("rank1_points", defaults.rank_points[0]),
                get("rank2_points", defaults.rank_points[1]),
                get("rank3_points", defaults.rank_points[2]),
            ],
            flawless_bonus: get("flawless_bonus", defaults.flawless_bonus),
        }
    }

    pub fn points_for(&self, rank: Rank) -> u32 {
        self.rank_points[rank.index()]
    }
}

/// Results for one game on one day, as selected by the submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub game_id: String,

    pub date: NaiveDate,

    /// Selected players per rank; several players may share a rank
    #[serde(default)]
    pub ranks: [Vec<PlayerId>; 3],

    /// Players who earned the flawless bonus
    #[serde(default)]
    pub flawless: Vec<PlayerId>,
}

impl Submission {
    pub fn new(game_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            game_id: game_id.into(),
            date,
            ranks: Default::default(),
            flawless: Vec::new(),
        }
    }

    /// Start from empty selections and fill rank i+1 with inferred player i
    pub fn from_ranking(
        game_id: impl Into<String>,
        date: NaiveDate,
        ranking: &RankingResult,
    ) -> Self {
        let mut submission = Self::new(game_id, date);
        for (rank, player) in Rank::ALL.iter().zip(&ranking.players) {
            submission.select(*rank, player.id.clone());
        }
        submission
    }

    /// Add a player to a rank; selecting the same player twice is a no-op
    pub fn select(&mut self, rank: Rank, player_id: PlayerId) {
        let selected = &mut self.ranks[rank.index()];
        if !selected.contains(&player_id) {
            selected.push(player_id);
        }
    }

    pub fn mark_flawless(&mut self, player_id: PlayerId) {
        if !self.flawless.contains(&player_id) {
            self.flawless.push(player_id);
        }
    }

    pub fn selected(&self, rank: Rank) -> &[PlayerId] {
        &self.ranks[rank.index()]
    }

    /// Build scored rows: ranked rows first (rank 1..3), then the flawless
    /// bonus folded into the player's first row or added as a bonus row.
    /// Repeated ids within one rank or the flawless list count once.
    pub fn placements(&self, scoring: &ScoringConfig) -> Vec<PlayerPlacement> {
        let mut rows: Vec<PlayerPlacement> = Vec::new();

        for rank in Rank::ALL {
            let mut seen: HashSet<&PlayerId> = HashSet::new();
            for player_id in self.selected(rank) {
                if !seen.insert(player_id) {
                    continue;
                }
                rows.push(PlayerPlacement {
                    player_id: player_id.clone(),
                    placement: Placement::Ranked {
                        rank,
                        points: scoring.points_for(rank),
                    },
                });
            }
        }

        let mut seen: HashSet<&PlayerId> = HashSet::new();
        for player_id in &self.flawless {
            if !seen.insert(player_id) {
                continue;
            }
            match rows.iter_mut().find(|row| &row.player_id == player_id) {
                Some(row) => row.placement.add_points(scoring.flawless_bonus),
                None => rows.push(PlayerPlacement {
                    player_id: player_id.clone(),
                    placement: Placement::Bonus {
                        points: scoring.flawless_bonus,
                    },
                }),
            }
        }

        rows
    }
}
