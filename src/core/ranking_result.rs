use serde::{Deserialize, Serialize};
use crate::core::{Player, PlayerId};

/// Earliest line at which a player's first-name token was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub player: Player,
    pub line_index: usize,
}

impl Match {
    pub fn new(player: Player, line_index: usize) -> Self {
        Self { player, line_index }
    }
}

/// Inferred podium, index 0 = rank 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingResult {
    pub players: Vec<Player>,
}

impl RankingResult {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player at a 1-based rank, if inferred
    pub fn at_rank(&self, rank: usize) -> Option<&Player> {
        rank.checked_sub(1).and_then(|i| self.players.get(i))
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        if self.players.is_empty() {
            return "no ranks inferred".to_string();
        }
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| format!("#{} {}", i + 1, p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
