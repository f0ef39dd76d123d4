//! Standings across players, games and time windows.
//!
//! Works on a read-only [`LeaderboardData`] snapshot; loading and storing
//! that snapshot is the caller's business.

pub mod highlights;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::{deserialize_id, Player, PlayerId};
use crate::error::{PodiumError, Result};

pub use highlights::{Highlight, FIRE_STREAK_DAYS};

/// Game family used by the filtered leaderboard modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCategory {
    Analytical,
    Language,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub category: Option<GameCategory>,
}

/// One game played on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub game_id: String,
    pub result_date: NaiveDate,
}

/// Stored placement row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub player_id: PlayerId,
    pub points: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub result_set_id: String,
}

/// Snapshot of everything the leaderboard needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardData {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
    #[serde(default)]
    pub placements: Vec<PlacementRecord>,
}

impl LeaderboardData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Placement joined with its result set and game
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlacement {
    pub player_id: PlayerId,
    pub points: i64,
    pub game_id: Option<String>,
    pub category: Option<GameCategory>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMode {
    #[default]
    Overall,
    Analytical,
    Language,
    Daily,
}

impl LeaderboardMode {
    pub fn description(self) -> &'static str {
        match self {
            LeaderboardMode::Overall => "Total points across all games.",
            LeaderboardMode::Analytical => "Points from analytical games only.",
            LeaderboardMode::Language => "Points from language games only.",
            LeaderboardMode::Daily => "Points scored today only.",
        }
    }

    fn includes(self, placement: &ScoredPlacement, today: NaiveDate) -> bool {
        match self {
            LeaderboardMode::Overall => true,
            LeaderboardMode::Analytical => placement.category == Some(GameCategory::Analytical),
            LeaderboardMode::Language => placement.category == Some(GameCategory::Language),
            LeaderboardMode::Daily => placement.date == Some(today),
        }
    }
}

impl std::str::FromStr for LeaderboardMode {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "overall" => Ok(LeaderboardMode::Overall),
            "analytical" => Ok(LeaderboardMode::Analytical),
            "language" => Ok(LeaderboardMode::Language),
            "daily" | "today" => Ok(LeaderboardMode::Daily),
            other => Err(PodiumError::InvalidInput(format!(
                "unknown leaderboard mode '{}'",
                other
            ))),
        }
    }
}

/// A player's total in one view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: Player,
    pub points: i64,
}

pub struct Leaderboard {
    players: Vec<Player>,
    games: Vec<Game>,
    placements: Vec<ScoredPlacement>,
}

impl Leaderboard {
    pub fn new(data: LeaderboardData) -> Self {
        let games_by_id: HashMap<&str, &Game> =
            data.games.iter().map(|g| (g.id.as_str(), g)).collect();
        let sets_by_id: HashMap<&str, &ResultSet> =
            data.result_sets.iter().map(|rs| (rs.id.as_str(), rs)).collect();

        let placements = data
            .placements
            .iter()
            .map(|record| {
                let result_set = sets_by_id.get(record.result_set_id.as_str());
                if result_set.is_none() {
                    tracing::warn!(
                        "Placement for player {} references unknown result set {}",
                        record.player_id,
                        record.result_set_id
                    );
                }
                let game = result_set.and_then(|rs| games_by_id.get(rs.game_id.as_str()));

                ScoredPlacement {
                    player_id: record.player_id.clone(),
                    points: record.points,
                    game_id: result_set.map(|rs| rs.game_id.clone()),
                    category: game.and_then(|g| g.category),
                    date: result_set.map(|rs| rs.result_date),
                }
            })
            .collect();

        tracing::debug!(
            "Leaderboard loaded: {} players, {} games, {} placements",
            data.players.len(),
            data.games.len(),
            data.placements.len()
        );

        Self {
            players: data.players,
            games: data.games,
            placements,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn placements(&self) -> &[ScoredPlacement] {
        &self.placements
    }

    /// Every roster player with their total in `mode`, best first
    pub fn standings(&self, mode: LeaderboardMode, today: NaiveDate) -> Vec<Standing> {
        let mut rows = self.totals(|p| mode.includes(p, today));
        sort_standings(&mut rows);
        rows
    }

    /// Players who scored in one game, best first
    pub fn game_standings(&self, game_id: &str) -> Result<Vec<Standing>> {
        if !self.games.iter().any(|g| g.id == game_id) {
            return Err(PodiumError::UnknownGame(game_id.to_string()));
        }

        let mut rows: Vec<Standing> = self
            .totals(|p| p.game_id.as_deref() == Some(game_id))
            .into_iter()
            .filter(|s| s.points > 0)
            .collect();
        sort_standings(&mut rows);
        Ok(rows)
    }

    /// Roster-ordered totals over the placements accepted by `filter`;
    /// placements for players not on the roster are ignored
    pub(crate) fn totals(&self, filter: impl Fn(&ScoredPlacement) -> bool) -> Vec<Standing> {
        let mut totals: HashMap<&PlayerId, i64> =
            self.players.iter().map(|p| (&p.id, 0)).collect();

        for placement in &self.placements {
            if !filter(placement) {
                continue;
            }
            if let Some(total) = totals.get_mut(&placement.player_id) {
                *total += placement.points;
            }
        }

        self.players
            .iter()
            .map(|p| Standing {
                player: p.clone(),
                points: totals.get(&p.id).copied().unwrap_or(0),
            })
            .collect()
    }
}

fn sort_standings(rows: &mut [Standing]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.name.cmp(&b.player.name))
    });
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn record(player: &str, points: i64, set: &str) -> PlacementRecord {
        PlacementRecord {
            player_id: player.into(),
            points,
            result_set_id: set.to_string(),
        }
    }

    fn game(id: &str, display_name: &str, category: GameCategory) -> Game {
        Game {
            id: id.to_string(),
            display_name: display_name.to_string(),
            category: Some(category),
        }
    }

    fn result_set(id: &str, game_id: &str, result_date: NaiveDate) -> ResultSet {
        ResultSet {
            id: id.to_string(),
            game_id: game_id.to_string(),
            result_date,
        }
    }

    pub(crate) fn sample() -> LeaderboardData {
        LeaderboardData {
            players: vec![
                Player::new("1", "Alex"),
                Player::new("2", "Bea"),
                Player::new("3", "Cal"),
                Player::new("4", "Dee"),
            ],
            games: vec![
                game("zip", "Zip", GameCategory::Analytical),
                game("pinpoint", "Pinpoint", GameCategory::Language),
            ],
            result_sets: vec![
                result_set("rs1", "zip", day(10)),
                result_set("rs2", "pinpoint", day(14)),
                result_set("rs3", "zip", day(14)),
            ],
            placements: vec![
                record("1", 3, "rs1"),
                record("2", 2, "rs1"),
                record("3", 1, "rs1"),
                record("2", 3, "rs2"),
                record("3", 2, "rs2"),
                record("3", 3, "rs3"),
            ],
        }
    }

    fn points(rows: &[Standing]) -> Vec<(&str, i64)> {
        rows.iter().map(|s| (s.player.name.as_str(), s.points)).collect()
    }

    #[test]
    fn test_overall() {
        let board = Leaderboard::new(sample());
        assert_eq!(board.players().len(), 4);
        assert_eq!(board.games().len(), 2);
        assert_eq!(board.placements().len(), 6);

        let rows = board.standings(LeaderboardMode::Overall, day(14));
        assert_eq!(points(&rows), vec![("Cal", 6), ("Bea", 5), ("Alex", 3), ("Dee", 0)]);
    }

    #[test]
    fn test_category_modes() {
        let board = Leaderboard::new(sample());

        let analytical = board.standings(LeaderboardMode::Analytical, day(14));
        assert_eq!(
            points(&analytical),
            vec![("Cal", 4), ("Alex", 3), ("Bea", 2), ("Dee", 0)]
        );

        let language = board.standings(LeaderboardMode::Language, day(14));
        assert_eq!(
            points(&language),
            vec![("Bea", 3), ("Cal", 2), ("Alex", 0), ("Dee", 0)]
        );
    }

    #[test]
    fn test_daily() {
        let board = Leaderboard::new(sample());
        let rows = board.standings(LeaderboardMode::Daily, day(14));
        assert_eq!(
            points(&rows),
            vec![("Cal", 5), ("Bea", 3), ("Alex", 0), ("Dee", 0)]
        );
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let mut data = sample();
        data.placements = vec![record("4", 2, "rs1"), record("1", 2, "rs1")];
        let board = Leaderboard::new(data);

        let rows = board.standings(LeaderboardMode::Overall, day(14));
        assert_eq!(&points(&rows)[..2], &[("Alex", 2), ("Dee", 2)]);
    }

    #[test]
    fn test_game_standings() {
        let board = Leaderboard::new(sample());
        let rows = board.game_standings("zip").unwrap();
        assert_eq!(points(&rows), vec![("Cal", 4), ("Alex", 3), ("Bea", 2)]);
    }

    #[test]
    fn test_unknown_game() {
        let board = Leaderboard::new(sample());
        assert!(matches!(
            board.game_standings("wordle"),
            Err(PodiumError::UnknownGame(_))
        ));
    }

    #[test]
    fn test_orphans_ignored() {
        let mut data = sample();
        data.placements.push(record("99", 10, "rs1"));
        data.placements.push(record("1", 10, "missing"));
        let board = Leaderboard::new(data);

        let overall = board.standings(LeaderboardMode::Overall, day(14));
        assert_eq!(overall.len(), 4);
        // orphan result set still counts overall, but not in filtered modes
        assert_eq!(points(&overall)[0], ("Alex", 13));
        // the missing result set leaves the placement without game or date
        assert!(board.placements().iter().any(|p| p.date.is_none()));
        let daily = board.standings(LeaderboardMode::Daily, day(14));
        let alex = daily.iter().find(|s| s.player.name == "Alex").unwrap();
        assert_eq!(alex.points, 0);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "Daily".parse::<LeaderboardMode>().unwrap(),
            LeaderboardMode::Daily
        );
        assert_eq!(
            "today".parse::<LeaderboardMode>().unwrap(),
            LeaderboardMode::Daily
        );
        assert!("weekly".parse::<LeaderboardMode>().is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "players": [{"id": 1, "name": "Alex"}, {"id": 2, "name": "Bea"}],
            "games": [
                {"id": "tango", "display_name": "Tango", "category": "puzzle"},
                {"id": 4, "display_name": "Zip", "category": "analytical"}
            ],
            "result_sets": [
                {"id": "rs1", "game_id": "tango", "result_date": "2025-03-14"},
                {"id": 17, "game_id": 4, "result_date": "2025-03-14"}
            ],
            "placements": [
                {"player_id": 1, "points": 3, "result_set_id": "rs1"},
                {"player_id": 2, "points": 2, "result_set_id": 17}
            ]
        }"#;
        let data = LeaderboardData::from_json(json).unwrap();
        assert_eq!(data.games[0].category, Some(GameCategory::Other));
        assert_eq!(data.games[1].id, "4");
        assert_eq!(data.result_sets[1].game_id, "4");
        assert_eq!(data.placements[1].result_set_id, "17");

        let board = Leaderboard::new(data);
        let overall = board.standings(LeaderboardMode::Overall, day(14));
        assert_eq!(points(&overall), vec![("Alex", 3), ("Bea", 2)]);

        let zip = board.game_standings("4").unwrap();
        assert_eq!(points(&zip), vec![("Bea", 2)]);
        let analytical = board.standings(LeaderboardMode::Analytical, day(14));
        assert_eq!(points(&analytical), vec![("Bea", 2), ("Alex", 0)]);
    }
}
