use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::leaderboard::{Leaderboard, LeaderboardMode, Standing};

/// Window for the "on fire" card, counted back from today inclusive
pub const FIRE_STREAK_DAYS: i64 = 7;

/// Banter cards shown above the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Highlight {
    /// Overall leader
    Monarch { player: Player, points: i64 },
    /// Best score today
    PlayerOfTheDay { player: Player, points: i64, date: NaiveDate },
    /// Most points over the last week
    OnFire { player: Player, points: i64 },
    /// Lowest overall total among players who scored at all
    Stinker { player: Player, points: i64 },
}

impl Highlight {
    pub fn title(&self) -> &'static str {
        match self {
            Highlight::Monarch { .. } => "LinkedIn Monarch 👑",
            Highlight::PlayerOfTheDay { .. } => "Player of the Day 🔥",
            Highlight::OnFire { .. } => "On Fire Streak 🔥🔥",
            Highlight::Stinker { .. } => "Having a Stinker 😬",
        }
    }

    pub fn text(&self) -> String {
        match self {
            Highlight::Monarch { player, points } => {
                format!("{} is ruling the league with {} total points.", player.name, points)
            }
            Highlight::PlayerOfTheDay { player, points, date } => {
                format!("{} dropped {} point(s) today ({}).", player.name, points, date)
            }
            Highlight::OnFire { player, points } => format!(
                "{} has {} point(s) in the last {} days. Keep the streak alive.",
                player.name, points, FIRE_STREAK_DAYS
            ),
            Highlight::Stinker { player, points } => format!(
                "{} is currently at the bottom with {} total points. Time for a comeback.",
                player.name, points
            ),
        }
    }

    pub fn player(&self) -> &Player {
        match self {
            Highlight::Monarch { player, .. }
            | Highlight::PlayerOfTheDay { player, .. }
            | Highlight::OnFire { player, .. }
            | Highlight::Stinker { player, .. } => player,
        }
    }
}

impl Leaderboard {
    /// Cards in display order; cards without a qualifying player are left out
    pub fn highlights(&self, today: NaiveDate) -> Vec<Highlight> {
        let mut cards = Vec::new();

        let overall = self.standings(LeaderboardMode::Overall, today);
        let scorers: Vec<_> = overall.iter().filter(|s| s.points > 0).collect();

        if let Some(leader) = scorers.first() {
            cards.push(Highlight::Monarch {
                player: leader.player.clone(),
                points: leader.points,
            });
        }

        let daily = self.standings(LeaderboardMode::Daily, today);
        if let Some(best) = daily.iter().find(|s| s.points > 0) {
            cards.push(Highlight::PlayerOfTheDay {
                player: best.player.clone(),
                points: best.points,
                date: today,
            });
        }

        let recent = self.totals(|p| {
            p.date
                .map_or(false, |date| (today - date).num_days() < FIRE_STREAK_DAYS)
        });
        // strict > so the earlier roster position keeps a tie
        let mut on_fire: Option<&Standing> = None;
        for standing in &recent {
            if standing.points > on_fire.map_or(0, |s| s.points) {
                on_fire = Some(standing);
            }
        }
        if let Some(hot) = on_fire {
            cards.push(Highlight::OnFire {
                player: hot.player.clone(),
                points: hot.points,
            });
        }

        if scorers.len() > 1 {
            if let Some(last) = scorers.last() {
                cards.push(Highlight::Stinker {
                    player: last.player.clone(),
                    points: last.points,
                });
            }
        }

        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::tests::{day, sample};
    use crate::leaderboard::{LeaderboardData, PlacementRecord};

    #[test]
    fn test_all_cards() {
        let board = Leaderboard::new(sample());
        let cards = board.highlights(day(14));

        let kinds: Vec<(&str, &str, String)> = cards
            .iter()
            .map(|c| (c.title(), c.player().name.as_str(), c.text()))
            .collect();

        assert_eq!(cards.len(), 4);
        assert_eq!(kinds[0].0, "LinkedIn Monarch 👑");
        assert_eq!(kinds[0].1, "Cal");
        assert!(matches!(cards[0], Highlight::Monarch { points: 6, .. }));
        assert!(matches!(cards[1], Highlight::PlayerOfTheDay { points: 5, .. }));
        assert_eq!(kinds[1].1, "Cal");
        // every placement is within the week of the 14th
        assert!(matches!(cards[2], Highlight::OnFire { points: 6, .. }));
        assert_eq!(kinds[3].1, "Alex");
        assert!(matches!(cards[3], Highlight::Stinker { points: 3, .. }));
        assert!(kinds[3].2.contains("at the bottom"));
    }

    #[test]
    fn test_fire_window() {
        let board = Leaderboard::new(sample());
        // rs1 on the 10th is 7 days before the 17th, outside the window
        let cards = board.highlights(day(17));

        let fire = cards
            .iter()
            .find(|c| matches!(c, Highlight::OnFire { .. }))
            .unwrap();
        assert_eq!(fire.player().name, "Cal");
        assert!(matches!(fire, Highlight::OnFire { points: 5, .. }));
        assert!(!cards
            .iter()
            .any(|c| matches!(c, Highlight::PlayerOfTheDay { .. })));
    }

    #[test]
    fn test_fire_tie_keeps_roster_order() {
        let mut data = sample();
        data.placements = vec![
            PlacementRecord {
                player_id: "2".into(),
                points: 3,
                result_set_id: "rs3".into(),
            },
            PlacementRecord {
                player_id: "1".into(),
                points: 3,
                result_set_id: "rs3".into(),
            },
        ];
        let board = Leaderboard::new(data);

        let cards = board.highlights(day(14));
        let fire = cards
            .iter()
            .find(|c| matches!(c, Highlight::OnFire { .. }))
            .unwrap();
        assert_eq!(fire.player().name, "Alex");
    }

    #[test]
    fn test_single_scorer_has_no_stinker() {
        let mut data = sample();
        data.placements.retain(|p| p.player_id.as_str() == "1");
        let board = Leaderboard::new(data);

        let cards = board.highlights(day(14));
        assert!(cards.iter().any(|c| matches!(c, Highlight::Monarch { .. })));
        assert!(!cards.iter().any(|c| matches!(c, Highlight::Stinker { .. })));
    }

    #[test]
    fn test_empty_board() {
        let board = Leaderboard::new(LeaderboardData::default());
        assert!(board.highlights(day(14)).is_empty());
    }
}
