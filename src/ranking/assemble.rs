use std::collections::HashSet;

use crate::core::{Match, RankingResult};

/// Order matches by earliest line and keep the first `max_ranks` distinct
/// players. The sort is stable: players found on the same line keep their
/// roster order.
pub fn assemble_ranking(mut matches: Vec<Match>, max_ranks: usize) -> RankingResult {
    matches.sort_by_key(|m| m.line_index);

    let mut seen = HashSet::new();
    let players = matches
        .into_iter()
        .filter(|m| seen.insert(m.player.id.clone()))
        .take(max_ranks)
        .map(|m| m.player)
        .collect();

    RankingResult::new(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerId};

    fn ids(raw: &[&str]) -> Vec<PlayerId> {
        raw.iter().map(|id| PlayerId::from(*id)).collect()
    }

    fn m(id: &str, line: usize) -> Match {
        Match::new(Player::new(id, format!("Player {id}")), line)
    }

    #[test]
    fn test_orders_by_line() {
        let result = assemble_ranking(vec![m("a", 4), m("b", 1), m("c", 2)], 3);
        assert_eq!(result.ids(), ids(&["b", "c", "a"]));
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let result = assemble_ranking(vec![m("a", 0), m("b", 0)], 3);
        assert_eq!(result.ids(), ids(&["a", "b"]));
    }

    #[test]
    fn test_truncates_to_max_ranks() {
        let result = assemble_ranking(vec![m("a", 0), m("b", 1), m("c", 2), m("d", 3)], 3);
        assert_eq!(result.len(), 3);
        assert_eq!(result.ids(), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let result = assemble_ranking(vec![m("a", 2), m("a", 0), m("b", 1)], 3);
        assert_eq!(result.ids(), ids(&["a", "b"]));
    }

    #[test]
    fn test_empty() {
        assert!(assemble_ranking(Vec::new(), 3).is_empty());
    }
}
