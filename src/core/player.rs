use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player identifier.
///
/// Table stores hand out numeric keys while forms and query strings carry
/// them as text, so both JSON shapes are accepted and compared by their
/// string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for PlayerId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

/// Deserialize a record key from string or int (table store compatibility)
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(i64),
        String(String),
    }

    match IdValue::deserialize(deserializer)? {
        IdValue::Int(i) => Ok(i.to_string()),
        IdValue::String(s) => Ok(s),
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserialize_id(deserializer).map(PlayerId)
    }
}

/// A known player on the roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Unique ID from the roster store
    pub id: PlayerId,

    /// Display name ("Sam Lee")
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Lowercased name up to the first space; this is the key matched
    /// against recognized text. Empty for names that start with a space.
    pub fn first_name_token(&self) -> String {
        self.name
            .split(' ')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// Find a player by id in a roster snapshot
pub fn find_player<'a>(roster: &'a [Player], id: &PlayerId) -> Option<&'a Player> {
    roster.iter().find(|p| &p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_token() {
        assert_eq!(Player::new("1", "Sam Lee").first_name_token(), "sam");
        assert_eq!(Player::new("2", "MAX").first_name_token(), "max");
        assert_eq!(Player::new("3", "Mary Ann Jones").first_name_token(), "mary");
    }

    #[test]
    fn test_degenerate_first_name_token() {
        assert_eq!(Player::new("1", "").first_name_token(), "");
        assert_eq!(Player::new("2", " Lee").first_name_token(), "");
    }

    #[test]
    fn test_id_accepts_int_and_string() {
        let from_int: Player = serde_json::from_str(r#"{"id": 7, "name": "Sam"}"#).unwrap();
        let from_str: Player = serde_json::from_str(r#"{"id": "7", "name": "Sam"}"#).unwrap();
        assert_eq!(from_int.id, from_str.id);
        assert_eq!(from_int.id, PlayerId::new("7"));
    }

    #[test]
    fn test_find_player() {
        let roster = vec![Player::new("1", "Sam Lee"), Player::new("2", "Max Ray")];
        assert_eq!(find_player(&roster, &PlayerId::from("2")).unwrap().name, "Max Ray");
        assert!(find_player(&roster, &PlayerId::from("9")).is_none());
    }
}
