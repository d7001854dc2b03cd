//! Team records and the visibility predicate

use serde::{Deserialize, Serialize};

/// Workspace owner scope
///
/// A team's visibility classification is fixed for the lifetime of a
/// navigation session: records are classified by [`is_public_team`] and
/// never reclassified in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Opaque identifier
    pub id: String,
    /// Whether the workspace is addressed by team scope or personal scope
    pub visibility: Visibility,
}

impl Team {
    /// Create a team record
    pub fn new(id: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            id: id.into(),
            visibility,
        }
    }

    /// A public team, addressable by team identifier
    pub fn public(id: impl Into<String>) -> Self {
        Self::new(id, Visibility::Public)
    }

    /// A private team, reachable only through the personal scope
    pub fn private(id: impl Into<String>) -> Self {
        Self::new(id, Visibility::Private)
    }

    /// Whether this team's workspace is addressed by team scope
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Team visibility classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Addressable directly by team identifier
    Public,
    /// Reachable only through the requesting user's personal scope
    Private,
}

/// Pure team-visibility predicate
pub fn is_public_team(team: &Team) -> bool {
    team.is_public()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate() {
        assert!(is_public_team(&Team::public("7")));
        assert!(!is_public_team(&Team::private("7")));
    }

    #[test]
    fn test_wire_shape() {
        let team: Team = serde_json::from_str(r#"{"id":"t1","visibility":"public"}"#).unwrap();
        assert_eq!(team, Team::public("t1"));

        let json = serde_json::to_string(&Team::private("t2")).unwrap();
        assert_eq!(json, r#"{"id":"t2","visibility":"private"}"#);
    }
}
