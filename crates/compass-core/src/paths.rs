//! Path constants for the workspace hierarchy
//!
//! Collaborators build links by string concatenation against these values,
//! so they are part of the public contract.

/// Root of every workspace-scoped path
pub const WORKSPACE_BASE_PATH: &str = "/workspace";

/// Personal workspace segment
pub const PERSONAL_PATH: &str = "personal";

/// Team workspace segment
pub const TEAM_PATH: &str = "team";

/// Entries view segment
pub const ENTRIES_PATH: &str = "entries";

/// Members view segment
pub const MEMBERS_PATH: &str = "members";

/// `/workspace/personal`
pub fn personal_root() -> String {
    format!("{}/{}", WORKSPACE_BASE_PATH, PERSONAL_PATH)
}

/// `/workspace/personal/entries`
pub fn personal_entries() -> String {
    format!("{}/{}/{}", WORKSPACE_BASE_PATH, PERSONAL_PATH, ENTRIES_PATH)
}

/// `/workspace/team/{team_id}`
pub fn team_root(team_id: &str) -> String {
    format!("{}/{}/{}", WORKSPACE_BASE_PATH, TEAM_PATH, team_id)
}
