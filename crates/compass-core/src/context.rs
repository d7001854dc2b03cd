//! Per-event navigation state

use crate::team::Team;

/// Ephemeral context handed to redirect resolution
///
/// Constructed when a navigation event arrives, discarded once the event is
/// resolved. The team is present only when navigating a team-scoped branch;
/// parameters are whatever the route match bound on the way down.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationContext {
    pathname: String,
    team: Option<Team>,
    params: Vec<(String, String)>,
}

impl NavigationContext {
    /// Context for a navigation event at `pathname`
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            team: None,
            params: Vec::new(),
        }
    }

    /// Attach the team whose branch is being navigated
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    /// Attach parameters bound by the route match
    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    /// The pathname being navigated to
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// The team in scope, if any
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// A parameter bound by the route match
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
