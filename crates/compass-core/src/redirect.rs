//! Redirect resolution for index routes
//!
//! Pure functions from navigation context to a target path. Each invokes the
//! supplied navigation capability exactly once and never recurses; when a
//! computed target is itself an index path, re-dispatching is the
//! surrounding framework's job.

use crate::context::NavigationContext;
use crate::error::{Error, Result};
use crate::paths;
use crate::team::{is_public_team, Team};

/// Navigation capability supplied by the surrounding framework per event
///
/// Implemented for any `FnMut(&str)`, so a closure is enough:
///
/// ```
/// use compass_core::{redirect_to_personal, NavigationContext};
///
/// let mut seen = Vec::new();
/// let mut replace = |path: &str| seen.push(path.to_string());
/// redirect_to_personal(&NavigationContext::new("/workspace"), &mut replace);
/// assert_eq!(seen, vec!["/workspace/personal"]);
/// ```
pub trait Navigate {
    /// Replace the current location with `path`
    fn replace(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigate for F {
    fn replace(&mut self, path: &str) {
        self(path)
    }
}

/// Index rule for `/workspace`: always the personal workspace root
pub fn redirect_to_personal(ctx: &NavigationContext, navigate: &mut dyn Navigate) {
    let target = paths::personal_root();
    tracing::debug!(from = %ctx.pathname(), to = %target, "index redirect");
    navigate.replace(&target);
}

/// Index rule for `/workspace/personal`: always the personal entries view
pub fn redirect_to_personal_entries(ctx: &NavigationContext, navigate: &mut dyn Navigate) {
    let target = paths::personal_entries();
    tracing::debug!(from = %ctx.pathname(), to = %target, "index redirect");
    navigate.replace(&target);
}

/// Index rule for `/workspace/team/:teamId`: the entries view under the
/// requested path
///
/// Appends the entries segment to whatever team-scoped path was actually
/// requested; the bound team identifier is preserved because the pathname
/// already carries it.
pub fn redirect_to_team_entries(ctx: &NavigationContext, navigate: &mut dyn Navigate) {
    let target = format!(
        "{}/{}",
        ctx.pathname().trim_end_matches('/'),
        paths::ENTRIES_PATH
    );
    tracing::debug!(from = %ctx.pathname(), to = %target, "index redirect");
    navigate.replace(&target);
}

/// Index-redirect rules carried by the workspace route table
///
/// Kept as data rather than stored function pointers so built tables compare
/// structurally; [`IndexRedirect::run`] dispatches to the matching resolver
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRedirect {
    /// `/workspace` -> the personal workspace root
    Personal,
    /// `/workspace/personal` -> the personal entries view
    PersonalEntries,
    /// `/workspace/team/:teamId` -> the entries view under the requested path
    TeamEntries,
}

impl IndexRedirect {
    /// Invoke the matching resolver function, exactly once
    pub fn run(&self, ctx: &NavigationContext, navigate: &mut dyn Navigate) {
        match self {
            IndexRedirect::Personal => redirect_to_personal(ctx, navigate),
            IndexRedirect::PersonalEntries => redirect_to_personal_entries(ctx, navigate),
            IndexRedirect::TeamEntries => redirect_to_team_entries(ctx, navigate),
        }
    }

    /// The target this rule would navigate to, without navigating
    pub fn target(&self, ctx: &NavigationContext) -> String {
        let mut target = String::new();
        let mut capture = |path: &str| target = path.to_string();
        self.run(ctx, &mut capture);
        target
    }
}

/// Canonical "where does this team live" computation
///
/// Public teams are addressed by team scope, everything else resolves to the
/// personal workspace. No ownership check happens at this layer; access
/// control belongs to the authentication gate.
///
/// # Example
/// ```
/// use compass_core::{resolve_workspace_base_path, Team};
///
/// let team = Team::public("42");
/// assert_eq!(
///     resolve_workspace_base_path(&team).unwrap(),
///     "/workspace/team/42"
/// );
/// ```
pub fn resolve_workspace_base_path(team: &Team) -> Result<String> {
    if team.id.is_empty() {
        return Err(Error::MalformedTeam {
            reason: "empty team id".to_string(),
        });
    }
    if is_public_team(team) {
        Ok(paths::team_root(&team.id))
    } else {
        Ok(paths::personal_root())
    }
}

/// Base path for the current scope; no team means the personal workspace
pub fn current_base_path(team: Option<&Team>) -> Result<String> {
    match team {
        Some(team) => resolve_workspace_base_path(team),
        None => Ok(paths::personal_root()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_to_personal_once() {
        let mut seen = Vec::new();
        let mut nav = |path: &str| seen.push(path.to_string());
        redirect_to_personal(&NavigationContext::new("/workspace"), &mut nav);
        assert_eq!(seen, vec!["/workspace/personal"]);
    }

    #[test]
    fn test_redirect_to_personal_entries_once() {
        let mut seen = Vec::new();
        let mut nav = |path: &str| seen.push(path.to_string());
        redirect_to_personal_entries(&NavigationContext::new("/workspace/personal"), &mut nav);
        assert_eq!(seen, vec!["/workspace/personal/entries"]);
    }

    #[test]
    fn test_redirect_to_team_entries_preserves_team_id() {
        let mut seen = Vec::new();
        let mut nav = |path: &str| seen.push(path.to_string());
        redirect_to_team_entries(&NavigationContext::new("/workspace/team/42"), &mut nav);
        assert_eq!(seen, vec!["/workspace/team/42/entries"]);
    }

    #[test]
    fn test_redirect_ignores_irrelevant_context() {
        // Personal redirects are unconditional, whatever the context says
        let ctx = NavigationContext::new("/workspace").with_team(Team::public("9"));
        let mut seen = Vec::new();
        let mut nav = |path: &str| seen.push(path.to_string());
        redirect_to_personal(&ctx, &mut nav);
        assert_eq!(seen, vec!["/workspace/personal"]);
    }

    #[test]
    fn test_rule_targets() {
        let ctx = NavigationContext::new("/workspace/team/7");
        assert_eq!(IndexRedirect::Personal.target(&ctx), "/workspace/personal");
        assert_eq!(
            IndexRedirect::PersonalEntries.target(&ctx),
            "/workspace/personal/entries"
        );
        assert_eq!(
            IndexRedirect::TeamEntries.target(&ctx),
            "/workspace/team/7/entries"
        );
    }

    #[test]
    fn test_base_path_public_team() {
        let team = Team::public("t1");
        assert_eq!(
            resolve_workspace_base_path(&team).unwrap(),
            "/workspace/team/t1"
        );
    }

    #[test]
    fn test_base_path_private_team() {
        let team = Team::private("t1");
        assert_eq!(
            resolve_workspace_base_path(&team).unwrap(),
            "/workspace/personal"
        );
    }

    #[test]
    fn test_base_path_rejects_empty_id() {
        let team = Team::public("");
        assert!(matches!(
            resolve_workspace_base_path(&team),
            Err(Error::MalformedTeam { .. })
        ));
    }

    #[test]
    fn test_current_base_path() {
        assert_eq!(current_base_path(None).unwrap(), "/workspace/personal");
        assert_eq!(
            current_base_path(Some(&Team::public("t1"))).unwrap(),
            "/workspace/team/t1"
        );
        assert_eq!(
            current_base_path(Some(&Team::private("t1"))).unwrap(),
            "/workspace/personal"
        );
    }
}
