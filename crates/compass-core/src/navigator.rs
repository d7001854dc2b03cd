//! Navigation dispatch
//!
//! The surrounding framework matches each navigation event against the route
//! table and re-dispatches after an index redirect. [`resolve_navigation`]
//! handles one such event; [`Navigator`] owns a table and replays the
//! re-dispatch loop so a navigation can be driven to its terminal outcome.

use compass_router::{RouteMatch, RouteNode};

use crate::context::NavigationContext;
use crate::error::{Error, Result};
use crate::redirect::{IndexRedirect, Navigate};
use crate::routes::build_workspace_routes;
use crate::team::Team;

/// Terminal disposition of one navigation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// No node consumed the pathname
    Unmatched,
    /// A concrete route matched; the view registered for `route` renders
    Matched {
        /// Full pattern of the matched node
        route: String,
        /// Parameters bound on the way down
        params: Vec<(String, String)>,
    },
    /// An index rule fired; the framework re-dispatches to `target`
    Redirected {
        /// The path the navigation capability was called with
        target: String,
    },
}

/// Resolve one navigation event against a route table
///
/// At most one redirect rule runs per event, and it calls `navigate` exactly
/// once. A non-index match bypasses every redirect rule; chained index
/// targets are the caller's re-dispatch to perform.
pub fn resolve_navigation(
    routes: &RouteNode<IndexRedirect>,
    ctx: &NavigationContext,
    navigate: &mut dyn Navigate,
) -> NavigationOutcome {
    match routes.resolve(ctx.pathname()) {
        None => {
            tracing::debug!(path = %ctx.pathname(), "unmatched navigation");
            NavigationOutcome::Unmatched
        }
        Some(RouteMatch::Route { route, params, .. }) => {
            tracing::trace!(path = %ctx.pathname(), route = %route, "matched route");
            NavigationOutcome::Matched { route, params }
        }
        Some(RouteMatch::Index { payload, params, .. }) => {
            let ctx = ctx.clone().with_params(params);
            let mut target = String::new();
            {
                let mut forward = |path: &str| {
                    target.push_str(path);
                    navigate.replace(path);
                };
                payload.run(&ctx, &mut forward);
            }
            NavigationOutcome::Redirected { target }
        }
    }
}

/// Default bound on chained index redirects per navigation
pub const MAX_REDIRECT_HOPS: usize = 8;

/// Owns a route table and replays the framework's re-dispatch loop
///
/// # Example
/// ```
/// use compass_core::{NavigationOutcome, Navigator};
///
/// let mut nav = Navigator::new();
/// let outcome = nav.navigate("/workspace", None).unwrap();
/// assert!(matches!(outcome, NavigationOutcome::Matched { .. }));
/// assert_eq!(nav.current_path(), Some("/workspace/personal/entries"));
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    routes: RouteNode<IndexRedirect>,
    max_hops: usize,
    current_path: Option<String>,
    history: Vec<String>,
}

impl Navigator {
    /// A navigator over the workspace route table
    pub fn new() -> Self {
        Self::with_routes(build_workspace_routes())
    }

    /// A navigator over a caller-supplied table
    pub fn with_routes(routes: RouteNode<IndexRedirect>) -> Self {
        Self {
            routes,
            max_hops: MAX_REDIRECT_HOPS,
            current_path: None,
            history: Vec::new(),
        }
    }

    /// Override the redirect hop limit
    pub fn max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// The route table being navigated
    pub fn routes(&self) -> &RouteNode<IndexRedirect> {
        &self.routes
    }

    /// Pathname of the last successfully rendered route
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    /// Every path the navigation capability replaced to, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Drive one user navigation to its terminal outcome
    ///
    /// Follows chained index redirects the way the surrounding framework
    /// re-dispatches: one event, one resolver invocation, then again against
    /// the computed target. Exceeding the hop limit fails loudly instead of
    /// spinning.
    pub fn navigate(&mut self, path: &str, team: Option<&Team>) -> Result<NavigationOutcome> {
        let mut pathname = path.to_string();
        let mut hops = 0usize;
        loop {
            let mut ctx = NavigationContext::new(pathname.clone());
            if let Some(team) = team {
                ctx = ctx.with_team(team.clone());
            }

            let mut replaced: Vec<String> = Vec::new();
            let outcome = resolve_navigation(&self.routes, &ctx, &mut |p: &str| {
                replaced.push(p.to_string());
            });
            self.history.append(&mut replaced);

            match outcome {
                NavigationOutcome::Redirected { target } => {
                    hops += 1;
                    if hops > self.max_hops {
                        return Err(Error::RedirectLoop {
                            path: path.to_string(),
                            hops,
                        });
                    }
                    pathname = target;
                }
                outcome => {
                    if let NavigationOutcome::Matched { .. } = outcome {
                        self.current_path = Some(pathname);
                    }
                    return Ok(outcome);
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(path: &str) -> NavigationContext {
        NavigationContext::new(path)
    }

    #[test]
    fn test_single_event_index_redirect() {
        let routes = build_workspace_routes();
        let mut seen = Vec::new();

        let outcome = resolve_navigation(&routes, &ctx("/workspace"), &mut |p: &str| {
            seen.push(p.to_string());
        });

        assert_eq!(
            outcome,
            NavigationOutcome::Redirected {
                target: "/workspace/personal".to_string()
            }
        );
        // The capability was invoked exactly once
        assert_eq!(seen, vec!["/workspace/personal"]);
    }

    #[test]
    fn test_single_event_non_index_bypasses_rules() {
        let routes = build_workspace_routes();
        let mut seen = Vec::new();

        let outcome =
            resolve_navigation(&routes, &ctx("/workspace/team/7/members"), &mut |p: &str| {
                seen.push(p.to_string());
            });

        assert_eq!(
            outcome,
            NavigationOutcome::Matched {
                route: "/workspace/team/:teamId/members".to_string(),
                params: vec![("teamId".to_string(), "7".to_string())],
            }
        );
        assert!(seen.is_empty());
    }

    #[test]
    fn test_single_event_unmatched() {
        let routes = build_workspace_routes();
        let mut seen = Vec::new();

        let outcome = resolve_navigation(&routes, &ctx("/elsewhere"), &mut |p: &str| {
            seen.push(p.to_string());
        });

        assert_eq!(outcome, NavigationOutcome::Unmatched);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_chained_redirects_to_personal_entries() {
        let mut nav = Navigator::new();

        let outcome = nav.navigate("/workspace", None).unwrap();

        assert_eq!(
            outcome,
            NavigationOutcome::Matched {
                route: "/workspace/personal/entries".to_string(),
                params: Vec::new(),
            }
        );
        // Two hops, both recorded in dispatch order
        assert_eq!(
            nav.history(),
            &[
                "/workspace/personal".to_string(),
                "/workspace/personal/entries".to_string(),
            ]
        );
        assert_eq!(nav.current_path(), Some("/workspace/personal/entries"));
    }

    #[test]
    fn test_team_index_redirects_to_entries() {
        let mut nav = Navigator::new();

        let outcome = nav.navigate("/workspace/team/7", None).unwrap();

        assert_eq!(
            outcome,
            NavigationOutcome::Matched {
                route: "/workspace/team/:teamId/entries".to_string(),
                params: vec![("teamId".to_string(), "7".to_string())],
            }
        );
        assert_eq!(nav.history(), &["/workspace/team/7/entries".to_string()]);
    }

    #[test]
    fn test_members_renders_without_redirect() {
        let mut nav = Navigator::new();

        let outcome = nav.navigate("/workspace/team/7/members", None).unwrap();

        assert!(matches!(outcome, NavigationOutcome::Matched { .. }));
        assert!(nav.history().is_empty());
        assert_eq!(nav.current_path(), Some("/workspace/team/7/members"));
    }

    #[test]
    fn test_unmatched_leaves_current_path_unset() {
        let mut nav = Navigator::new();
        let outcome = nav.navigate("/elsewhere", None).unwrap();
        assert_eq!(outcome, NavigationOutcome::Unmatched);
        assert_eq!(nav.current_path(), None);
    }

    #[test]
    fn test_redirect_loop_is_an_error() {
        // A table whose index rule targets its own index path
        let looping = compass_router::RouteNode::new("/workspace")
            .child(compass_router::RouteNode::new("personal").index(IndexRedirect::Personal));

        let mut nav = Navigator::with_routes(looping).max_hops(3);
        let err = nav.navigate("/workspace/personal", None).unwrap_err();
        assert!(matches!(err, Error::RedirectLoop { hops: 4, .. }));
    }
}
