//! WASM bindings for JavaScript interop
//! Primitive-only surface: strings in, strings and flattened vectors out

use compass_core::{
    build_workspace_routes, paths, resolve_navigation, resolve_workspace_base_path, IndexRedirect,
    NavigationContext, NavigationOutcome, Team, Visibility,
};
use compass_router::RouteNode;
use wasm_bindgen::prelude::*;

// ============================================================================
// Router
// ============================================================================

/// WASM-exposed workspace router
#[wasm_bindgen]
pub struct WorkspaceRouter {
    routes: RouteNode<IndexRedirect>,
}

#[wasm_bindgen]
impl WorkspaceRouter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            routes: build_workspace_routes(),
        }
    }

    /// Resolve one navigation event
    ///
    /// The host renders the matched route, replaces the location with the
    /// redirect target, or falls through to its not-found handling.
    pub fn resolve(&self, pathname: &str) -> NavigationResult {
        let ctx = NavigationContext::new(pathname);
        // The JS host owns the actual location replace; it receives the
        // target through the returned result.
        let outcome = resolve_navigation(&self.routes, &ctx, &mut |_: &str| {});

        match outcome {
            NavigationOutcome::Unmatched => NavigationResult {
                matched: false,
                route: None,
                redirect: None,
                params: Vec::new(),
            },
            NavigationOutcome::Matched { route, params } => NavigationResult {
                matched: true,
                route: Some(route),
                redirect: None,
                params: params.into_iter().flat_map(|(k, v)| vec![k, v]).collect(),
            },
            NavigationOutcome::Redirected { target } => NavigationResult {
                matched: true,
                route: None,
                redirect: Some(target),
                params: Vec::new(),
            },
        }
    }

    /// Full patterns of every route in the table
    pub fn routes(&self) -> Vec<String> {
        self.routes.paths()
    }
}

impl Default for WorkspaceRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation result for WASM
#[wasm_bindgen]
pub struct NavigationResult {
    /// Whether any node consumed the pathname
    pub matched: bool,
    route: Option<String>,
    redirect: Option<String>,
    params: Vec<String>,
}

#[wasm_bindgen]
impl NavigationResult {
    /// Full pattern of the matched route, when one renders
    #[wasm_bindgen(getter)]
    pub fn route(&self) -> Option<String> {
        self.route.clone()
    }

    /// Target to replace the location with, when an index rule fired
    #[wasm_bindgen(getter)]
    pub fn redirect(&self) -> Option<String> {
        self.redirect.clone()
    }

    /// Bound parameters, flattened as [name, value, name, value, ...]
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.params.clone()
    }
}

// ============================================================================
// Base paths
// ============================================================================

/// Base path for a team scope
#[wasm_bindgen]
pub fn workspace_base_path(team_id: &str, public: bool) -> Result<String, JsError> {
    let visibility = if public {
        Visibility::Public
    } else {
        Visibility::Private
    };
    let team = Team::new(team_id, visibility);
    resolve_workspace_base_path(&team).map_err(|e| JsError::new(&e.to_string()))
}

/// Base path when no team is in scope
#[wasm_bindgen]
pub fn personal_base_path() -> String {
    paths::personal_root()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_redirect() {
        let router = WorkspaceRouter::new();
        let result = router.resolve("/workspace/team/7");
        assert!(result.matched);
        assert_eq!(
            result.redirect(),
            Some("/workspace/team/7/entries".to_string())
        );
        assert_eq!(result.route(), None);
    }

    #[test]
    fn test_resolve_match_with_params() {
        let router = WorkspaceRouter::new();
        let result = router.resolve("/workspace/team/7/members");
        assert!(result.matched);
        assert_eq!(
            result.route(),
            Some("/workspace/team/:teamId/members".to_string())
        );
        assert_eq!(result.params(), vec!["teamId", "7"]);
    }

    #[test]
    fn test_resolve_unmatched() {
        let router = WorkspaceRouter::new();
        let result = router.resolve("/elsewhere");
        assert!(!result.matched);
        assert_eq!(result.redirect(), None);
    }

    #[test]
    fn test_base_paths() {
        match workspace_base_path("42", true) {
            Ok(path) => assert_eq!(path, "/workspace/team/42"),
            Err(_) => panic!("public team must resolve"),
        }
        match workspace_base_path("42", false) {
            Ok(path) => assert_eq!(path, "/workspace/personal"),
            Err(_) => panic!("private team must resolve"),
        }
        assert_eq!(personal_base_path(), "/workspace/personal");
    }
}
