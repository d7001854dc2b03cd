//! The workspace route table

use compass_router::RouteNode;

use crate::paths::{ENTRIES_PATH, MEMBERS_PATH, PERSONAL_PATH, TEAM_PATH, WORKSPACE_BASE_PATH};
use crate::redirect::IndexRedirect;

/// Parameter bound by the team branch
pub const TEAM_ID_PARAM: &str = "teamId";

/// Build the workspace route table
///
/// Constant data: no runtime input, no side effects, and every call yields a
/// structurally identical tree. The shape:
///
/// ```text
/// /workspace                         (index -> personal)
///   /personal                        (index -> personal/entries)
///     /entries
///   /team/:teamId                    (index -> {currentPath}/entries)
///     /entries
///     /members
/// ```
///
/// # Example
/// ```
/// use compass_core::build_workspace_routes;
///
/// let routes = build_workspace_routes();
/// assert!(routes.resolve("/workspace/personal/entries").is_some());
/// assert!(routes.resolve("/elsewhere").is_none());
/// ```
pub fn build_workspace_routes() -> RouteNode<IndexRedirect> {
    RouteNode::new(WORKSPACE_BASE_PATH)
        .index(IndexRedirect::Personal)
        .child(
            RouteNode::new(PERSONAL_PATH)
                .index(IndexRedirect::PersonalEntries)
                .child(RouteNode::new(ENTRIES_PATH)),
        )
        .child(
            RouteNode::new(format!("{}/:{}", TEAM_PATH, TEAM_ID_PARAM))
                .index(IndexRedirect::TeamEntries)
                .child(RouteNode::new(ENTRIES_PATH))
                .child(RouteNode::new(MEMBERS_PATH)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let routes = build_workspace_routes();
        assert_eq!(
            routes.paths(),
            vec![
                "/workspace",
                "/workspace/personal",
                "/workspace/personal/entries",
                "/workspace/team/:teamId",
                "/workspace/team/:teamId/entries",
                "/workspace/team/:teamId/members",
            ]
        );
    }

    #[test]
    fn test_builds_are_structurally_equal() {
        assert_eq!(build_workspace_routes(), build_workspace_routes());
    }

    #[test]
    fn test_index_rules() {
        let routes = build_workspace_routes();

        let m = routes.resolve("/workspace").unwrap();
        assert!(m.is_index());
        assert_eq!(m.node().index_payload(), Some(&IndexRedirect::Personal));

        let m = routes.resolve("/workspace/personal").unwrap();
        assert_eq!(
            m.node().index_payload(),
            Some(&IndexRedirect::PersonalEntries)
        );

        let m = routes.resolve("/workspace/team/7").unwrap();
        assert!(m.is_index());
        assert_eq!(m.node().index_payload(), Some(&IndexRedirect::TeamEntries));
        assert_eq!(m.params_map().get(TEAM_ID_PARAM), Some(&"7".to_string()));
    }

    #[test]
    fn test_leaves_are_plain_routes() {
        let routes = build_workspace_routes();

        assert!(!routes.resolve("/workspace/personal/entries").unwrap().is_index());
        assert!(!routes.resolve("/workspace/team/7/entries").unwrap().is_index());
        assert!(!routes.resolve("/workspace/team/7/members").unwrap().is_index());
    }
}
