//! compass-router: Zero-dependency nested route tree
//!
//! Single Source of Truth (SSOT) route table used by both compass-core
//! (navigation semantics) and compass-wasm (browser bindings).
//!
//! ## Features
//! - Hierarchical route nodes, matched depth-first
//! - Static segments: `personal`, `entries`
//! - Parameters: `team/:teamId` (one pattern may span several segments)
//! - Index payloads: data carried by a node and surfaced only when the
//!   pathname ends exactly at that node
//! - Zero external dependencies
//!
//! ## Path Syntax
//! - `name` - Static segment, matched by equality
//! - `:name` - Named parameter (captures one non-empty segment)
//!
//! ## Priority
//! Children are tried in insertion order; the first child whose subtree
//! matches the remaining pathname wins. An exhausted subtree backtracks and
//! releases any parameters it bound.
//!
//! ## Example
//! ```
//! use compass_router::{RouteMatch, RouteNode};
//!
//! let tree: RouteNode<&str> = RouteNode::new("/app")
//!     .index("to-inbox")
//!     .child(RouteNode::new("inbox"))
//!     .child(RouteNode::new("folders/:folderId"));
//!
//! match tree.resolve("/app/folders/7").unwrap() {
//!     RouteMatch::Route { route, params, .. } => {
//!         assert_eq!(route, "/app/folders/:folderId");
//!         assert_eq!(params, vec![("folderId".to_string(), "7".to_string())]);
//!     }
//!     RouteMatch::Index { .. } => unreachable!(),
//! }
//! ```

use std::collections::HashMap;

/// One component of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal segment, matched by string equality
    Static(String),
    /// `:name` parameter, matches any non-empty segment and binds it
    Param(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(raw.to_string()),
        }
    }

    /// Whether this segment binds a parameter
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// One node of the navigable hierarchy
///
/// A node owns a pattern (one or more `/`-separated segments), an optional
/// index payload and an ordered list of children. The node `resolve` is
/// called on acts as the root; everything below it forms a tree.
///
/// The index payload `I` is opaque to this crate. compass-core instantiates
/// it with its redirect rules; tests typically use `&str`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode<I> {
    pattern: String,
    segments: Vec<Segment>,
    index: Option<I>,
    children: Vec<RouteNode<I>>,
}

impl<I> RouteNode<I> {
    /// Create a node from a pattern
    ///
    /// Leading and trailing slashes are ignored, so `/workspace`,
    /// `workspace` and `workspace/` describe the same node.
    ///
    /// # Example
    /// ```
    /// use compass_router::RouteNode;
    ///
    /// let node: RouteNode<()> = RouteNode::new("team/:teamId");
    /// assert_eq!(node.pattern(), "team/:teamId");
    /// ```
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(Segment::parse)
            .collect();
        Self {
            pattern,
            segments,
            index: None,
            children: Vec::new(),
        }
    }

    /// Attach the index payload, surfaced when the pathname ends here
    pub fn index(mut self, payload: I) -> Self {
        self.index = Some(payload);
        self
    }

    /// Append a child node; insertion order is match priority
    pub fn child(mut self, child: RouteNode<I>) -> Self {
        self.children.push(child);
        self
    }

    /// The pattern this node was built from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The parsed segments of this node's pattern
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The index payload, if any
    pub fn index_payload(&self) -> Option<&I> {
        self.index.as_ref()
    }

    /// Child nodes in priority order
    pub fn children(&self) -> &[RouteNode<I>] {
        &self.children
    }

    /// Match a pathname against the tree rooted at this node
    ///
    /// Returns `None` when the pathname does not reach any node, or when
    /// segments remain beyond the deepest node they reach.
    ///
    /// # Example
    /// ```
    /// use compass_router::RouteNode;
    ///
    /// let tree: RouteNode<&str> = RouteNode::new("/app").index("rule");
    /// assert!(tree.resolve("/app").unwrap().is_index());
    /// assert!(tree.resolve("/other").is_none());
    /// ```
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, I>> {
        let input: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = Vec::new();
        let mut trail = Vec::new();
        Self::resolve_node(self, &input, &mut params, &mut trail)
    }

    fn resolve_node<'a>(
        node: &'a RouteNode<I>,
        input: &[&str],
        params: &mut Vec<(String, String)>,
        trail: &mut Vec<&'a str>,
    ) -> Option<RouteMatch<'a, I>> {
        if input.len() < node.segments.len() {
            return None;
        }

        let mut bound = 0;
        for (segment, part) in node.segments.iter().zip(input.iter()) {
            match segment {
                Segment::Static(literal) => {
                    if literal != part {
                        Self::release(params, bound);
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.push((name.clone(), (*part).to_string()));
                    bound += 1;
                }
            }
        }
        trail.push(&node.pattern);

        let rest = &input[node.segments.len()..];
        if rest.is_empty() {
            let route = joined(trail);
            return Some(match node.index {
                Some(ref payload) => RouteMatch::Index {
                    node,
                    payload,
                    route,
                    params: params.clone(),
                },
                None => RouteMatch::Route {
                    node,
                    route,
                    params: params.clone(),
                },
            });
        }

        for child in &node.children {
            if let Some(matched) = Self::resolve_node(child, rest, params, trail) {
                return Some(matched);
            }
        }

        trail.pop();
        Self::release(params, bound);
        None
    }

    fn release(params: &mut Vec<(String, String)>, bound: usize) {
        for _ in 0..bound {
            params.pop();
        }
    }

    /// Full patterns of every node, root first, children in priority order
    ///
    /// # Example
    /// ```
    /// use compass_router::RouteNode;
    ///
    /// let tree: RouteNode<()> = RouteNode::new("/app")
    ///     .child(RouteNode::new("inbox"));
    /// assert_eq!(tree.paths(), vec!["/app", "/app/inbox"]);
    /// ```
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut trail = Vec::new();
        self.collect_paths(&mut trail, &mut out);
        out
    }

    fn collect_paths<'a>(&'a self, trail: &mut Vec<&'a str>, out: &mut Vec<String>) {
        trail.push(&self.pattern);
        out.push(joined(trail));
        for child in &self.children {
            child.collect_paths(trail, out);
        }
        trail.pop();
    }
}

fn joined(trail: &[&str]) -> String {
    let mut out = String::new();
    for part in trail {
        let part = part.trim_matches('/');
        if !part.is_empty() {
            out.push('/');
            out.push_str(part);
        }
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Route match result
#[derive(Debug)]
pub enum RouteMatch<'a, I> {
    /// Pathname consumed at a node without an index payload
    Route {
        /// The matched node
        node: &'a RouteNode<I>,
        /// Full pattern of the matched node, e.g. `/app/folders/:folderId`
        route: String,
        /// Captured parameters as (name, value) pairs
        params: Vec<(String, String)>,
    },
    /// Pathname ended exactly at a node carrying an index payload
    Index {
        /// The matched node
        node: &'a RouteNode<I>,
        /// The node's index payload
        payload: &'a I,
        /// Full pattern of the matched node
        route: String,
        /// Captured parameters as (name, value) pairs
        params: Vec<(String, String)>,
    },
}

impl<'a, I> RouteMatch<'a, I> {
    /// The matched node
    pub fn node(&self) -> &'a RouteNode<I> {
        match *self {
            RouteMatch::Route { node, .. } | RouteMatch::Index { node, .. } => node,
        }
    }

    /// Full pattern of the matched node
    pub fn route(&self) -> &str {
        match self {
            RouteMatch::Route { route, .. } | RouteMatch::Index { route, .. } => route,
        }
    }

    /// Captured parameters as (name, value) pairs
    pub fn params(&self) -> &[(String, String)] {
        match self {
            RouteMatch::Route { params, .. } | RouteMatch::Index { params, .. } => params,
        }
    }

    /// Get params as HashMap for convenient access
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params().iter().cloned().collect()
    }

    /// Whether this match must be answered by an index rule
    pub fn is_index(&self) -> bool {
        matches!(self, RouteMatch::Index { .. })
    }
}
