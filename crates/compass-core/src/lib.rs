//! compass-core: Workspace navigation core
//!
//! The route-resolution and redirect model of a team workspace client:
//! which nested view renders for a pathname, and where an indexed (parent)
//! path redirects, given the user's team context.
//!
//! The route table is constant data built once by
//! [`build_workspace_routes`]; resolution is pure over the per-event
//! [`NavigationContext`]; the rendering framework, state store and
//! membership backend stay on the far side of the [`Navigate`], [`View`]
//! and [`InviteSink`] seams.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod invite;
pub mod navigator;
pub mod paths;
pub mod redirect;
pub mod routes;
pub mod team;
pub mod view;

// Re-exports
pub use context::NavigationContext;
pub use error::{Error, Result};
pub use invite::{submit_invite, FieldError, InviteError, InviteRequest, InviteSink};
pub use navigator::{resolve_navigation, NavigationOutcome, Navigator, MAX_REDIRECT_HOPS};
pub use redirect::{
    current_base_path, redirect_to_personal, redirect_to_personal_entries,
    redirect_to_team_entries, resolve_workspace_base_path, IndexRedirect, Navigate,
};
pub use routes::{build_workspace_routes, TEAM_ID_PARAM};
pub use team::{is_public_team, Team, Visibility};
pub use view::{require_auth, view_fn, Rendered, RequireAuth, View, ViewFn, ViewTable};
