//! compass-wasm: Workspace navigation for the browser
//!
//! Exposes the workspace route table and redirect resolver to a JS host:
//! the client asks `resolve` what to do with a pathname and either renders
//! the matched route or replaces the location with the computed target.

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use compass_core::{build_workspace_routes, NavigationOutcome, Team, Visibility};
