//! Renderable views and the authentication gate
//!
//! Views are opaque to the route table; they hang off matched routes through
//! a registry. The gate is a plain decorator: wrapping a view yields another
//! view, and the table never special-cases it.

use std::collections::HashMap;

use crate::context::NavigationContext;

/// What rendering produced: content, or a redirect
///
/// The gate's contract is that a navigation either passes through to content
/// or is redirected elsewhere; nothing in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// The view's content
    Content(String),
    /// Navigate away instead of rendering
    Redirect(String),
}

/// A renderable unit
pub trait View {
    /// Render for the navigation event described by `ctx`
    fn render(&self, ctx: &NavigationContext) -> Rendered;
}

/// Leaf view backed by a closure, built with [`view_fn`]
pub struct ViewFn<F>(F);

/// Make a view out of a render closure
///
/// # Example
/// ```
/// use compass_core::{view_fn, NavigationContext, Rendered, View};
///
/// let entries = view_fn(|_: &NavigationContext| Rendered::Content("entries".to_string()));
/// assert_eq!(
///     entries.render(&NavigationContext::new("/workspace/personal/entries")),
///     Rendered::Content("entries".to_string())
/// );
/// ```
pub fn view_fn<F>(f: F) -> ViewFn<F>
where
    F: Fn(&NavigationContext) -> Rendered,
{
    ViewFn(f)
}

impl<F> View for ViewFn<F>
where
    F: Fn(&NavigationContext) -> Rendered,
{
    fn render(&self, ctx: &NavigationContext) -> Rendered {
        (self.0)(ctx)
    }
}

/// Auth-gated view returned by [`require_auth`]
pub struct RequireAuth<V, F> {
    inner: V,
    condition: F,
    login_path: String,
}

/// Wrap a renderable so navigation redirects to `login_path` unless
/// `condition` holds for the event's context
///
/// Returns a new renderable; callers decorate the views they hang off gated
/// branches rather than teaching the route table about authentication.
///
/// # Example
/// ```
/// use compass_core::{require_auth, view_fn, NavigationContext, Rendered, View};
///
/// let gated = require_auth(
///     view_fn(|_: &NavigationContext| Rendered::Content("workspace".to_string())),
///     |_: &NavigationContext| false,
///     "/login",
/// );
/// assert_eq!(
///     gated.render(&NavigationContext::new("/workspace")),
///     Rendered::Redirect("/login".to_string())
/// );
/// ```
pub fn require_auth<V, F>(inner: V, condition: F, login_path: impl Into<String>) -> RequireAuth<V, F>
where
    V: View,
    F: Fn(&NavigationContext) -> bool,
{
    RequireAuth {
        inner,
        condition,
        login_path: login_path.into(),
    }
}

impl<V, F> View for RequireAuth<V, F>
where
    V: View,
    F: Fn(&NavigationContext) -> bool,
{
    fn render(&self, ctx: &NavigationContext) -> Rendered {
        if (self.condition)(ctx) {
            self.inner.render(ctx)
        } else {
            tracing::debug!(path = %ctx.pathname(), "navigation gated; redirecting to login");
            Rendered::Redirect(self.login_path.clone())
        }
    }
}

/// Views keyed by full route pattern
///
/// Dynamic render targets live next to the route table rather than inside
/// it, keeping the tree constant data.
#[derive(Default)]
pub struct ViewTable {
    views: HashMap<String, Box<dyn View>>,
}

impl ViewTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the view for a full route pattern
    pub fn register(&mut self, route: impl Into<String>, view: impl View + 'static) {
        self.views.insert(route.into(), Box::new(view));
    }

    /// Render the view registered for `route`, if any
    pub fn render(&self, route: &str, ctx: &NavigationContext) -> Option<Rendered> {
        self.views.get(route).map(|view| view.render(ctx))
    }
}
