//! Route table construction and resolution.
//!
//! A [`RouteTable`] is an ordered list of path-pattern/view-factory pairs,
//! built once at startup. [`RouteTable::resolve`] is a pure function from a
//! location string to a [`RenderResult`]; [`Router`] wraps a table and keeps
//! the currently committed result, running view lifecycle hooks across
//! navigations.

use crate::error::{DuplicateRouteSnafu, Result};
use crate::view::{View, ViewFactory};
use snafu::ensure;

/// A configured association between a path pattern and a view factory.
pub struct Route {
    path: String,
    factory: ViewFactory,
}

impl Route {
    pub fn new(path: impl Into<String>, factory: ViewFactory) -> Self {
        Self {
            path: path.into(),
            factory,
        }
    }

    /// The path pattern this route matches.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn instantiate(&self) -> Box<dyn View> {
        (self.factory)()
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({})", self.path)
    }
}

/// The outcome of resolving a location against a route table.
///
/// `NotFound` is a normal outcome, not an error. The caller decides what to
/// render for it.
pub enum RenderResult {
    Matched { path: String, view: Box<dyn View> },
    NotFound,
}

impl RenderResult {
    /// The matched path pattern, if any.
    pub fn matched_path(&self) -> Option<&str> {
        match self {
            RenderResult::Matched { path, .. } => Some(path),
            RenderResult::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderResult::NotFound)
    }
}

impl std::fmt::Debug for RenderResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderResult::Matched { path, .. } => write!(f, "Matched({path})"),
            RenderResult::NotFound => write!(f, "NotFound"),
        }
    }
}

/// The complete, static set of routes for the application.
///
/// Insertion order is significant: resolution scans the table in order and
/// the first match wins. With exact-string matching no two distinct entries
/// can overlap, but the scan order stays well defined should matching ever
/// grow parameterized segments.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Match `location` against the table.
    ///
    /// Pure and total: any string yields either the first matching route's
    /// freshly instantiated view or `NotFound`. Never an error.
    pub fn resolve(&self, location: &str) -> RenderResult {
        for route in &self.routes {
            if route.path == location {
                tracing::debug!(%location, "route matched");
                return RenderResult::Matched {
                    path: route.path.clone(),
                    view: route.instantiate(),
                };
            }
        }
        tracing::debug!(%location, "no route matched");
        RenderResult::NotFound
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Configured path patterns, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.path())
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes.iter()).finish()
    }
}

/// Builder for [`RouteTable`].
///
/// Duplicate path patterns are a configuration error and are rejected by
/// [`build`](Self::build), before any resolution can occur.
#[derive(Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    /// Register a route. Order of registration is match order.
    pub fn route<V, F>(mut self, path: impl Into<String>, factory: F) -> Self
    where
        V: View + 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.routes
            .push(Route::new(path, Box::new(move || Box::new(factory()))));
        self
    }

    pub fn build(self) -> Result<RouteTable> {
        for (i, route) in self.routes.iter().enumerate() {
            ensure!(
                !self.routes[..i].iter().any(|r| r.path == route.path),
                DuplicateRouteSnafu {
                    path: route.path.clone()
                }
            );
        }
        Ok(RouteTable {
            routes: self.routes,
        })
    }
}

/// Holds a route table plus the currently committed [`RenderResult`].
///
/// The only state transition is [`sync`](Self::sync): the outgoing view gets
/// `on_exit`, the location is re-resolved, the incoming view gets `on_enter`,
/// and the new result replaces the old one.
pub struct Router {
    table: RouteTable,
    active: RenderResult,
}

impl Router {
    /// Create a router. Nothing is committed until the first `sync`.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            active: RenderResult::NotFound,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The last committed result.
    pub fn active(&self) -> &RenderResult {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut RenderResult {
        &mut self.active
    }

    /// The active view, if the last committed result was a match.
    pub fn active_view(&mut self) -> Option<&mut dyn View> {
        match &mut self.active {
            RenderResult::Matched { view, .. } => Some(view.as_mut()),
            RenderResult::NotFound => None,
        }
    }

    /// Re-resolve `location` and commit the result, replacing the prior one.
    pub fn sync(&mut self, location: &str) -> &RenderResult {
        if let RenderResult::Matched { view, .. } = &mut self.active {
            view.on_exit();
        }
        let mut next = self.table.resolve(location);
        if let RenderResult::Matched { path, view } = &mut next {
            view.on_enter();
            tracing::info!(%location, path = %path, view = %view.title(), "committed");
        } else {
            tracing::info!(%location, "committed not-found");
        }
        self.active = next;
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Marker {
        name: &'static str,
    }

    impl View for Marker {
        fn title(&self) -> &str {
            self.name
        }

        fn render(&mut self, _frame: &mut ratatui::Frame, _area: ratatui::layout::Rect) {}
    }

    fn table() -> RouteTable {
        RouteTable::builder()
            .route("/", || Marker { name: "index" })
            .route("/donor-dashboard", || Marker {
                name: "donor-dashboard",
            })
            .route("/hospital-dashboard", || Marker {
                name: "hospital-dashboard",
            })
            .route("/sos", || Marker { name: "sos" })
            .build()
            .expect("table builds")
    }

    fn matched_title(result: &RenderResult) -> Option<&str> {
        match result {
            RenderResult::Matched { view, .. } => Some(view.title()),
            RenderResult::NotFound => None,
        }
    }

    #[test]
    fn each_configured_path_resolves_to_its_own_view() {
        let table = table();
        for (path, name) in [
            ("/", "index"),
            ("/donor-dashboard", "donor-dashboard"),
            ("/hospital-dashboard", "hospital-dashboard"),
            ("/sos", "sos"),
        ] {
            let result = table.resolve(path);
            assert_eq!(result.matched_path(), Some(path));
            assert_eq!(matched_title(&result), Some(name));
        }
    }

    #[test]
    fn unmatched_locations_yield_not_found() {
        let table = table();
        for location in [
            "/unknown",
            "",
            "/donor-dashboard/extra",
            "/hospitaldashboard",
            "/SOS",
        ] {
            assert!(
                table.resolve(location).is_not_found(),
                "expected NotFound for {location:?}"
            );
        }
    }

    #[test]
    fn duplicate_pattern_is_rejected_at_build_time() {
        let result = RouteTable::builder()
            .route("/sos", || Marker { name: "a" })
            .route("/sos", || Marker { name: "b" })
            .build();
        match result {
            Err(crate::Error::DuplicateRoute { path }) => assert_eq!(path, "/sos"),
            other => panic!("expected DuplicateRoute, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let table = table();
        let first = table.resolve("/sos");
        let second = table.resolve("/sos");
        assert_eq!(first.matched_path(), second.matched_path());
        assert_eq!(matched_title(&first), matched_title(&second));
        assert!(table.resolve("/nope").is_not_found());
        assert!(table.resolve("/nope").is_not_found());
    }

    #[test]
    fn router_commits_each_navigation_in_order() {
        let mut router = Router::new(table());
        assert!(router.active().is_not_found());

        let committed: Vec<_> = ["/", "/sos", "/donor-dashboard"]
            .into_iter()
            .map(|location| {
                router
                    .sync(location)
                    .matched_path()
                    .map(str::to_owned)
                    .expect("configured path matches")
            })
            .collect();
        assert_eq!(committed, ["/", "/sos", "/donor-dashboard"]);
        assert_eq!(router.active().matched_path(), Some("/donor-dashboard"));
    }

    struct Probe {
        enters: Arc<AtomicUsize>,
        exits: Arc<AtomicUsize>,
    }

    impl View for Probe {
        fn on_enter(&mut self) {
            self.enters.fetch_add(1, Ordering::SeqCst);
        }

        fn on_exit(&mut self) {
            self.exits.fetch_add(1, Ordering::SeqCst);
        }

        fn render(&mut self, _frame: &mut ratatui::Frame, _area: ratatui::layout::Rect) {}
    }

    #[test]
    fn sync_runs_lifecycle_hooks_across_navigations() {
        let enters = Arc::new(AtomicUsize::new(0));
        let exits = Arc::new(AtomicUsize::new(0));
        let (e, x) = (enters.clone(), exits.clone());

        let table = RouteTable::builder()
            .route("/probed", move || Probe {
                enters: e.clone(),
                exits: x.clone(),
            })
            .build()
            .expect("table builds");
        let mut router = Router::new(table);

        router.sync("/probed");
        assert_eq!(enters.load(Ordering::SeqCst), 1);
        assert_eq!(exits.load(Ordering::SeqCst), 0);

        router.sync("/elsewhere");
        assert!(router.active().is_not_found());
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }
}
