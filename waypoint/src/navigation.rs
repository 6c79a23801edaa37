//! The single owner of the current navigation location.
//!
//! `NavigationState` holds the process-wide location string. It has exactly
//! one writer (whoever owns it, normally the application shell) and any
//! number of readers through [`subscribe`](NavigationState::subscribe).
//! The underlying `watch` channel carries only the latest value, so a
//! subscriber that wakes after several rapid navigations observes just the
//! newest location and stale navigations are never replayed.

use tokio::sync::watch;

pub struct NavigationState {
    tx: watch::Sender<String>,
    back_stack: Vec<String>,
    forward_stack: Vec<String>,
}

impl NavigationState {
    /// Create navigation state at the given initial location.
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _) = watch::channel(initial.into());
        Self {
            tx,
            back_stack: Vec::new(),
            forward_stack: Vec::new(),
        }
    }

    /// The current location.
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Subscribe to location changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Navigate to a new location. The current one is pushed onto the back
    /// stack and any forward history is discarded. Navigating to the current
    /// location is a no-op.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        let current = self.current();
        if current == path {
            return;
        }
        tracing::info!(from = %current, to = %path, "navigate");
        self.back_stack.push(current);
        self.forward_stack.clear();
        self.tx.send_replace(path);
    }

    /// Go back to the previous location. Returns true if there was one.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(prev) => {
                tracing::info!(to = %prev, "navigate back");
                self.forward_stack.push(self.current());
                self.tx.send_replace(prev);
                true
            }
            None => false,
        }
    }

    /// Re-visit the location undone by the last `back`. Returns true if
    /// there was one.
    pub fn forward(&mut self) -> bool {
        match self.forward_stack.pop() {
            Some(next) => {
                tracing::info!(to = %next, "navigate forward");
                self.back_stack.push(self.current());
                self.tx.send_replace(next);
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Number of locations on the back stack.
    pub fn history_len(&self) -> usize {
        self.back_stack.len()
    }

    pub fn clear_history(&mut self) {
        self.back_stack.clear();
        self.forward_stack.clear();
    }
}

impl std::fmt::Debug for NavigationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationState")
            .field("current", &*self.tx.borrow())
            .field("back", &self.back_stack)
            .field("forward", &self.forward_stack)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_initial_location() {
        let nav = NavigationState::new("/");
        assert_eq!(nav.current(), "/");
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn navigate_pushes_history_and_back_restores_it() {
        let mut nav = NavigationState::new("/");

        nav.navigate("/sos");
        nav.navigate("/donor-dashboard");
        assert_eq!(nav.current(), "/donor-dashboard");
        assert_eq!(nav.history_len(), 2);

        assert!(nav.back());
        assert_eq!(nav.current(), "/sos");
        assert!(nav.back());
        assert_eq!(nav.current(), "/");
        assert!(!nav.back());
        assert_eq!(nav.current(), "/");
    }

    #[test]
    fn forward_revisits_what_back_undid() {
        let mut nav = NavigationState::new("/");
        nav.navigate("/sos");
        assert!(nav.back());
        assert!(nav.can_go_forward());

        assert!(nav.forward());
        assert_eq!(nav.current(), "/sos");
        assert!(!nav.forward());
    }

    #[test]
    fn navigating_clears_forward_history() {
        let mut nav = NavigationState::new("/");
        nav.navigate("/sos");
        nav.back();
        nav.navigate("/hospital-dashboard");
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn self_navigation_is_a_no_op() {
        let mut nav = NavigationState::new("/sos");
        let mut rx = nav.subscribe();
        nav.navigate("/sos");
        assert_eq!(nav.history_len(), 0);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn subscribers_observe_only_the_newest_location() {
        let mut nav = NavigationState::new("/");
        let mut rx = nav.subscribe();

        nav.navigate("/sos");
        nav.navigate("/hospital-dashboard");
        nav.navigate("/donor-dashboard");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "/donor-dashboard");
        assert!(!rx.has_changed().unwrap());
    }
}
