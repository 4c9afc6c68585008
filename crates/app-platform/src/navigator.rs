//! Shell navigator backed by the in-memory stack

use parking_lot::RwLock;

use app_ui::navigation::{NavigationState, Navigator, PendingNavigation, Route};

/// A [`Navigator`] that drives a [`NavigationState`]
///
/// Screens hold it as `Arc<dyn Navigator>` and fire route changes; the
/// shell keeps a concrete handle for rendering the current route and
/// consuming transition hints. Stack mutations commit immediately, so
/// [`current_route`](Self::current_route) reflects a change as soon as the
/// screen's call returns.
#[derive(Default)]
pub struct StackNavigator {
    state: RwLock<NavigationState>,
}

impl StackNavigator {
    /// Navigator rooted at the splash route
    pub fn new() -> Self {
        Self::default()
    }

    /// The route currently on top of the stack
    pub fn current_route(&self) -> Route {
        self.state.read().current_route().clone()
    }

    /// Whether back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.state.read().can_go_back()
    }

    /// The transition hint for the shell's animation pass, if any
    pub fn pending(&self) -> Option<PendingNavigation> {
        self.state.read().pending.clone()
    }

    /// Clear the transition hint once the shell has animated it
    pub fn finish_transition(&self) {
        self.state.write().finish_navigation();
    }

    /// A snapshot of the full navigation state, for persistence
    pub fn snapshot(&self) -> NavigationState {
        self.state.read().clone()
    }
}

impl Navigator for StackNavigator {
    fn replace(&self, route: Route) {
        tracing::debug!(to = %route.to_path(), "replace");
        self.state.write().replace(route);
    }

    fn push(&self, route: Route) {
        tracing::debug!(to = %route.to_path(), "push");
        self.state.write().navigate(route);
    }

    fn back(&self) {
        let popped = self.state.write().go_back();
        tracing::debug!(popped, "back");
    }
}
