//! Test doubles for the navigation contract
//!
//! A recording [`Navigator`] shared by unit and integration tests. It
//! appends every call to an in-memory log so tests can assert on the exact
//! sequence of navigation side effects a screen produced.

use parking_lot::Mutex;

use crate::navigation::{Navigator, Route};

/// A single observed navigation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// `replace` with the given route
    Replace(Route),
    /// `push` with the given route
    Push(Route),
    /// `back`
    Back,
}

/// A navigator that records calls instead of mutating a stack
#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    /// Create a navigator with an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// All observed calls, in order
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().clone()
    }

    /// Routes passed to `replace`, in order
    pub fn replaces(&self) -> Vec<Route> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                NavEvent::Replace(route) => Some(route.clone()),
                _ => None,
            })
            .collect()
    }

    /// Routes passed to `push`, in order
    pub fn pushes(&self) -> Vec<Route> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                NavEvent::Push(route) => Some(route.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recent call, if any
    pub fn last(&self) -> Option<NavEvent> {
        self.events.lock().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, route: Route) {
        self.events.lock().push(NavEvent::Replace(route));
    }

    fn push(&self, route: Route) {
        self.events.lock().push(NavEvent::Push(route));
    }

    fn back(&self) {
        self.events.lock().push(NavEvent::Back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.replace(Route::Login);
        navigator.push(Route::Register);
        navigator.back();

        assert_eq!(
            navigator.events(),
            vec![
                NavEvent::Replace(Route::Login),
                NavEvent::Push(Route::Register),
                NavEvent::Back,
            ]
        );
        assert_eq!(navigator.last(), Some(NavEvent::Back));
    }

    #[test]
    fn test_filters_by_kind() {
        let navigator = RecordingNavigator::new();
        navigator.push(Route::Register);
        navigator.replace(Route::Home);

        assert_eq!(navigator.replaces(), vec![Route::Home]);
        assert_eq!(navigator.pushes(), vec![Route::Register]);
    }
}
