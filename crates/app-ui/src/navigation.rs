//! Navigation system for DuitKu
//!
//! This module provides a type-safe navigation model:
//! - Route definitions with paths and auth requirements
//! - A single navigation stack with push/replace/back semantics
//! - The [`Navigator`] seam screens use to emit navigation side effects
//!
//! Screens never mutate a stack directly; they hold an `Arc<dyn Navigator>`
//! and ask it to push, replace, or go back. The in-process stack-backed
//! implementation lives in the platform crate.

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Animated splash screen (entry point)
    Splash,
    /// Login screen
    Login,
    /// Create account screen
    Register,
    /// Main application destination
    Home,
}

impl Default for Route {
    fn default() -> Self {
        Route::Splash
    }
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Splash => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Home => "/home".to_string(),
        }
    }

    /// Check if this route requires an authenticated session
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Home)
    }

    /// Get a display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash => "DuitKu",
            Route::Login => "Masuk",
            Route::Register => "Daftar",
            Route::Home => "Beranda",
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// The application's navigation stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the top route
    ///
    /// The replaced entry is gone for good; back will never return to it.
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().expect("Stack should never be empty")
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Get all entries
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
    /// Fade animation (used for replace)
    Fade,
    /// None (instant)
    None,
}

/// Pending navigation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Target route
    pub route: Route,
    /// Animation type
    pub animation: NavigationAnimation,
}

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// The navigation stack
    pub stack: NavigationStack,
    /// Pending navigation (for animations)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
    /// Is navigation in progress
    #[serde(skip)]
    pub is_navigating: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Splash),
            pending: None,
            is_navigating: false,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state rooted at the splash screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.stack.current()
    }

    /// Push a route
    pub fn navigate(&mut self, route: Route) {
        self.pending = Some(PendingNavigation {
            route: route.clone(),
            animation: NavigationAnimation::Push,
        });
        self.is_navigating = true;
        self.stack.push(route);
    }

    /// Replace the current route
    pub fn replace(&mut self, route: Route) {
        self.pending = Some(PendingNavigation {
            route: route.clone(),
            animation: NavigationAnimation::Fade,
        });
        self.is_navigating = true;
        self.stack.replace(route);
    }

    /// Go back one entry (returns false when already at the root)
    pub fn go_back(&mut self) -> bool {
        if self.stack.pop() {
            self.pending = Some(PendingNavigation {
                route: self.stack.current().clone(),
                animation: NavigationAnimation::Pop,
            });
            self.is_navigating = true;
            true
        } else {
            false
        }
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    /// Mark the pending transition as finished
    pub fn finish_navigation(&mut self) {
        self.pending = None;
        self.is_navigating = false;
    }
}

// =============================================================================
// Navigator Seam
// =============================================================================

/// Navigation side effects as seen by screen state machines
///
/// Implementations are shell-owned; screens hold `Arc<dyn Navigator>` and
/// must remain agnostic of how transitions are performed.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Replace the current route (the old one is unreachable afterwards)
    fn replace(&self, route: Route);

    /// Push a route onto the stack
    fn push(&self, route: Route);

    /// Go back one entry
    fn back(&self);
}
