//! # Navigation Module
//!
//! Stack-based navigation state for the app's three routes.
//!
//! ## Key Functions:
//! - `current_path()` - The location the rest of the UI renders against
//! - `push()` - Navigate to a route
//! - `back()` - Pop back to the previous route
//!
//! ## Purpose:
//! The navigation stack is the single source of truth for "where the user
//! is". The floating tab bar never mutates it directly from its animation
//! path; it only observes `current_path()` and asks for pushes.

use log::info;

/// Navigation history. The bottom entry is the launch route and is never
/// popped.
pub struct NavigationState {
    stack: Vec<String>,
}

impl NavigationState {
    pub fn new(initial_route: &str) -> Self {
        NavigationState {
            stack: vec![initial_route.to_string()],
        }
    }

    /// The path the app is currently on.
    pub fn current_path(&self) -> &str {
        self.stack.last().map(String::as_str).unwrap_or("/")
    }

    /// Navigate to `route`. Re-pushing the current route leaves the stack
    /// unchanged (the press still happened, the location just didn't move).
    pub fn push(&mut self, route: &str) {
        if self.current_path() == route {
            info!("🧭 Already on {}, navigation is a no-op", route);
            return;
        }
        info!("🧭 Navigating to {}", route);
        self.stack.push(route.to_string());
    }

    /// Pop back to the previous route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        info!("🧭 Navigated back to {}", self.current_path());
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut nav = NavigationState::new("/home");
        assert_eq!(nav.current_path(), "/home");
        assert!(!nav.can_go_back());

        nav.push("/booking");
        assert_eq!(nav.current_path(), "/booking");
        assert!(nav.can_go_back());

        assert!(nav.back());
        assert_eq!(nav.current_path(), "/home");
        assert!(!nav.back());
        assert_eq!(nav.current_path(), "/home");
    }

    #[test]
    fn test_pushing_current_route_is_a_no_op() {
        let mut nav = NavigationState::new("/home");
        nav.push("/home");
        assert!(!nav.can_go_back());

        nav.push("/profile");
        nav.push("/profile");
        assert_eq!(nav.current_path(), "/profile");
        assert!(nav.back());
        assert_eq!(nav.current_path(), "/home");
    }
}
