//! # Tab Indicator Controller
//!
//! This module contains the state and animation logic behind the floating
//! tab bar: mapping the current navigation path to an active tab and driving
//! the highlight indicator toward it with a spring.
//!
//! ## Key Types:
//! - `TabDescriptor` - Static configuration for one navigable tab
//! - `TabBarController` - Owns the active-index derivation and the animated
//!   indicator position
//! - `IndicatorState` - Observable settle/transition state
//!
//! ## Data Flow:
//! Pressing a tab never touches the indicator directly. The press triggers
//! navigation, navigation changes the current path, and the changed path is
//! reported back through `on_location_changed()`, which retargets the
//! spring. Rendering then reads the interpolated position once per frame
//! until the spring settles.

use log::debug;
use thiserror::Error;

/// Spring constants matching the reference feel (mass 1). Slightly
/// overdamped, so the indicator never overshoots the target slot.
const STIFFNESS: f32 = 90.0;
const DAMPING: f32 = 20.0;

/// Rest thresholds in index-space; once both are met the spring snaps to
/// its target and stops.
const REST_DELTA: f32 = 0.01;
const REST_SPEED: f32 = 0.05;

/// Frame deltas above this are clamped so a stalled frame clock cannot
/// destabilize the integration.
const MAX_DT: f32 = 0.05;

/// Static configuration entry for one navigable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Token tested against the current path (substring match, not exact
    /// route equality, so "/home/detail" still lights the home tab)
    pub match_key: String,
    /// Route pushed when the tab is pressed
    pub route: String,
    /// Icon glyph, presentation only
    pub icon: String,
    /// Label text, presentation only
    pub label: String,
}

impl TabDescriptor {
    pub fn new(match_key: &str, route: &str, icon: &str, label: &str) -> Self {
        TabDescriptor {
            match_key: match_key.to_string(),
            route: route.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
        }
    }
}

/// Configuration errors are fatal at construction; they are programming
/// errors, not recoverable runtime conditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabBarConfigError {
    #[error("tab bar requires at least one tab")]
    NoTabs,
    #[error("tab bar container width must be positive (got {0})")]
    NonPositiveWidth(f32),
}

/// Where the indicator is in its settle/transition cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Resting exactly on a tab slot
    Settled(usize),
    /// Converging from one slot toward another
    Transitioning { from: usize, to: usize },
}

/// Damped spring in index-space. Integrated with semi-implicit Euler, which
/// is stable for these constants at any clamped frame delta.
#[derive(Debug, Clone, Copy)]
struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    fn resting_at(value: f32) -> Self {
        Spring {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    fn tick(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DT);
        let displacement = self.value - self.target;
        let acceleration = -STIFFNESS * displacement - DAMPING * self.velocity;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.snap();
        }
    }
}

/// Owns the mapping from the current path to an active tab index and the
/// animated indicator position that chases it.
#[derive(Debug)]
pub struct TabBarController {
    tabs: Vec<TabDescriptor>,
    spring: Spring,
    /// Index of the last tab a path actually matched. While the path
    /// matches no tab the indicator stays frozen here.
    target_index: usize,
    /// Where the current (or last) transition started, for state reporting
    transition_from: usize,
    /// Reduced-motion fallback: retargets become instantaneous snaps
    snap_only: bool,
}

impl TabBarController {
    /// Create a controller settled on whichever tab matches
    /// `initial_location` (tab 0 when none matches). No animation plays for
    /// the initial placement.
    pub fn new(
        tabs: Vec<TabDescriptor>,
        initial_location: &str,
    ) -> Result<Self, TabBarConfigError> {
        if tabs.is_empty() {
            return Err(TabBarConfigError::NoTabs);
        }

        let mut controller = TabBarController {
            tabs,
            spring: Spring::resting_at(0.0),
            target_index: 0,
            transition_from: 0,
            snap_only: false,
        };

        let initial = controller
            .active_index(initial_location)
            .unwrap_or(0);
        controller.spring = Spring::resting_at(initial as f32);
        controller.target_index = initial;
        controller.transition_from = initial;
        Ok(controller)
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Index of the first tab whose match key occurs in `location`, or
    /// `None` when the location belongs to no tab. First match in list
    /// order wins; there is no scoring.
    pub fn active_index(&self, location: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| location.contains(tab.match_key.as_str()))
    }

    /// Index the indicator is currently converging toward (or resting on).
    /// This is also the tab drawn as active, which keeps the last matched
    /// tab lit while the path matches nothing.
    pub fn active_target(&self) -> usize {
        self.target_index
    }

    /// Notification from the navigation collaborator that the current path
    /// changed. Retargets the indicator when the newly derived index
    /// differs; an unmatched path leaves the indicator where it is.
    pub fn on_location_changed(&mut self, location: &str) {
        match self.active_index(location) {
            Some(index) => self.retarget(index),
            None => {
                debug!("tab bar: no tab matches '{}', indicator stays put", location);
            }
        }
    }

    fn retarget(&mut self, index: usize) {
        if index == self.target_index {
            return;
        }

        debug!(
            "tab bar: retargeting indicator {} -> {}",
            self.target_index, index
        );
        // The spring keeps its current value and velocity, so a retarget
        // mid-flight eases on from wherever the indicator is right now.
        self.transition_from = self.target_index;
        self.target_index = index;
        self.spring.target = index as f32;
        if self.snap_only {
            self.spring.snap();
        }
    }

    /// Advance the animation by one frame. Returns true while a transition
    /// is still in flight, i.e. while the caller should keep scheduling
    /// frames. Settled indicators cost nothing.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.spring.is_settled() {
            return false;
        }
        self.spring.tick(dt);
        !self.spring.is_settled()
    }

    /// Current indicator position in index-space.
    pub fn position(&self) -> f32 {
        self.spring.value
    }

    /// Horizontal pixel offset of the indicator within a bar of
    /// `container_width`: position × one tab's width.
    pub fn pixel_offset(&self, container_width: f32) -> f32 {
        self.position() * (container_width / self.tabs.len() as f32)
    }

    pub fn state(&self) -> IndicatorState {
        if self.spring.is_settled() {
            IndicatorState::Settled(self.target_index)
        } else {
            IndicatorState::Transitioning {
                from: self.transition_from,
                to: self.target_index,
            }
        }
    }

    /// Degrade to instantaneous snaps (reduced motion / no frame clock).
    pub fn set_snap_only(&mut self, snap_only: bool) {
        self.snap_only = snap_only;
        if snap_only {
            self.spring.snap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("home", "/home", "🏠", "Home"),
            TabDescriptor::new("booking", "/booking", "✂", "Book"),
            TabDescriptor::new("profile", "/profile", "👤", "Profile"),
        ]
    }

    /// Tick until settled, returning (frames used, max position seen).
    fn run_to_rest(controller: &mut TabBarController, max_frames: usize) -> (usize, f32) {
        let mut max_position = controller.position();
        for frame in 0..max_frames {
            if !controller.tick(FRAME) {
                return (frame, max_position);
            }
            max_position = max_position.max(controller.position());
        }
        panic!("indicator did not settle within {} frames", max_frames);
    }

    #[test]
    fn test_empty_tabs_rejected() {
        assert_eq!(
            TabBarController::new(vec![], "/home").unwrap_err(),
            TabBarConfigError::NoTabs
        );
    }

    #[test]
    fn test_active_index_first_match_wins() {
        let controller = TabBarController::new(tabs(), "/home").unwrap();
        assert_eq!(controller.active_index("/home"), Some(0));
        assert_eq!(controller.active_index("/booking"), Some(1));
        assert_eq!(controller.active_index("/profile"), Some(2));
        assert_eq!(controller.active_index("/settings"), None);

        // Substring semantics: nested paths still match their tab.
        assert_eq!(controller.active_index("/home/services/3"), Some(0));

        // Overlapping keys resolve by list order.
        let overlapping = vec![
            TabDescriptor::new("book", "/book", "a", "A"),
            TabDescriptor::new("booking", "/booking", "b", "B"),
        ];
        let controller = TabBarController::new(overlapping, "/booking").unwrap();
        assert_eq!(controller.active_index("/booking"), Some(0));
    }

    #[test]
    fn test_initial_placement_plays_no_animation() {
        let mut controller = TabBarController::new(tabs(), "/home").unwrap();
        assert_eq!(controller.position(), 0.0);
        assert_eq!(controller.state(), IndicatorState::Settled(0));
        assert!(!controller.tick(FRAME));

        // Unmatched initial location falls back to tab 0, also settled.
        let controller = TabBarController::new(tabs(), "/whatever").unwrap();
        assert_eq!(controller.position(), 0.0);
        assert_eq!(controller.state(), IndicatorState::Settled(0));

        // Matched non-zero initial location starts there directly.
        let controller = TabBarController::new(tabs(), "/profile").unwrap();
        assert_eq!(controller.position(), 2.0);
        assert_eq!(controller.state(), IndicatorState::Settled(2));
    }

    #[test]
    fn test_location_change_transitions_and_settles() {
        let mut controller = TabBarController::new(tabs(), "/home").unwrap();
        controller.on_location_changed("/booking");
        assert_eq!(
            controller.state(),
            IndicatorState::Transitioning { from: 0, to: 1 }
        );

        let (frames, max_position) = run_to_rest(&mut controller, 120);
        assert_eq!(controller.position(), 1.0);
        assert_eq!(controller.state(), IndicatorState::Settled(1));
        // Overdamped spring: converges without overshooting the slot...
        assert!(max_position <= 1.0 + 1e-3, "overshoot to {}", max_position);
        // ...and within roughly a second of frames.
        assert!(frames <= 80, "took {} frames to settle", frames);
    }

    #[test]
    fn test_unmatched_location_keeps_last_position() {
        let mut controller = TabBarController::new(tabs(), "/booking").unwrap();
        assert_eq!(controller.position(), 1.0);

        controller.on_location_changed("/settings");
        assert_eq!(controller.position(), 1.0);
        assert_eq!(controller.state(), IndicatorState::Settled(1));
        assert_eq!(controller.active_target(), 1);
        assert!(!controller.tick(FRAME));
    }

    #[test]
    fn test_reselecting_active_tab_is_an_animation_no_op() {
        let mut controller = TabBarController::new(tabs(), "/booking").unwrap();
        controller.on_location_changed("/booking");
        assert_eq!(controller.state(), IndicatorState::Settled(1));
        assert!(!controller.tick(FRAME));
        assert_eq!(controller.position(), 1.0);
    }

    #[test]
    fn test_mid_flight_retarget_supersedes_smoothly() {
        let mut controller = TabBarController::new(tabs(), "/home").unwrap();
        controller.on_location_changed("/profile");

        // Let the 0 -> 2 transition get partway.
        for _ in 0..6 {
            assert!(controller.tick(FRAME));
        }
        let mid_position = controller.position();
        assert!(mid_position > 0.0 && mid_position < 2.0);

        // Supersede with a new target before settling.
        controller.on_location_changed("/booking");
        assert_eq!(
            controller.state(),
            IndicatorState::Transitioning { from: 2, to: 1 }
        );

        let (_, max_position) = run_to_rest(&mut controller, 240);
        assert_eq!(controller.position(), 1.0);
        assert_eq!(controller.state(), IndicatorState::Settled(1));
        // The indicator must never have visually reached the old target.
        assert!(
            max_position < 2.0 - REST_DELTA,
            "indicator reached {} on its way to the superseded target",
            max_position
        );
    }

    #[test]
    fn test_pixel_offset_scales_by_tab_width() {
        let controller = TabBarController::new(tabs(), "/booking").unwrap();
        assert_eq!(controller.position(), 1.0);
        assert_eq!(controller.pixel_offset(300.0), 100.0);

        let controller = TabBarController::new(tabs(), "/profile").unwrap();
        assert_eq!(controller.pixel_offset(300.0), 200.0);
    }

    #[test]
    fn test_snap_only_mode_skips_animation() {
        let mut controller = TabBarController::new(tabs(), "/home").unwrap();
        controller.set_snap_only(true);

        controller.on_location_changed("/profile");
        assert_eq!(controller.position(), 2.0);
        assert_eq!(controller.state(), IndicatorState::Settled(2));
        assert!(!controller.tick(FRAME));
    }

    #[test]
    fn test_oversized_frame_delta_is_clamped() {
        let mut controller = TabBarController::new(tabs(), "/home").unwrap();
        controller.on_location_changed("/profile");

        // A multi-second hitch must not fling the indicator past its target.
        controller.tick(5.0);
        assert!(controller.position() <= 2.0 + 1e-3);

        let mut frames = 0;
        while controller.tick(5.0) {
            frames += 1;
            assert!(frames < 1_000, "never settled under degenerate frame times");
        }
        assert_eq!(controller.position(), 2.0);
    }
}
