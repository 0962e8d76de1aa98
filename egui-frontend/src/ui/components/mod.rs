//! # UI Components Module
//!
//! This module organizes all UI components for the barber booking app.
//!
//! ## Module Organization:
//! - `tab_bar` - Floating tab bar with the animated active-tab indicator
//! - `theme` - Light/dark color configuration
//! - `styling` - Global egui style setup
//! - `ui_components` - Reusable drawing helpers (cards, buttons, badges)
//! - `home` - Home screen with the service catalogue
//! - `booking` - Booking form and confirmation dialog
//! - `profile` - Mock profile, appointments and appearance settings

pub mod booking;
pub mod home;
pub mod profile;
pub mod styling;
pub mod tab_bar;
pub mod theme;
pub mod ui_components;

pub use styling::setup_app_style;
pub use theme::Theme;
