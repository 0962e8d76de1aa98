//! # App Coordinator Module
//!
//! Main application update loop (implements the `eframe::App` trait).
//!
//! ## Application Flow:
//! 1. Resolve the active theme and apply global styling
//! 2. Notify the tab bar of the current path (explicit, every frame; the
//!    controller ignores notifications that change nothing)
//! 3. Render the screen the current path routes to
//! 4. Render the floating tab bar overlay and perform any navigation it
//!    requested
//! 5. Render the booking confirmation dialog when open

use eframe::egui;

use crate::ui::app_state::BarberBookingApp;
use crate::ui::components::setup_app_style;
use crate::ui::components::theme::Theme;

impl eframe::App for BarberBookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = Theme::for_dark_mode(self.dark_mode);
        setup_app_style(ctx, &theme);

        // One-way data flow: presses changed the navigation stack last
        // frame; the indicator only ever reacts to the resulting path.
        let current_path = self.navigation.current_path().to_string();
        self.tab_bar.on_location_changed(&current_path);

        egui::CentralPanel::default().show(ctx, |ui| {
            if current_path.contains("booking") {
                self.render_booking_screen(ui, &theme);
            } else if current_path.contains("profile") {
                self.render_profile_screen(ui, &theme);
            } else {
                self.render_home_screen(ui, &theme);
            }
        });

        if let Some(route) = self.tab_bar.show(ctx, &theme) {
            self.navigate_to(&route);
        }

        self.render_booking_confirmation(ctx, &theme);
    }
}
