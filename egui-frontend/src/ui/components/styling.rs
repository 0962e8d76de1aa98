//! # Styling Module
//!
//! Global egui style configuration for the barber booking app.
//!
//! ## Key Functions:
//! - `setup_app_style()` - Configure global egui styling from the active theme
//!
//! ## Purpose:
//! Applies the theme's background, text sizes, rounding and spacing once per
//! frame so every screen renders with a consistent look in both light and
//! dark mode.

use eframe::egui;

use crate::ui::components::theme::Theme;

/// Setup application-wide styling for the given theme
pub fn setup_app_style(ctx: &egui::Context, theme: &Theme) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.dark_mode = theme.layout.background.r() < 128;
        style.visuals.panel_fill = theme.layout.background;
        style.visuals.window_fill = theme.layout.card;
        style.visuals.button_frame = true;

        // Text edit backgrounds; in egui 0.28 these come from extreme_bg_color
        style.visuals.extreme_bg_color = theme.layout.card;
        style.visuals.override_text_color = Some(theme.typography.primary);

        // Text sizes tuned for a phone-shaped window
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(16.0, egui::FontFamily::Proportional),
        );

        // Rounded corners and comfortable touch-ish padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}
