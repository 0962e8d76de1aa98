//! # UI Components Module
//!
//! Reusable drawing helpers shared by the home, booking and profile screens.
//!
//! ## Key Functions:
//! - `card_frame()` - Card container with shadow and rounded corners
//! - `section_title()` - Bold section heading
//! - `primary_button()` - Full-width accent call-to-action button
//! - `icon_text_row()` - Icon glyph followed by a text line
//! - `status_badge()` - Small colored pill for appointment status

use eframe::egui;
use shared::AppointmentStatus;

use crate::ui::components::theme::Theme;

/// Card container frame used for services, appointments and info sections
pub fn card_frame(theme: &Theme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.layout.card)
        .rounding(egui::Rounding::same(12.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(0.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: theme.layout.card_shadow,
        })
        .inner_margin(egui::Margin::same(16.0))
}

/// Bold section heading above a group of cards
pub fn section_title(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
                .strong()
                .color(theme.typography.primary),
        )
        .selectable(false),
    );
    ui.add_space(8.0);
}

/// Full-width call-to-action button filled with the primary accent
pub fn primary_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> egui::Response {
    ui.add_sized(
        egui::vec2(ui.available_width(), 48.0),
        egui::Button::new(
            egui::RichText::new(label)
                .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                .strong()
                .color(theme.typography.on_accent),
        )
        .fill(theme.accents.primary)
        .rounding(egui::Rounding::same(12.0)),
    )
}

/// Icon glyph followed by a line of text
pub fn icon_text_row(ui: &mut egui::Ui, theme: &Theme, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon).color(theme.accents.primary));
        ui.label(egui::RichText::new(text).color(theme.typography.primary));
    });
}

/// Small colored pill showing an appointment's status
pub fn status_badge(ui: &mut egui::Ui, theme: &Theme, status: AppointmentStatus) {
    let (fill, label) = match status {
        AppointmentStatus::Confirmed => (theme.accents.success, "Confirmed"),
        AppointmentStatus::Completed => (theme.typography.secondary, "Completed"),
    };
    egui::Frame::none()
        .fill(fill)
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(10.0, 3.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(label)
                    .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(theme.typography.on_accent),
            );
        });
}
