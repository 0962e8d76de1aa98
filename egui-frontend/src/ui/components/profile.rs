//! # Profile Screen
//!
//! Mock customer profile: contact information, upcoming appointments,
//! appointment history and the appearance settings (dark mode and reduced
//! motion, which degrades the tab bar indicator to an instant snap).

use eframe::egui;
use shared::Appointment;

use crate::ui::app_state::BarberBookingApp;
use crate::ui::components::theme::Theme;
use crate::ui::components::ui_components::{card_frame, icon_text_row, section_title, status_badge};

impl BarberBookingApp {
    /// Render the profile screen
    pub fn render_profile_screen(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(16.0);

                // Profile header
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("👤")
                            .font(egui::FontId::new(64.0, egui::FontFamily::Proportional))
                            .color(theme.accents.primary),
                    );
                    ui.heading(
                        egui::RichText::new(&self.profile.name)
                            .strong()
                            .color(theme.typography.primary),
                    );
                    ui.label(
                        egui::RichText::new(&self.profile.email)
                            .color(theme.typography.secondary),
                    );
                });
                ui.add_space(20.0);

                // Contact information
                section_title(ui, theme, "Contact Information");
                card_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    icon_text_row(ui, theme, "📞", &self.profile.phone);
                    icon_text_row(ui, theme, "📍", &self.profile.address);
                });
                ui.add_space(16.0);

                // Upcoming appointments
                section_title(ui, theme, "Upcoming Appointments");
                for appointment in &self.upcoming_appointments {
                    render_appointment_card(ui, theme, appointment);
                    ui.add_space(8.0);
                }
                ui.add_space(16.0);

                // History
                section_title(ui, theme, "Appointment History");
                for appointment in &self.appointment_history {
                    render_appointment_card(ui, theme, appointment);
                    ui.add_space(8.0);
                }
                ui.add_space(16.0);

                // Appearance settings
                section_title(ui, theme, "Appearance");
                card_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.checkbox(&mut self.dark_mode, "Dark mode");
                    if ui
                        .checkbox(&mut self.reduce_motion, "Reduce motion")
                        .changed()
                    {
                        self.tab_bar.set_snap_only(self.reduce_motion);
                    }
                });

                // Clearance so the floating tab bar never covers content
                ui.add_space(100.0);
            });
    }
}

/// Draw one appointment card with its status badge
fn render_appointment_card(ui: &mut egui::Ui, theme: &Theme, appointment: &Appointment) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(&appointment.service)
                    .strong()
                    .color(theme.typography.primary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                status_badge(ui, theme, appointment.status);
            });
        });
        ui.label(
            egui::RichText::new(format!("👤 {}", appointment.barber))
                .color(theme.typography.secondary),
        );
        ui.label(
            egui::RichText::new(format!("📅 {}   🕐 {}", appointment.date, appointment.time))
                .color(theme.typography.secondary),
        );
        if let Some(address) = &appointment.address {
            ui.label(
                egui::RichText::new(format!("📍 {}", address))
                    .color(theme.typography.secondary),
            );
        }
    });
}
