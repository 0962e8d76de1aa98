//! # Home Screen
//!
//! Hero section, service catalogue and call-to-action. Every service card
//! and the CTA button navigate to the booking screen.

use eframe::egui;
use shared::Service;

use crate::ui::app_state::BarberBookingApp;
use crate::ui::components::theme::Theme;
use crate::ui::components::ui_components::{card_frame, primary_button, section_title};

impl BarberBookingApp {
    /// Render the home screen
    pub fn render_home_screen(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let mut open_booking = false;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(16.0);

                // Hero section
                ui.vertical_centered(|ui| {
                    let (icon_rect, _) = ui.allocate_exact_size(
                        egui::vec2(96.0, 96.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .circle_filled(icon_rect.center(), 48.0, theme.accents.primary);
                    ui.painter().text(
                        icon_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "✂",
                        egui::FontId::new(44.0, egui::FontFamily::Proportional),
                        theme.typography.on_accent,
                    );
                    ui.add_space(10.0);
                    ui.heading(
                        egui::RichText::new("Boika the Barber")
                            .strong()
                            .color(theme.typography.primary),
                    );
                    ui.label(
                        egui::RichText::new("Mobile Service")
                            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(theme.accents.primary),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(
                            "Professional grooming services delivered to your home. \
                             Book your appointment today!",
                        )
                        .color(theme.typography.secondary),
                    );
                });
                ui.add_space(24.0);

                // Services
                section_title(ui, theme, "Our Services");
                for service in &self.services {
                    if render_service_card(ui, theme, service) {
                        open_booking = true;
                    }
                    ui.add_space(10.0);
                }

                // About section
                ui.add_space(12.0);
                card_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    section_title(ui, theme, "Why Choose Us?");
                    for feature in [
                        "Licensed & Experienced Barber",
                        "Professional Equipment & Products",
                        "Flexible Scheduling",
                        "100% Satisfaction Guaranteed",
                    ] {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new("✔").color(theme.accents.success));
                            ui.label(
                                egui::RichText::new(feature).color(theme.typography.primary),
                            );
                        });
                    }
                });

                ui.add_space(16.0);
                if primary_button(ui, theme, "Book Appointment").clicked() {
                    open_booking = true;
                }

                // Clearance so the floating tab bar never covers content
                ui.add_space(100.0);
            });

        if open_booking {
            self.navigate_to("/booking");
        }
    }
}

/// Draw one pressable service card; returns true when it was clicked.
fn render_service_card(ui: &mut egui::Ui, theme: &Theme, service: &Service) -> bool {
    let response = card_frame(theme)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (icon_rect, _) =
                    ui.allocate_exact_size(egui::vec2(52.0, 52.0), egui::Sense::hover());
                let accent = theme.service_accent(service.accent);
                ui.painter().circle_filled(icon_rect.center(), 26.0, accent);
                ui.painter().text(
                    icon_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &service.icon,
                    egui::FontId::new(22.0, egui::FontFamily::Proportional),
                    theme.typography.on_accent,
                );
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&service.title)
                            .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                            .strong()
                            .color(theme.typography.primary),
                    );
                    ui.label(
                        egui::RichText::new(&service.description)
                            .font(egui::FontId::new(13.0, egui::FontFamily::Proportional))
                            .color(theme.typography.secondary),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("🕐 {}", service.duration))
                                .font(egui::FontId::new(12.0, egui::FontFamily::Proportional))
                                .color(theme.typography.secondary),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(&service.price)
                                        .font(egui::FontId::new(
                                            16.0,
                                            egui::FontFamily::Proportional,
                                        ))
                                        .strong()
                                        .color(theme.accents.primary),
                                );
                            },
                        );
                    });
                });
            });
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}
