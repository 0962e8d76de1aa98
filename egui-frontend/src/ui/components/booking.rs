//! # Booking Screen
//!
//! The booking form: customer details, service selection, desired slot and
//! notes. Confirming a valid form shows a local confirmation dialog; there
//! is no backend and nothing is persisted.
//!
//! ## Validation:
//! Required fields must be non-empty and a service must be selected —
//! nothing beyond that. The date picker refuses past dates, matching the
//! original form's minimum-date constraint.

use chrono::Local;
use eframe::egui;
use log::{info, warn};

use crate::ui::app_state::BarberBookingApp;
use crate::ui::components::theme::Theme;
use crate::ui::components::ui_components::{card_frame, primary_button, section_title};

impl BarberBookingApp {
    /// Render the booking screen
    pub fn render_booking_screen(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let mut go_back = false;
        let mut submit = false;

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if self.navigation.can_go_back() && ui.button("‹ Back").clicked() {
                go_back = true;
            }
            ui.heading(
                egui::RichText::new("Book Appointment")
                    .strong()
                    .color(theme.typography.primary),
            );
        });
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                // Personal information
                section_title(ui, theme, "Personal Information");
                ui.add(
                    egui::TextEdit::singleline(&mut self.booking_form.name)
                        .hint_text("Full Name *")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::singleline(&mut self.booking_form.phone)
                        .hint_text("Phone Number *")
                        .desired_width(f32::INFINITY),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut self.booking_form.address)
                        .hint_text("Address *")
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                // Service selection
                section_title(ui, theme, "Select Service");
                for service in &self.services {
                    let selected = self.booking_form.selected_service == service.id;

                    let frame = if selected {
                        card_frame(theme).stroke(egui::Stroke::new(2.0, theme.accents.primary))
                    } else {
                        card_frame(theme).stroke(egui::Stroke::new(1.0, theme.layout.border))
                    };
                    let response = frame
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    let title_color = if selected {
                                        theme.accents.primary
                                    } else {
                                        theme.typography.primary
                                    };
                                    ui.label(
                                        egui::RichText::new(&service.title)
                                            .strong()
                                            .color(title_color),
                                    );
                                    ui.label(
                                        egui::RichText::new(&service.price)
                                            .font(egui::FontId::new(
                                                13.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .color(theme.typography.secondary),
                                    );
                                });
                                if selected {
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            ui.label(
                                                egui::RichText::new("✔")
                                                    .font(egui::FontId::new(
                                                        20.0,
                                                        egui::FontFamily::Proportional,
                                                    ))
                                                    .color(theme.accents.primary),
                                            );
                                        },
                                    );
                                }
                            });
                        })
                        .response;

                    if response.interact(egui::Sense::click()).clicked() {
                        self.booking_form.selected_service = service.id.clone();
                        self.booking_form.error_message = None;
                    }
                    ui.add_space(6.0);
                }
                ui.add_space(16.0);

                // Date & time
                section_title(ui, theme, "Date & Time");
                card_frame(theme).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("📅").color(theme.accents.primary));
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.booking_form.date)
                                .id_source("booking_date"),
                        );
                    });
                    // The picker has no minimum date; clamp past picks back
                    // to today.
                    let today = Local::now().date_naive();
                    if self.booking_form.date < today {
                        self.booking_form.date = today;
                    }

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("🕐").color(theme.accents.primary));
                        ui.add(
                            egui::DragValue::new(&mut self.booking_form.hour)
                                .clamp_range(0..=23)
                                .custom_formatter(|n, _| format!("{:02}", n as u32)),
                        );
                        ui.label(":");
                        ui.add(
                            egui::DragValue::new(&mut self.booking_form.minute)
                                .clamp_range(0..=59)
                                .custom_formatter(|n, _| format!("{:02}", n as u32)),
                        );
                    });
                });
                ui.add_space(16.0);

                // Notes
                section_title(ui, theme, "Additional Notes (Optional)");
                ui.add(
                    egui::TextEdit::multiline(&mut self.booking_form.notes)
                        .hint_text("Any special requests or preferences...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(16.0);

                if let Some(error) = &self.booking_form.error_message {
                    ui.label(
                        egui::RichText::new(error)
                            .strong()
                            .color(theme.accents.danger),
                    );
                    ui.add_space(6.0);
                }

                if primary_button(ui, theme, "Confirm Booking  ✔").clicked() {
                    submit = true;
                }

                ui.add_space(100.0);
            });

        if submit {
            self.handle_booking();
        }
        if go_back {
            self.navigation.back();
        }
    }

    /// Validate the form; open the confirmation dialog or show an error.
    fn handle_booking(&mut self) {
        let request = self.booking_form.to_request();
        match request.validate() {
            Ok(()) => {
                info!("📅 Booking confirmed: {}", request.confirmation_line());
                self.booking_form.error_message = None;
                self.booking_confirmation = Some(format!(
                    "Your appointment has been scheduled for {}.",
                    request.confirmation_line()
                ));
            }
            Err(error) => {
                warn!("📋 Booking rejected: {}", error);
                self.booking_form.error_message =
                    Some("Please fill in all required fields.".to_string());
            }
        }
    }

    /// Render the booking confirmation dialog when open
    pub fn render_booking_confirmation(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some(message) = self.booking_confirmation.clone() else {
            return;
        };

        egui::Area::new(egui::Id::new("booking_confirmation_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                // Dim everything behind the dialog
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 128),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(theme.layout.card)
                            .stroke(egui::Stroke::new(2.0, theme.accents.success))
                            .rounding(egui::Rounding::same(15.0))
                            .inner_margin(egui::Margin::same(20.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(320.0, 160.0));
                                ui.set_max_size(egui::vec2(320.0, 200.0));

                                ui.vertical_centered(|ui| {
                                    ui.add_space(6.0);
                                    ui.label(
                                        egui::RichText::new("✔ Booking Confirmed!")
                                            .font(egui::FontId::new(
                                                22.0,
                                                egui::FontFamily::Proportional,
                                            ))
                                            .strong()
                                            .color(theme.accents.success),
                                    );
                                    ui.add_space(10.0);
                                    ui.label(
                                        egui::RichText::new(&message)
                                            .color(theme.typography.primary),
                                    );
                                    ui.add_space(14.0);
                                    if ui.button("OK").clicked() {
                                        self.booking_confirmation = None;
                                        self.booking_form.reset();
                                        self.navigation.back();
                                    }
                                });
                            });
                    });
                });
            });
    }
}
