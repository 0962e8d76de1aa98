//! # Floating Tab Bar
//!
//! Fixed-position pill-shaped navigation bar floating above the bottom of
//! the screen, with a spring-animated highlight behind the active tab.
//!
//! ## Key Types:
//! - `FloatingTabBar` - The widget: controller + cosmetic configuration
//! - `FloatingTabBarConfig` - Width, corner radius and bottom margin
//!
//! ## Behavior:
//! The bar reports which route was pressed and nothing else; the caller is
//! responsible for performing navigation and for feeding the changed path
//! back in through `on_location_changed()`. While the indicator is moving
//! the widget requests a repaint every frame; once settled it schedules
//! nothing.

pub mod indicator;

use eframe::egui;
use log::info;

use crate::ui::components::theme::Theme;
pub use indicator::{IndicatorState, TabBarConfigError, TabBarController, TabDescriptor};

const BAR_HEIGHT: f32 = 64.0;

/// Cosmetic configuration for the floating bar
#[derive(Debug, Clone)]
pub struct FloatingTabBarConfig {
    /// Fixed bar width; `None` sizes to the screen width minus a margin
    pub container_width: Option<f32>,
    pub border_radius: f32,
    pub bottom_margin: f32,
}

impl Default for FloatingTabBarConfig {
    fn default() -> Self {
        FloatingTabBarConfig {
            container_width: None,
            border_radius: 25.0,
            bottom_margin: 20.0,
        }
    }
}

/// Floating tab bar widget
#[derive(Debug)]
pub struct FloatingTabBar {
    controller: TabBarController,
    config: FloatingTabBarConfig,
}

impl FloatingTabBar {
    pub fn new(
        tabs: Vec<TabDescriptor>,
        initial_location: &str,
        config: FloatingTabBarConfig,
    ) -> Result<Self, TabBarConfigError> {
        if let Some(width) = config.container_width {
            if width <= 0.0 {
                return Err(TabBarConfigError::NonPositiveWidth(width));
            }
        }
        let controller = TabBarController::new(tabs, initial_location)?;
        Ok(FloatingTabBar { controller, config })
    }

    /// Forwarded to the controller on every navigation change.
    pub fn on_location_changed(&mut self, location: &str) {
        self.controller.on_location_changed(location);
    }

    /// Reduced-motion fallback: indicator snaps instead of animating.
    pub fn set_snap_only(&mut self, snap_only: bool) {
        self.controller.set_snap_only(snap_only);
    }

    #[cfg(test)]
    pub fn controller(&self) -> &TabBarController {
        &self.controller
    }

    /// Render the bar as a bottom-anchored overlay. Returns the route of a
    /// pressed tab, if any; the press itself mutates no indicator state.
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<String> {
        let screen = ctx.screen_rect();
        let width = self
            .config
            .container_width
            .unwrap_or(screen.width() - 40.0)
            .max(1.0);
        let tab_width = width / self.controller.tab_count() as f32;

        // Advance the indicator; keep frames coming only while in flight.
        let dt = ctx.input(|i| i.stable_dt);
        if self.controller.tick(dt) {
            ctx.request_repaint();
        }
        let indicator_offset = self.controller.pixel_offset(width);

        let mut pressed_route = None;

        egui::Area::new(egui::Id::new("floating_tab_bar"))
            .order(egui::Order::Foreground)
            .anchor(
                egui::Align2::CENTER_BOTTOM,
                egui::vec2(0.0, -self.config.bottom_margin),
            )
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme.tab_bar.background)
                    .rounding(egui::Rounding::same(self.config.border_radius))
                    .shadow(egui::epaint::Shadow {
                        offset: egui::vec2(0.0, 4.0),
                        blur: 20.0,
                        spread: 0.0,
                        color: theme.layout.card_shadow,
                    })
                    .show(ui, |ui| {
                        let (bar_rect, _) = ui.allocate_exact_size(
                            egui::vec2(width, BAR_HEIGHT),
                            egui::Sense::hover(),
                        );

                        // Indicator first so the tab content paints above it
                        let indicator_rect = egui::Rect::from_min_size(
                            egui::pos2(bar_rect.min.x + indicator_offset, bar_rect.min.y),
                            egui::vec2(tab_width, BAR_HEIGHT),
                        );
                        ui.painter().rect_filled(
                            indicator_rect,
                            egui::Rounding::same(self.config.border_radius - 5.0),
                            theme.tab_bar.indicator,
                        );

                        let active = self.controller.active_target();
                        for (index, tab) in self.controller.tabs().iter().enumerate() {
                            let tab_rect = egui::Rect::from_min_size(
                                egui::pos2(
                                    bar_rect.min.x + index as f32 * tab_width,
                                    bar_rect.min.y,
                                ),
                                egui::vec2(tab_width, BAR_HEIGHT),
                            );
                            let response = ui.interact(
                                tab_rect,
                                ui.id().with(("tab", index)),
                                egui::Sense::click(),
                            );

                            let foreground = if index == active {
                                theme.tab_bar.active_foreground
                            } else {
                                theme.tab_bar.inactive_foreground
                            };
                            let center = tab_rect.center();
                            ui.painter().text(
                                center - egui::vec2(0.0, 10.0),
                                egui::Align2::CENTER_CENTER,
                                &tab.icon,
                                egui::FontId::new(22.0, egui::FontFamily::Proportional),
                                foreground,
                            );
                            ui.painter().text(
                                center + egui::vec2(0.0, 14.0),
                                egui::Align2::CENTER_CENTER,
                                &tab.label,
                                egui::FontId::new(12.0, egui::FontFamily::Proportional),
                                foreground,
                            );

                            if response.clicked() {
                                info!("🧭 Tab pressed: {}", tab.route);
                                pressed_route = Some(tab.route.clone());
                            }
                        }
                    });
            });

        pressed_route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("home", "/home", "🏠", "Home"),
            TabDescriptor::new("profile", "/profile", "👤", "Profile"),
        ]
    }

    #[test]
    fn test_non_positive_width_rejected() {
        let config = FloatingTabBarConfig {
            container_width: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            FloatingTabBar::new(tabs(), "/home", config).unwrap_err(),
            TabBarConfigError::NonPositiveWidth(0.0)
        );
    }

    #[test]
    fn test_default_config_accepted() {
        let bar = FloatingTabBar::new(tabs(), "/profile", FloatingTabBarConfig::default()).unwrap();
        assert_eq!(bar.controller().active_target(), 1);
        assert_eq!(bar.config.border_radius, 25.0);
        assert_eq!(bar.config.bottom_margin, 20.0);
    }
}
