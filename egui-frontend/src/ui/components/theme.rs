//! # Theme Configuration
//!
//! Centralized color configuration for the barber booking app. All visual
//! styling should pull from these structures so light and dark mode stay
//! consistent everywhere.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::Theme;
//!
//! let theme = Theme::for_dark_mode(false);
//! let color = theme.accents.primary;
//! ```

use eframe::egui::Color32;
use shared::ServiceAccent;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background and container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
    /// Accent colors for service cards, buttons and badges
    pub accents: AccentColors,
    /// Floating tab bar colors
    pub tab_bar: TabBarColors,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Screen background
    pub background: Color32,
    /// Card and container fill
    pub card: Color32,
    /// Card drop shadow
    pub card_shadow: Color32,
    /// Input and card borders
    pub border: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Primary text color (main content)
    pub primary: Color32,
    /// Secondary text color (descriptions, captions)
    pub secondary: Color32,
    /// Text drawn on top of accent fills
    pub on_accent: Color32,
}

/// Accent palette carried over from the original app styling
#[derive(Debug, Clone)]
pub struct AccentColors {
    pub primary: Color32,
    pub highlight: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub danger: Color32,
}

/// Floating tab bar colors and background treatment
#[derive(Debug, Clone)]
pub struct TabBarColors {
    /// Bar fill; translucent in light mode (stand-in for the original blur
    /// effect), opaque in dark mode
    pub background: Color32,
    /// Sliding highlight block behind the active tab
    pub indicator: Color32,
    /// Icon/label color on the active tab
    pub active_foreground: Color32,
    /// Icon/label color on inactive tabs
    pub inactive_foreground: Color32,
}

impl Theme {
    pub fn for_dark_mode(dark: bool) -> Theme {
        if dark {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    pub fn light() -> Theme {
        Theme {
            layout: LayoutColors {
                background: Color32::from_rgb(242, 242, 247),
                card: Color32::WHITE,
                card_shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 25),
                border: Color32::from_rgb(216, 216, 220),
            },
            typography: TypographyColors {
                primary: Color32::from_rgb(28, 28, 30),
                secondary: Color32::from_rgb(110, 110, 115),
                on_accent: Color32::WHITE,
            },
            accents: AccentColors {
                primary: Color32::from_rgb(0, 123, 255),
                highlight: Color32::from_rgb(255, 149, 0),
                accent: Color32::from_rgb(175, 82, 222),
                success: Color32::from_rgb(52, 199, 89),
                danger: Color32::from_rgb(220, 50, 50),
            },
            tab_bar: TabBarColors {
                // Translucent white so the content scrolls through beneath
                background: Color32::from_rgba_unmultiplied(255, 255, 255, 230),
                indicator: Color32::from_rgb(0, 123, 255),
                active_foreground: Color32::WHITE,
                inactive_foreground: Color32::from_rgb(60, 60, 65),
            },
        }
    }

    pub fn dark() -> Theme {
        Theme {
            layout: LayoutColors {
                background: Color32::from_rgb(18, 18, 20),
                card: Color32::from_rgb(32, 32, 36),
                card_shadow: Color32::from_rgba_unmultiplied(0, 0, 0, 90),
                border: Color32::from_rgb(58, 58, 62),
            },
            typography: TypographyColors {
                primary: Color32::from_rgb(235, 235, 240),
                secondary: Color32::from_rgb(152, 152, 158),
                on_accent: Color32::WHITE,
            },
            accents: AccentColors {
                primary: Color32::from_rgb(10, 132, 255),
                highlight: Color32::from_rgb(255, 159, 10),
                accent: Color32::from_rgb(191, 90, 242),
                success: Color32::from_rgb(48, 209, 88),
                danger: Color32::from_rgb(255, 99, 88),
            },
            tab_bar: TabBarColors {
                // Opaque card fill in dark mode, matching the original's
                // no-blur fallback treatment
                background: Color32::from_rgb(32, 32, 36),
                indicator: Color32::from_rgb(10, 132, 255),
                active_foreground: Color32::WHITE,
                inactive_foreground: Color32::from_rgb(190, 190, 196),
            },
        }
    }

    /// Concrete color for a service card's accent slot.
    pub fn service_accent(&self, accent: ServiceAccent) -> Color32 {
        match accent {
            ServiceAccent::Primary => self.accents.primary,
            ServiceAccent::Highlight => self.accents.highlight,
            ServiceAccent::Accent => self.accents.accent,
            ServiceAccent::Success => self.accents.success,
        }
    }
}
