//! # App State Module
//!
//! Central application state for the barber booking app.
//!
//! ## Key Types:
//! - `BarberBookingApp` - Main application state struct
//! - `BookingFormState` - Everything the booking form is currently holding
//!
//! ## State Management:
//! All state lives in one struct and flows one way: tab presses and button
//! clicks push routes onto the navigation stack, and the floating tab bar's
//! indicator follows the resulting path changes. No component keeps its own
//! copy of "where the user is".

use chrono::{Local, NaiveDate, Timelike};
use log::info;
use shared::{Appointment, BookingRequest, CustomerProfile, Service};

use crate::ui::components::tab_bar::{FloatingTabBar, FloatingTabBarConfig, TabDescriptor};
use crate::ui::navigation::NavigationState;

/// Current contents of the booking form
pub struct BookingFormState {
    /// Selected service ID, empty while nothing is selected
    pub selected_service: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    /// Validation message shown above the confirm button
    pub error_message: Option<String>,
}

impl BookingFormState {
    pub fn new() -> Self {
        let now = Local::now();
        BookingFormState {
            selected_service: String::new(),
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            notes: String::new(),
            date: now.date_naive(),
            hour: now.hour(),
            minute: now.minute(),
            error_message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = BookingFormState::new();
    }

    /// Build a request from the current form contents.
    pub fn to_request(&self) -> BookingRequest {
        let scheduled_at = self
            .date
            .and_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .expect("hour and minute are clamped to a valid time");
        BookingRequest {
            service_id: self.selected_service.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
            scheduled_at,
        }
    }
}

/// Main application struct for the egui barber booking app
pub struct BarberBookingApp {
    // Navigation
    pub navigation: NavigationState,
    pub tab_bar: FloatingTabBar,

    // Appearance
    pub dark_mode: bool,
    pub reduce_motion: bool,

    // Mock data (no backend)
    pub services: Vec<Service>,
    pub profile: CustomerProfile,
    pub upcoming_appointments: Vec<Appointment>,
    pub appointment_history: Vec<Appointment>,

    // Booking state
    pub booking_form: BookingFormState,
    /// Confirmation dialog text; `Some` while the dialog is open
    pub booking_confirmation: Option<String>,
}

impl BarberBookingApp {
    /// Create a new BarberBookingApp with the default tab configuration
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, anyhow::Error> {
        info!("🚀 Initializing barber booking app");

        let dark_mode = cc.egui_ctx.style().visuals.dark_mode;

        let tabs = vec![
            TabDescriptor::new("home", "/home", "🏠", "Home"),
            TabDescriptor::new("booking", "/booking", "✂", "Book"),
            TabDescriptor::new("profile", "/profile", "👤", "Profile"),
        ];
        let navigation = NavigationState::new("/home");
        let tab_bar = FloatingTabBar::new(
            tabs,
            navigation.current_path(),
            FloatingTabBarConfig::default(),
        )?;

        Ok(BarberBookingApp {
            navigation,
            tab_bar,

            dark_mode,
            reduce_motion: false,

            services: Service::catalogue(),
            profile: CustomerProfile::mock(),
            upcoming_appointments: Appointment::mock_upcoming(),
            appointment_history: Appointment::mock_history(),

            booking_form: BookingFormState::new(),
            booking_confirmation: None,
        })
    }

    /// Perform the navigation side effect for a route request.
    pub fn navigate_to(&mut self, route: &str) {
        self.navigation.push(route);
    }
}
