use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One bookable grooming service from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service ID in format: "service::<number>"
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display price in rand, e.g. "R225" or the open-ended "R55+"
    pub price: String,
    /// Display duration, e.g. "30 min"
    pub duration: String,
    /// Icon glyph shown on the service card
    pub icon: String,
    /// Which theme accent the service card uses
    pub accent: ServiceAccent,
}

/// Semantic accent slot for a service card; the frontend maps this to a
/// concrete theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceAccent {
    Primary,
    Highlight,
    Accent,
    Success,
}

impl Service {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        price: &str,
        duration: &str,
        icon: &str,
        accent: ServiceAccent,
    ) -> Self {
        Service {
            id: format!("service::{}", id),
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
            icon: icon.to_string(),
            accent,
        }
    }

    /// The full service catalogue offered by the barber.
    ///
    /// There is no backend; this static list is the source of truth for both
    /// the home screen and the booking form.
    pub fn catalogue() -> Vec<Service> {
        vec![
            Service::new(
                1,
                "Classic Adult Haircut",
                "Professional adult haircut at your doorstep",
                "R225",
                "30 min",
                "✂",
                ServiceAccent::Primary,
            ),
            Service::new(
                2,
                "Classic Kids Haircut",
                "Gentle and fun haircut for children",
                "R175",
                "25 min",
                "😊",
                ServiceAccent::Highlight,
            ),
            Service::new(
                3,
                "Black Dye Application",
                "Professional black hair dye application",
                "R105",
                "45 min",
                "🖌",
                ServiceAccent::Accent,
            ),
            Service::new(
                4,
                "Colour Application",
                "Custom colour dye application",
                "R155",
                "50 min",
                "🎨",
                ServiceAccent::Success,
            ),
            Service::new(
                5,
                "Line and Vinyls",
                "Sharp lines and vinyl designs",
                "R35",
                "15 min",
                "〰",
                ServiceAccent::Primary,
            ),
            Service::new(
                6,
                "Designs",
                "Custom hair designs and patterns",
                "R55+",
                "20 min",
                "⭐",
                ServiceAccent::Highlight,
            ),
            Service::new(
                7,
                "Eyebrow Tweezing",
                "Professional eyebrow grooming",
                "R45",
                "15 min",
                "👁",
                ServiceAccent::Accent,
            ),
            Service::new(
                8,
                "Beard Dye",
                "Expert beard coloring service",
                "R65",
                "30 min",
                "🖌",
                ServiceAccent::Success,
            ),
            Service::new(
                9,
                "Beard Trim",
                "Expert beard grooming and styling",
                "R25",
                "15 min",
                "✂",
                ServiceAccent::Primary,
            ),
        ]
    }

    /// Look up a catalogue entry by its ID.
    pub fn find<'a>(catalogue: &'a [Service], id: &str) -> Option<&'a Service> {
        catalogue.iter().find(|s| s.id == id)
    }
}

/// Status of an appointment shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "Confirmed"),
            AppointmentStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A past or upcoming appointment. Mock data only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub service: String,
    pub barber: String,
    /// Display date, e.g. "Dec 28, 2024"
    pub date: String,
    /// Display time, e.g. "2:00 PM"
    pub time: String,
    /// Present for upcoming home visits, absent for history entries
    pub address: Option<String>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Mock upcoming appointments for the profile screen.
    pub fn mock_upcoming() -> Vec<Appointment> {
        vec![
            Appointment {
                id: "appointment::1".to_string(),
                service: "Classic Haircut".to_string(),
                barber: "Mike Johnson".to_string(),
                date: "Dec 28, 2024".to_string(),
                time: "2:00 PM".to_string(),
                address: Some("123 Main St, Apt 4B".to_string()),
                status: AppointmentStatus::Confirmed,
            },
            Appointment {
                id: "appointment::2".to_string(),
                service: "Beard Trim".to_string(),
                barber: "David Smith".to_string(),
                date: "Jan 5, 2025".to_string(),
                time: "10:30 AM".to_string(),
                address: Some("123 Main St, Apt 4B".to_string()),
                status: AppointmentStatus::Confirmed,
            },
        ]
    }

    /// Mock appointment history for the profile screen.
    pub fn mock_history() -> Vec<Appointment> {
        vec![
            Appointment {
                id: "appointment::3".to_string(),
                service: "Full Service".to_string(),
                barber: "James Brown".to_string(),
                date: "Dec 15, 2024".to_string(),
                time: "3:00 PM".to_string(),
                address: None,
                status: AppointmentStatus::Completed,
            },
            Appointment {
                id: "appointment::4".to_string(),
                service: "Hot Shave".to_string(),
                barber: "Mike Johnson".to_string(),
                date: "Dec 1, 2024".to_string(),
                time: "11:00 AM".to_string(),
                address: None,
                status: AppointmentStatus::Completed,
            },
        ]
    }
}

/// Mock customer shown on the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerProfile {
    pub fn mock() -> CustomerProfile {
        CustomerProfile {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Main St, Apt 4B, San Francisco, CA".to_string(),
        }
    }
}

/// Validation failure for a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("no service selected")]
    NoServiceSelected,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Everything the booking form collects. Confirming a valid request only
/// shows a local confirmation dialog; there is no scheduling backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Selected service ID ("service::<n>"), empty when nothing is selected
    pub service_id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Optional free-form notes
    pub notes: String,
    /// Requested slot (no availability checking)
    pub scheduled_at: NaiveDateTime,
}

impl BookingRequest {
    /// Validate the request: a service must be selected and the required
    /// text fields must be non-empty. Nothing beyond that is checked.
    pub fn validate(&self) -> Result<(), BookingError> {
        if self.service_id.trim().is_empty() {
            return Err(BookingError::NoServiceSelected);
        }
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(BookingError::MissingField("phone"));
        }
        if self.address.trim().is_empty() {
            return Err(BookingError::MissingField("address"));
        }
        Ok(())
    }

    /// Human-readable confirmation line for the booking dialog,
    /// e.g. "Sat, Dec 28, 2024 at 2:00 PM".
    pub fn confirmation_line(&self) -> String {
        let date = self.scheduled_at.format("%a, %b %-d, %Y");
        let hour12 = match self.scheduled_at.hour() % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if self.scheduled_at.hour() < 12 { "AM" } else { "PM" };
        format!(
            "{} at {}:{:02} {}",
            date,
            hour12,
            self.scheduled_at.minute(),
            meridiem
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            service_id: "service::1".to_string(),
            name: "Jane".to_string(),
            phone: "555-0100".to_string(),
            address: "42 Oak Ave".to_string(),
            notes: String::new(),
            scheduled_at: NaiveDate::from_ymd_opt(2024, 12, 28)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_catalogue_has_nine_unique_services() {
        let catalogue = Service::catalogue();
        assert_eq!(catalogue.len(), 9);

        let mut ids: Vec<_> = catalogue.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_find_service_by_id() {
        let catalogue = Service::catalogue();
        let beard_trim = Service::find(&catalogue, "service::9").unwrap();
        assert_eq!(beard_trim.title, "Beard Trim");
        assert_eq!(beard_trim.price, "R25");

        assert!(Service::find(&catalogue, "service::99").is_none());
    }

    #[test]
    fn test_valid_booking_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_booking_requires_service() {
        let mut request = valid_request();
        request.service_id = String::new();
        assert_eq!(request.validate(), Err(BookingError::NoServiceSelected));
    }

    #[test]
    fn test_booking_requires_contact_fields() {
        let mut request = valid_request();
        request.name = "   ".to_string();
        assert_eq!(request.validate(), Err(BookingError::MissingField("name")));

        let mut request = valid_request();
        request.phone = String::new();
        assert_eq!(request.validate(), Err(BookingError::MissingField("phone")));

        let mut request = valid_request();
        request.address = String::new();
        assert_eq!(
            request.validate(),
            Err(BookingError::MissingField("address"))
        );
    }

    #[test]
    fn test_notes_are_optional() {
        let mut request = valid_request();
        request.notes = String::new();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn test_domain_types_round_trip_through_json() {
        let catalogue = Service::catalogue();
        let json = serde_json::to_string(&catalogue).unwrap();
        let restored: Vec<Service> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, catalogue);

        let request = valid_request();
        let json = serde_json::to_string(&request).unwrap();
        let restored: BookingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, request);
        assert_eq!(restored.validate(), Ok(()));
    }

    #[test]
    fn test_confirmation_line_formatting() {
        let request = valid_request();
        assert_eq!(request.confirmation_line(), "Sat, Dec 28, 2024 at 2:00 PM");

        let mut morning = valid_request();
        morning.scheduled_at = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(morning.confirmation_line(), "Sun, Jan 5, 2025 at 12:05 AM");
    }
}
