//! Inquiry fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating inquiry entity models without database insertion.

use chrono::{TimeZone, Utc};
use entity::inquiry;

/// Default booking ID for fixture inquiries.
pub const DEFAULT_BOOKING_ID: &str = "log001";

/// Default customer name.
pub const DEFAULT_NAME: &str = "Jane Doe";

/// Default customer phone number.
pub const DEFAULT_PHONE_NUMBER: &str = "+971500000001";

/// Creates an inquiry entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - booking_id: `"log001"`
/// - name: `"Jane Doe"`
/// - car_name: `Some("Nissan Sunny")`
/// - start_date / end_date: `Some("2024-06-01")` / `Some("2024-06-05")`
/// - pick_up_loc: `Some("Dubai Airport")`
/// - phone_number: `"+971500000001"`
/// - email: `Some("jane@example.com")`
/// - everything else optional: `None`
/// - status: `"New"`
///
/// # Returns
/// - `inquiry::Model` - In-memory inquiry entity
pub fn entity() -> inquiry::Model {
    entity_builder().build()
}

/// Creates an inquiry entity builder for customization.
pub fn entity_builder() -> InquiryEntityBuilder {
    InquiryEntityBuilder::default()
}

/// Builder for creating customized inquiry entity models.
pub struct InquiryEntityBuilder {
    id: i32,
    booking_id: String,
    name: String,
    car_name: Option<String>,
    brand: Option<String>,
    model: Option<String>,
    message: Option<String>,
    email: Option<String>,
}

impl Default for InquiryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            booking_id: DEFAULT_BOOKING_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            car_name: Some("Nissan Sunny".to_string()),
            brand: None,
            model: None,
            message: None,
            email: Some("jane@example.com".to_string()),
        }
    }
}

impl InquiryEntityBuilder {
    /// Sets the inquiry ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the booking ID.
    pub fn booking_id(mut self, booking_id: impl Into<String>) -> Self {
        self.booking_id = booking_id.into();
        self
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the requested car name.
    pub fn car_name(mut self, car_name: Option<String>) -> Self {
        self.car_name = car_name;
        self
    }

    /// Sets the requested car brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the requested car model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the customer message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the customer email.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Builds and returns the inquiry entity model.
    pub fn build(self) -> inquiry::Model {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 20, 9, 30, 0).unwrap();

        inquiry::Model {
            id: self.id,
            booking_id: self.booking_id,
            name: self.name,
            car_name: self.car_name,
            brand: self.brand,
            model: self.model,
            start_date: Some("2024-06-01".to_string()),
            end_date: Some("2024-06-05".to_string()),
            pickup_time: None,
            drop_time: None,
            pick_up_loc: Some("Dubai Airport".to_string()),
            drop_location: None,
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            email: self.email,
            message: self.message,
            delivery_mode: None,
            packages: None,
            area: None,
            is_new_car: true,
            status: "New".to_string(),
            status_message: "Received new inquiry".to_string(),
            status_changed_by: "admin".to_string(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}
