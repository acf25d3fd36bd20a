//! Inquiry factory for creating test booking entities.
//!
//! Factory-created inquiries bypass the booking-number allocator; their booking IDs
//! come from the shared test counter and use a `test` prefix so they never collide
//! with allocator-issued `log###` identifiers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test inquiries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::inquiry::InquiryFactory;
///
/// let inquiry = InquiryFactory::new(&db)
///     .booking_id("log042")
///     .name("Jane Doe")
///     .status("Confirmed")
///     .build()
///     .await?;
/// ```
pub struct InquiryFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: String,
    name: String,
    phone_number: String,
    email: Option<String>,
    car_name: Option<String>,
    status: String,
}

impl<'a> InquiryFactory<'a> {
    /// Creates a new InquiryFactory with default values.
    ///
    /// Defaults:
    /// - booking_id: `"test{id}"` where id is auto-incremented
    /// - name: `"Customer {id}"`
    /// - phone_number: `"+9715000{id}"`
    /// - email: `None`
    /// - car_name: `Some("Nissan Sunny")`
    /// - status: `"New"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            booking_id: format!("test{}", id),
            name: format!("Customer {}", id),
            phone_number: format!("+9715000{}", id),
            email: None,
            car_name: Some("Nissan Sunny".to_string()),
            status: "New".to_string(),
        }
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

    /// Sets the customer phone number.
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the customer email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the requested car name.
    pub fn car_name(mut self, car_name: Option<String>) -> Self {
        self.car_name = car_name;
        self
    }

    /// Sets the inquiry status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the inquiry entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::inquiry::Model)` - Created inquiry entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::inquiry::Model, DbErr> {
        let now = Utc::now();
        entity::inquiry::ActiveModel {
            booking_id: ActiveValue::Set(self.booking_id),
            name: ActiveValue::Set(self.name),
            car_name: ActiveValue::Set(self.car_name),
            brand: ActiveValue::Set(None),
            model: ActiveValue::Set(None),
            start_date: ActiveValue::Set(None),
            end_date: ActiveValue::Set(None),
            pickup_time: ActiveValue::Set(None),
            drop_time: ActiveValue::Set(None),
            pick_up_loc: ActiveValue::Set(None),
            drop_location: ActiveValue::Set(None),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
            message: ActiveValue::Set(None),
            delivery_mode: ActiveValue::Set(None),
            packages: ActiveValue::Set(None),
            area: ActiveValue::Set(None),
            is_new_car: ActiveValue::Set(true),
            status: ActiveValue::Set(self.status),
            status_message: ActiveValue::Set("Received new inquiry".to_string()),
            status_changed_by: ActiveValue::Set("admin".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inquiry with default values.
///
/// Shorthand for `InquiryFactory::new(db).build().await`.
pub async fn create_inquiry(db: &DatabaseConnection) -> Result<entity::inquiry::Model, DbErr> {
    InquiryFactory::new(db).build().await
}
