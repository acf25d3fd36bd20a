//! Inquiry (booking request) domain models and parameters.
//!
//! An inquiry is the booking request a customer submits from the public site. Each one
//! carries a sequential booking ID allocated at creation time.

use chrono::{DateTime, Utc};

use crate::model::inquiry::{CreateInquiryDto, InquiryDto, UpdateInquiryDto};

/// Status assigned to every freshly created inquiry.
pub const DEFAULT_STATUS: &str = "New";
/// Status message assigned to every freshly created inquiry.
pub const DEFAULT_STATUS_MESSAGE: &str = "Received new inquiry";
/// Actor recorded on status changes when none is given.
pub const DEFAULT_STATUS_CHANGED_BY: &str = "admin";

/// Stored inquiry with its booking ID and status.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub id: i32,
    pub booking_id: String,
    pub name: String,
    pub car_name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub pick_up_loc: Option<String>,
    pub drop_location: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub delivery_mode: Option<String>,
    pub packages: Option<String>,
    pub area: Option<String>,
    pub is_new_car: bool,
    pub status: String,
    pub status_message: String,
    pub status_changed_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Inquiry {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::inquiry::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            name: entity.name,
            car_name: entity.car_name,
            brand: entity.brand,
            model: entity.model,
            start_date: entity.start_date,
            end_date: entity.end_date,
            pickup_time: entity.pickup_time,
            drop_time: entity.drop_time,
            pick_up_loc: entity.pick_up_loc,
            drop_location: entity.drop_location,
            phone_number: entity.phone_number,
            email: entity.email,
            message: entity.message,
            delivery_mode: entity.delivery_mode,
            packages: entity.packages,
            area: entity.area,
            is_new_car: entity.is_new_car,
            status: entity.status,
            status_message: entity.status_message,
            status_changed_by: entity.status_changed_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> InquiryDto {
        InquiryDto {
            id: self.id,
            booking_id: self.booking_id,
            name: self.name,
            car_name: self.car_name,
            brand: self.brand,
            model: self.model,
            start_date: self.start_date,
            end_date: self.end_date,
            pickup_time: self.pickup_time,
            drop_time: self.drop_time,
            pick_up_loc: self.pick_up_loc,
            drop_location: self.drop_location,
            phone_number: self.phone_number,
            email: self.email,
            message: self.message,
            delivery_mode: self.delivery_mode,
            packages: self.packages,
            area: self.area,
            is_new_car: self.is_new_car,
            status: self.status,
            status_message: self.status_message,
            status_changed_by: self.status_changed_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Car description for notifications: the car name, else `brand model`.
    pub fn car_label(&self) -> Option<String> {
        if let Some(car_name) = self.car_name.as_deref().filter(|c| !c.trim().is_empty()) {
            return Some(car_name.to_string());
        }

        let parts: Vec<&str> = [self.brand.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Parameters for creating a new inquiry.
///
/// The booking ID is not part of the parameters; it is allocated by the service.
#[derive(Debug, Clone, Default)]
pub struct CreateInquiryParams {
    pub name: String,
    pub phone_number: String,
    pub car_name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub pick_up_loc: Option<String>,
    pub drop_location: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub delivery_mode: Option<String>,
    pub packages: Option<String>,
}

impl CreateInquiryParams {
    pub fn from_dto(dto: CreateInquiryDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            car_name: dto.car_name,
            brand: dto.brand,
            model: dto.model,
            start_date: dto.start_date,
            end_date: dto.end_date,
            pickup_time: dto.pickup_time,
            drop_time: dto.drop_time,
            pick_up_loc: dto.pick_up_loc,
            drop_location: dto.drop_location,
            email: dto.email,
            message: dto.message,
            delivery_mode: dto.delivery_mode,
            packages: dto.packages,
        }
    }
}

/// Parameters for a partial inquiry update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateInquiryParams {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub car_name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub pick_up_loc: Option<String>,
    pub drop_location: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub delivery_mode: Option<String>,
    pub packages: Option<String>,
    pub area: Option<String>,
    pub is_new_car: Option<bool>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub status_changed_by: Option<String>,
}

impl UpdateInquiryParams {
    pub fn from_dto(dto: UpdateInquiryDto) -> Self {
        Self {
            name: dto.name,
            phone_number: dto.phone_number,
            car_name: dto.car_name,
            brand: dto.brand,
            model: dto.model,
            start_date: dto.start_date,
            end_date: dto.end_date,
            pickup_time: dto.pickup_time,
            drop_time: dto.drop_time,
            pick_up_loc: dto.pick_up_loc,
            drop_location: dto.drop_location,
            email: dto.email,
            message: dto.message,
            delivery_mode: dto.delivery_mode,
            packages: dto.packages,
            area: dto.area,
            is_new_car: dto.is_new_car,
            status: dto.status,
            status_message: dto.status_message,
            status_changed_by: dto.status_changed_by,
        }
    }
}
