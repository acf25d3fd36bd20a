use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Field names are camelCase on the wire to match the booking form on the public site.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDto {
    pub id: i32,
    /// Sequential booking identifier, e.g. `log007`.
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
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

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInquiryDto {
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

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllInquiriesDto {
    pub deleted_count: u64,
}

/// Free-form message from the site's WhatsApp widget.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct RelayMessageDto {
    #[serde(default)]
    pub msg: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RelayedMessageDto {
    pub message: String,
}
