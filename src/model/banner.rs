use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub alt_text: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Multipart form accepted by banner create and update.
///
/// Only used for API documentation; the handlers read the fields from the
/// multipart stream directly.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BannerUploadForm {
    /// Banner image, must have an `image/*` content type. Required on create.
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    pub name: Option<String>,
    pub alt_text: Option<String>,
    /// `"true"` or `"false"`.
    pub is_active: Option<String>,
    pub display_order: Option<i32>,
}

/// Multipart form for storing several banner images at once.
///
/// Only used for API documentation.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct BannerFilesForm {
    /// Repeated file field; parts that are not `image/*` are skipped.
    #[schema(value_type = Vec<String>, format = Binary)]
    pub files: Vec<Vec<u8>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFilesDto {
    pub message: String,
    /// Public URLs of the stored images, in upload order.
    pub urls: Vec<String>,
}
