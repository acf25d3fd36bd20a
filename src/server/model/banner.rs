//! Banner domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::banner::BannerDto;

/// Marketing banner shown on the public site.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: i32,
    pub name: String,
    /// Public URL of the stored image, e.g. `/banners/image-1700000000000-42.webp`.
    pub image_url: String,
    pub alt_text: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    pub fn from_entity(entity: entity::banner::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            alt_text: entity.alt_text,
            is_active: entity.is_active,
            display_order: entity.display_order,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            alt_text: self.alt_text,
            is_active: self.is_active,
            display_order: self.display_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Image file received in a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Multipart field name, used as the stored file name prefix.
    pub field_name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fields read from a banner multipart form. Everything is optional at this stage;
/// the service applies create defaults and the image requirement.
#[derive(Debug, Clone, Default)]
pub struct BannerForm {
    pub image: Option<ImageUpload>,
    pub name: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// Parameters for inserting a banner whose image is already stored.
#[derive(Debug, Clone)]
pub struct CreateBannerParams {
    pub name: String,
    pub image_url: String,
    pub alt_text: String,
    pub is_active: bool,
    pub display_order: i32,
}

/// Partial banner update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBannerParams {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}
