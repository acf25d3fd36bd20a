//! Banner factory for creating test banner entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test banners with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::banner::BannerFactory;
///
/// let banner = BannerFactory::new(&db)
///     .image_url("/banners/summer.webp")
///     .display_order(2)
///     .build()
///     .await?;
/// ```
pub struct BannerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image_url: String,
    alt_text: String,
    is_active: bool,
    display_order: i32,
}

impl<'a> BannerFactory<'a> {
    /// Creates a new BannerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Banner {id}"`
    /// - image_url: `"/banners/banner-{id}.webp"`
    /// - alt_text: `""`
    /// - is_active: `true`
    /// - display_order: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Banner {}", id),
            image_url: format!("/banners/banner-{}.webp", id),
            alt_text: String::new(),
            is_active: true,
            display_order: 0,
        }
    }

    /// Sets the banner name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the public image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the image alt text.
    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Sets whether the banner is shown on the site.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the display position.
    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Builds and inserts the banner entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::banner::Model)` - Created banner entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::banner::Model, DbErr> {
        let now = Utc::now();
        entity::banner::ActiveModel {
            name: ActiveValue::Set(self.name),
            image_url: ActiveValue::Set(self.image_url),
            alt_text: ActiveValue::Set(self.alt_text),
            is_active: ActiveValue::Set(self.is_active),
            display_order: ActiveValue::Set(self.display_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a banner with default values.
///
/// Shorthand for `BannerFactory::new(db).build().await`.
pub async fn create_banner(db: &DatabaseConnection) -> Result<entity::banner::Model, DbErr> {
    BannerFactory::new(db).build().await
}
