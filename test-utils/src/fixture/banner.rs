//! Banner fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::banner;

/// Default test banner name.
pub const DEFAULT_NAME: &str = "Main Banner";

/// Default test banner image URL.
pub const DEFAULT_IMAGE_URL: &str = "/banners/image-1700000000000-42.webp";

/// Creates a banner entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Main Banner"`
/// - image_url: `"/banners/image-1700000000000-42.webp"`
/// - alt_text: `"Main banner"`
/// - is_active: `true`
/// - display_order: `1`
/// - created_at / updated_at: `2024-01-01T00:00:00Z`
pub fn entity() -> banner::Model {
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    banner::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        image_url: DEFAULT_IMAGE_URL.to_string(),
        alt_text: "Main banner".to_string(),
        is_active: true,
        display_order: 1,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
