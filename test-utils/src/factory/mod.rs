//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let inquiry = factory::inquiry::create_inquiry(&db).await?;
//!     let banner = factory::banner::BannerFactory::new(&db)
//!         .display_order(3)
//!         .active(false)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `inquiry` - Create booking inquiry entities
//! - `banner` - Create banner entities
//! - `sequence_counter` - Create counter records at a chosen value
//! - `helpers` - Shared unique-value generation

pub mod banner;
pub mod helpers;
pub mod inquiry;
pub mod sequence_counter;

pub use banner::create_banner;
pub use inquiry::create_inquiry;
pub use sequence_counter::create_counter;
