//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit
//! tests of conversions and rendering, and for mocking repository responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let inquiry = fixture::inquiry::entity();
//!
//! let walk_in = fixture::inquiry::entity_builder()
//!     .car_name(None)
//!     .brand("Toyota")
//!     .model("Camry")
//!     .build();
//! ```

pub mod banner;
pub mod inquiry;

pub use banner::entity as banner_entity;
pub use inquiry::{entity as inquiry_entity, entity_builder as inquiry_entity_builder};
