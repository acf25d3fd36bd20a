//! API data transfer objects.
//!
//! Serializable request and response bodies exchanged with HTTP clients. Server-side
//! domain models convert into these at the controller boundary.

pub mod api;
pub mod banner;
pub mod inquiry;
pub mod sequence;
