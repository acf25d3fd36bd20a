//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They apply business rules and validation, coordinate repository calls with side
//! effects such as notifications and file storage, and work with domain models rather
//! than DTOs or entity models.

pub mod banner;
pub mod image;
pub mod inquiry;
pub mod notification;
pub mod sequence;
