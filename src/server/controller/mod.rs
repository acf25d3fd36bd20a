//! HTTP request handlers.
//!
//! Controllers convert DTOs to service parameters, call the service layer and turn the
//! resulting domain models back into DTOs.

pub mod banner;
pub mod inquiry;
pub mod sequence;
pub mod status;

#[cfg(test)]
mod test;
