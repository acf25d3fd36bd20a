//! SeaORM entity definitions for the rental backend schema.

pub mod prelude;

pub mod banner;
pub mod inquiry;
pub mod sequence_counter;
