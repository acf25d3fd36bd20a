pub use super::banner::Entity as Banner;
pub use super::inquiry::Entity as Inquiry;
pub use super::sequence_counter::Entity as SequenceCounter;
