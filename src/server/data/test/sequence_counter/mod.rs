use crate::server::{
    data::sequence_counter::SequenceCounterRepository,
    model::sequence::{InsertOutcome, BOOKING_SEQUENCE},
    service::sequence::{CounterStore, SequenceAllocator},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod concurrent_allocation;
mod count_issued;
mod increment_and_fetch;
mod insert_if_absent;
mod set;
