//! Persistent sequential ID allocation.
//!
//! Values come from a counter record per sequence name. The increment happens inside
//! the store as one atomic step; nothing is cached in memory, so any number of server
//! tasks (or processes sharing the database) can allocate concurrently.
//!
//! Allocation runs as a small state machine:
//!
//! 1. `AtomicAttempt` increments the counter and returns the new value.
//! 2. `CreateAttempt` runs when the counter does not exist yet and creates it at 1.
//!    If another caller created it first, control returns to `AtomicAttempt` once.
//! 3. `FallbackCount` runs on any storage error and derives the value from the number
//!    of issued records. Such values are flagged `degraded` since they can collide.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use crate::server::{
    data::sequence_counter::SequenceCounterRepository,
    error::{sequence::SequenceError, AppError},
    model::sequence::{format_identifier, Allocation, InsertOutcome},
};

/// Storage primitives the allocator is built on.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increments the counter and returns the post-increment value in one indivisible
    /// step. Returns `None` when no counter exists for `name`.
    async fn increment_and_fetch(&self, name: &str) -> Result<Option<i64>, DbErr>;

    /// Creates the counter at `initial` unless it already exists.
    async fn insert_if_absent(&self, name: &str, initial: i64) -> Result<InsertOutcome, DbErr>;

    /// Number of records already carrying a value from this sequence.
    async fn count_issued(&self, name: &str) -> Result<u64, DbErr>;

    /// Overwrites the counter value. No-op when the counter does not exist.
    async fn set(&self, name: &str, value: i64) -> Result<(), DbErr>;
}

#[derive(Error, Debug)]
enum FallbackCause {
    #[error(transparent)]
    Storage(#[from] DbErr),
    #[error("counter missing after concurrent creation")]
    MissingAfterRetry,
}

enum Step {
    AtomicAttempt { retried: bool },
    CreateAttempt,
    FallbackCount(FallbackCause),
}

pub struct SequenceAllocator<S> {
    store: S,
}

impl<S: CounterStore> SequenceAllocator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Allocates the next value of a sequence.
    ///
    /// Non-degraded values are strictly greater than every value previously issued for
    /// `name` and unique among concurrent callers.
    ///
    /// # Returns
    /// - `Ok(Allocation)` - The value, with `degraded` set when it came from the count fallback
    /// - `Err(SequenceError::StorageUnavailable)` - The atomic path and the fallback both failed
    pub async fn allocate(&self, name: &str) -> Result<Allocation, SequenceError> {
        let mut step = Step::AtomicAttempt { retried: false };

        loop {
            step = match step {
                Step::AtomicAttempt { retried } => {
                    match self.store.increment_and_fetch(name).await {
                        Ok(Some(value)) => {
                            return Ok(Allocation {
                                value,
                                degraded: false,
                            })
                        }
                        Ok(None) if !retried => Step::CreateAttempt,
                        Ok(None) => Step::FallbackCount(FallbackCause::MissingAfterRetry),
                        Err(err) => Step::FallbackCount(err.into()),
                    }
                }
                Step::CreateAttempt => match self.store.insert_if_absent(name, 1).await {
                    Ok(InsertOutcome::Inserted) => {
                        tracing::info!("Created sequence counter {}", name);
                        return Ok(Allocation {
                            value: 1,
                            degraded: false,
                        });
                    }
                    Ok(InsertOutcome::AlreadyExists) => Step::AtomicAttempt { retried: true },
                    Err(err) => Step::FallbackCount(err.into()),
                },
                Step::FallbackCount(cause) => {
                    let count = self.store.count_issued(name).await.map_err(|source| {
                        SequenceError::StorageUnavailable {
                            sequence: name.to_string(),
                            source,
                        }
                    })?;
                    let value = count as i64 + 1;

                    tracing::warn!(
                        sequence = name,
                        value,
                        "Counter unavailable ({}), allocated from issued count; value may not be unique",
                        cause
                    );

                    return Ok(Allocation {
                        value,
                        degraded: true,
                    });
                }
            };
        }
    }

    /// Allocates the next value and formats it, e.g. `log007`.
    pub async fn allocate_identifier(
        &self,
        name: &str,
        prefix: &str,
        width: usize,
    ) -> Result<String, SequenceError> {
        let allocation = self.allocate(name).await?;

        Ok(format_identifier(prefix, allocation.value, width))
    }

    /// Resets a sequence so the next allocation returns 1.
    ///
    /// Already issued identifiers are left untouched. Resetting a sequence that was
    /// never allocated does nothing.
    pub async fn reset(&self, name: &str) -> Result<(), DbErr> {
        self.store.set(name, 0).await?;

        tracing::info!("Reset sequence counter {}", name);

        Ok(())
    }
}

/// Administrative operations on database-backed sequences.
pub struct SequenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SequenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resets a sequence and returns its stored value afterwards.
    ///
    /// # Returns
    /// - `Ok(Some(0))` - The counter exists and was reset
    /// - `Ok(None)` - The sequence has never been allocated
    pub async fn reset(&self, name: &str) -> Result<Option<i64>, AppError> {
        let repo = SequenceCounterRepository::new(self.db);

        SequenceAllocator::new(SequenceCounterRepository::new(self.db))
            .reset(name)
            .await?;

        Ok(repo.get_last_value(name).await?)
    }
}
