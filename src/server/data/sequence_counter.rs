use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr, TransactionTrait,
};

use crate::server::{
    model::sequence::{InsertOutcome, BOOKING_SEQUENCE},
    service::sequence::CounterStore,
};

/// Counter records persisted in the `sequence_counter` table.
///
/// Every mutation is a single SQL statement so concurrent callers are serialized by
/// the database, never by the application.
pub struct SequenceCounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SequenceCounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the last issued value of a sequence, `None` if it has never been used.
    pub async fn get_last_value(&self, name: &str) -> Result<Option<i64>, DbErr> {
        Ok(entity::prelude::SequenceCounter::find_by_id(name.to_string())
            .one(self.db)
            .await?
            .map(|counter| counter.last_value))
    }
}

#[async_trait]
impl CounterStore for SequenceCounterRepository<'_> {
    /// Increments the counter and reads the new value inside one transaction.
    ///
    /// The increment is an `UPDATE ... SET last_value = last_value + 1`, so the write lock
    /// taken by the first statement holds until the read completes.
    async fn increment_and_fetch(&self, name: &str) -> Result<Option<i64>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::SequenceCounter::update_many()
            .col_expr(
                entity::sequence_counter::Column::LastValue,
                Expr::col(entity::sequence_counter::Column::LastValue).add(1),
            )
            .filter(entity::sequence_counter::Column::Name.eq(name))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let counter = entity::prelude::SequenceCounter::find_by_id(name.to_string())
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Sequence counter {} not found after increment",
                name
            )))?;

        txn.commit().await?;

        Ok(Some(counter.last_value))
    }

    async fn insert_if_absent(&self, name: &str, initial: i64) -> Result<InsertOutcome, DbErr> {
        let counter = entity::sequence_counter::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            last_value: ActiveValue::Set(initial),
        };

        match entity::prelude::SequenceCounter::insert(counter)
            .exec_without_returning(self.db)
            .await
        {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(InsertOutcome::AlreadyExists)
            }
            Err(err) => Err(err),
        }
    }

    /// Counts the records that carry a value from this sequence.
    ///
    /// Only the booking sequence has a backing table to count.
    async fn count_issued(&self, name: &str) -> Result<u64, DbErr> {
        if name != BOOKING_SEQUENCE {
            return Err(DbErr::Custom(format!(
                "No issued-record count available for sequence {}",
                name
            )));
        }

        entity::prelude::Inquiry::find().count(self.db).await
    }

    async fn set(&self, name: &str, value: i64) -> Result<(), DbErr> {
        entity::prelude::SequenceCounter::update_many()
            .col_expr(
                entity::sequence_counter::Column::LastValue,
                Expr::value(value),
            )
            .filter(entity::sequence_counter::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
