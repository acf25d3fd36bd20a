//! Counter record factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a counter record for `name` holding `last_value`.
///
/// Use this to start a test from an existing sequence position instead of
/// allocating up to it.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Sequence name
/// - `last_value` - Most recently issued value
///
/// # Returns
/// - `Ok(entity::sequence_counter::Model)` - Created counter record
/// - `Err(DbErr)` - Database error during insert, including a duplicate name
pub async fn create_counter(
    db: &DatabaseConnection,
    name: impl Into<String>,
    last_value: i64,
) -> Result<entity::sequence_counter::Model, DbErr> {
    entity::sequence_counter::ActiveModel {
        name: ActiveValue::Set(name.into()),
        last_value: ActiveValue::Set(last_value),
    }
    .insert(db)
    .await
}
