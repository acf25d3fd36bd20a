use std::collections::BTreeSet;

use tokio::task::JoinSet;

use super::*;

async fn allocate_concurrently(db: &sea_orm::DatabaseConnection, tasks: usize) -> Vec<i64> {
    let mut set = JoinSet::new();

    for _ in 0..tasks {
        let db = db.clone();
        set.spawn(async move {
            SequenceAllocator::new(SequenceCounterRepository::new(&db))
                .allocate(BOOKING_SEQUENCE)
                .await
        });
    }

    let mut values = Vec::with_capacity(tasks);
    while let Some(result) = set.join_next().await {
        let allocation = result.unwrap().unwrap();
        assert!(!allocation.degraded);
        values.push(allocation.value);
    }

    values
}

/// Tests concurrent first allocations of a brand new sequence.
///
/// Every task races to create the counter; exactly one wins and the rest fall back
/// to the atomic increment.
///
/// Expected: values are exactly 1..=20 with no duplicates
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_allocations_are_unique() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let values = allocate_concurrently(db, 20).await;

    let unique: BTreeSet<i64> = values.iter().copied().collect();
    assert_eq!(unique.len(), 20);
    assert_eq!(unique, (1..=20).collect::<BTreeSet<i64>>());

    Ok(())
}

/// Tests concurrent allocations continuing an existing sequence.
///
/// Expected: values are exactly 11..=30
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_allocations_continue_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, BOOKING_SEQUENCE, 10).await?;

    let values = allocate_concurrently(db, 20).await;

    let unique: BTreeSet<i64> = values.into_iter().collect();
    assert_eq!(unique, (11..=30).collect::<BTreeSet<i64>>());
    assert_eq!(
        SequenceCounterRepository::new(db)
            .get_last_value(BOOKING_SEQUENCE)
            .await?,
        Some(30)
    );

    Ok(())
}
