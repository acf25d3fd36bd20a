use super::*;

/// Tests counting issued booking IDs.
///
/// Expected: Ok with the number of stored inquiries
#[tokio::test]
async fn counts_inquiries_for_booking_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_inquiry(db).await?;
    }

    let repo = SequenceCounterRepository::new(db);

    assert_eq!(repo.count_issued(BOOKING_SEQUENCE).await?, 3);

    Ok(())
}

/// Tests counting for a sequence without a backing table.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceCounterRepository::new(db);
    let result = repo.count_issued("invoiceCounter").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests the allocator fallback when the counter table is unavailable.
///
/// The counter table is absent, so the atomic path fails and the value is derived
/// from the stored inquiries.
///
/// Expected: Ok with count + 1, degraded
#[tokio::test]
async fn allocator_falls_back_without_counter_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Inquiry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inquiry(db).await?;
    factory::create_inquiry(db).await?;

    let allocator = SequenceAllocator::new(SequenceCounterRepository::new(db));
    let allocation = allocator.allocate(BOOKING_SEQUENCE).await.unwrap();

    assert_eq!(allocation.value, 3);
    assert!(allocation.degraded);

    Ok(())
}
