use super::*;

/// Tests incrementing a sequence that has never been created.
///
/// Expected: Ok(None) and no counter record created
#[tokio::test]
async fn returns_none_for_missing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceCounterRepository::new(db);
    let result = repo.increment_and_fetch(BOOKING_SEQUENCE).await?;

    assert_eq!(result, None);
    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, None);

    Ok(())
}

/// Tests incrementing an existing counter.
///
/// Expected: Ok with the post-increment value, persisted
#[tokio::test]
async fn returns_post_increment_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, BOOKING_SEQUENCE, 6).await?;

    let repo = SequenceCounterRepository::new(db);

    assert_eq!(repo.increment_and_fetch(BOOKING_SEQUENCE).await?, Some(7));
    assert_eq!(repo.increment_and_fetch(BOOKING_SEQUENCE).await?, Some(8));
    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, Some(8));

    Ok(())
}

/// Tests that counters are independent per sequence name.
///
/// Expected: Ok with only the named counter incremented
#[tokio::test]
async fn only_touches_named_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, BOOKING_SEQUENCE, 1).await?;
    factory::create_counter(db, "invoiceCounter", 100).await?;

    let repo = SequenceCounterRepository::new(db);
    repo.increment_and_fetch("invoiceCounter").await?;

    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, Some(1));
    assert_eq!(repo.get_last_value("invoiceCounter").await?, Some(101));

    Ok(())
}
