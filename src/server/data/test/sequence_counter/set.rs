use super::*;

/// Tests resetting an existing counter.
///
/// Expected: Ok with the value overwritten and the next increment returning 1
#[tokio::test]
async fn overwrites_existing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, BOOKING_SEQUENCE, 57).await?;

    let repo = SequenceCounterRepository::new(db);
    repo.set(BOOKING_SEQUENCE, 0).await?;

    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, Some(0));
    assert_eq!(repo.increment_and_fetch(BOOKING_SEQUENCE).await?, Some(1));

    Ok(())
}

/// Tests resetting a counter that does not exist.
///
/// Expected: Ok with no record created
#[tokio::test]
async fn ignores_missing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceCounterRepository::new(db);
    repo.set(BOOKING_SEQUENCE, 0).await?;

    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, None);

    Ok(())
}
