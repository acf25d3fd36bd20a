use super::*;

/// Tests creating a new counter.
///
/// Expected: Ok(Inserted) with the initial value stored
#[tokio::test]
async fn inserts_new_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceCounterRepository::new(db);
    let outcome = repo.insert_if_absent(BOOKING_SEQUENCE, 1).await?;

    assert_eq!(outcome, InsertOutcome::Inserted);
    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, Some(1));

    Ok(())
}

/// Tests creating a counter that another caller already created.
///
/// Expected: Ok(AlreadyExists) with the existing value untouched
#[tokio::test]
async fn reports_existing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_counter(db, BOOKING_SEQUENCE, 12).await?;

    let repo = SequenceCounterRepository::new(db);
    let outcome = repo.insert_if_absent(BOOKING_SEQUENCE, 1).await?;

    assert_eq!(outcome, InsertOutcome::AlreadyExists);
    assert_eq!(repo.get_last_value(BOOKING_SEQUENCE).await?, Some(12));

    Ok(())
}

/// Tests creating a counter when its table is missing.
///
/// Expected: Err, not AlreadyExists
#[tokio::test]
async fn propagates_other_errors() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SequenceCounterRepository::new(db);
    let result = repo.insert_if_absent(BOOKING_SEQUENCE, 1).await;

    assert!(result.is_err());

    Ok(())
}
