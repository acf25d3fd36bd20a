use super::*;

/// Tests deleting one inquiry.
///
/// Expected: Ok(true) and the other inquiry kept
#[tokio::test]
async fn deletes_single_inquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_inquiry(db).await?;
    let other = factory::create_inquiry(db).await?;

    let repo = InquiryRepository::new(db);

    assert!(repo.delete(target.id).await?);
    assert!(repo.find_by_id(target.id).await?.is_none());
    assert!(repo.find_by_id(other.id).await?.is_some());

    Ok(())
}

/// Tests deleting a missing inquiry.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_inquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InquiryRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests deleting every inquiry.
///
/// Expected: Ok with the number of removed rows and an empty table
#[tokio::test]
async fn delete_all_returns_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..4 {
        factory::create_inquiry(db).await?;
    }

    let repo = InquiryRepository::new(db);

    assert_eq!(repo.delete_all().await?, 4);
    assert_eq!(entity::prelude::Inquiry::find().count(db).await?, 0);

    Ok(())
}
