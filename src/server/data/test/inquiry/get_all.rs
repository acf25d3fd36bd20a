use super::*;

/// Tests listing inquiries.
///
/// Expected: Ok with the most recently created inquiry first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_inquiry(db).await?;
    let second = factory::create_inquiry(db).await?;
    let third = factory::create_inquiry(db).await?;

    let repo = InquiryRepository::new(db);
    let inquiries = repo.get_all().await?;

    let ids: Vec<i32> = inquiries.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    Ok(())
}

/// Tests listing with no inquiries.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InquiryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
