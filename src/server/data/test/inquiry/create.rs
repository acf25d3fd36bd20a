use super::*;

/// Tests creating an inquiry with the minimum required fields.
///
/// Expected: Ok with status defaults and equal timestamps
#[tokio::test]
async fn creates_inquiry_with_status_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InquiryRepository::new(db);
    let inquiry = repo
        .create(
            "log001".to_string(),
            CreateInquiryParams {
                name: "Jane Doe".to_string(),
                phone_number: "+971500000001".to_string(),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(inquiry.booking_id, "log001");
    assert_eq!(inquiry.status, "New");
    assert_eq!(inquiry.status_message, "Received new inquiry");
    assert_eq!(inquiry.status_changed_by, "admin");
    assert!(inquiry.is_new_car);
    assert_eq!(inquiry.car_name, None);
    assert_eq!(inquiry.created_at, inquiry.updated_at);

    Ok(())
}

/// Tests that booking IDs are unique at the storage level.
///
/// Expected: Err on the second insert with the same booking ID
#[tokio::test]
async fn rejects_duplicate_booking_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inquiry::InquiryFactory::new(db)
        .booking_id("log007")
        .build()
        .await?;

    let repo = InquiryRepository::new(db);
    let result = repo
        .create(
            "log007".to_string(),
            CreateInquiryParams {
                name: "John".to_string(),
                phone_number: "+971500000002".to_string(),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Inquiry::find().count(db).await?, 1);

    Ok(())
}
