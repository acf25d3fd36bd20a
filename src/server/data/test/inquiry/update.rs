use super::*;

/// Tests a status change.
///
/// Expected: Ok with only the supplied fields changed and updated_at refreshed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::inquiry::InquiryFactory::new(db)
        .name("Jane Doe")
        .email("jane@example.com")
        .build()
        .await?;

    let repo = InquiryRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateInquiryParams {
                status: Some("Confirmed".to_string()),
                status_message: Some("Car reserved".to_string()),
                area: Some("Marina".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "Confirmed");
    assert_eq!(updated.status_message, "Car reserved");
    assert_eq!(updated.area.as_deref(), Some("Marina"));
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.email.as_deref(), Some("jane@example.com"));
    assert_eq!(updated.booking_id, created.booking_id);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a missing inquiry.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_inquiry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InquiryRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateInquiryParams {
                status: Some("Cancelled".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
