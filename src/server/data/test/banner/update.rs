use super::*;

/// Tests a partial banner update.
///
/// Expected: Ok with supplied fields changed and the image untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = BannerFactory::new(db)
        .name("Winter")
        .image_url("/banners/winter.webp")
        .build()
        .await?;

    let repo = BannerRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateBannerParams {
                is_active: Some(false),
                display_order: Some(9),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Winter");
    assert_eq!(updated.image_url, "/banners/winter.webp");
    assert!(!updated.is_active);
    assert_eq!(updated.display_order, 9);

    Ok(())
}

/// Tests updating a missing banner.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_banner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannerRepository::new(db);

    assert!(repo
        .update(7, UpdateBannerParams::default())
        .await?
        .is_none());

    Ok(())
}
