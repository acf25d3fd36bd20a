use super::*;

/// Tests banner ordering.
///
/// Expected: Ok ordered by display_order, ties broken by ID
#[tokio::test]
async fn orders_by_display_order_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let third = BannerFactory::new(db).display_order(3).build().await?;
    let first = BannerFactory::new(db).display_order(1).build().await?;
    let second_a = BannerFactory::new(db).display_order(2).build().await?;
    let second_b = BannerFactory::new(db).display_order(2).build().await?;

    let repo = BannerRepository::new(db);
    let ids: Vec<i32> = repo.get_all(false).await?.iter().map(|b| b.id).collect();

    assert_eq!(ids, vec![first.id, second_a.id, second_b.id, third.id]);

    Ok(())
}

/// Tests the active filter.
///
/// Expected: Ok with inactive banners excluded only when requested
#[tokio::test]
async fn filters_inactive_banners() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = BannerFactory::new(db).display_order(1).build().await?;
    BannerFactory::new(db)
        .display_order(2)
        .active(false)
        .build()
        .await?;

    let repo = BannerRepository::new(db);

    let active_only = repo.get_all(true).await?;
    assert_eq!(active_only.len(), 1);
    assert_eq!(active_only[0].id, active.id);
    assert_eq!(repo.get_all(false).await?.len(), 2);

    Ok(())
}
