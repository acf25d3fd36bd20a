use super::*;

/// Tests creating a banner.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_banner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BannerRepository::new(db);
    let banner = repo
        .create(CreateBannerParams {
            name: "Summer".to_string(),
            image_url: "/banners/image-1-2.webp".to_string(),
            alt_text: "Summer offers".to_string(),
            is_active: false,
            display_order: 4,
        })
        .await?;

    let stored = repo.find_by_id(banner.id).await?.unwrap();
    assert_eq!(stored, banner);
    assert_eq!(stored.display_order, 4);
    assert!(!stored.is_active);

    Ok(())
}
