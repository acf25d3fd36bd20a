use super::*;

/// Tests deleting a banner.
///
/// Expected: Ok(true), then Ok(false) for the same ID
#[tokio::test]
async fn deletes_banner_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Banner).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = BannerFactory::new(db).build().await?;

    let repo = BannerRepository::new(db);

    assert!(repo.delete(banner.id).await?);
    assert!(!repo.delete(banner.id).await?);
    assert!(repo.find_by_id(banner.id).await?.is_none());

    Ok(())
}
