use sea_orm_migration::prelude::*;

use super::m20251101_000003_create_banner_table::Banner;

/// Marketing banners the public site shipped with before banners were editable.
const STATIC_BANNERS: [(&str, &str, &str); 9] = [
    (
        "Main Banner",
        "/banner-injaz-1.jpg",
        "Injaz Rent A Car Main Banner",
    ),
    (
        "Saudi National Day 1",
        "/INJAZ SAUDI NATIONAL DAY 1.webp",
        "Saudi National Day Special Offer",
    ),
    (
        "Saudi National Day 2",
        "/saudi national day 2.webp",
        "Saudi National Day Special Offer 2",
    ),
    (
        "Teacher Special Offer 1",
        "/teacher1.webp",
        "Back to School Special Offers for Teachers",
    ),
    (
        "Teacher Special Offer 2",
        "/teacher2.webp",
        "Back to School Special Offers for Teachers 2",
    ),
    (
        "Price Drop Banner",
        "/inajz price drop banner 06 06 2024 copy.webp",
        "Special Price Drop Offer",
    ),
    (
        "New Banner 1",
        "/new inajz banner 16 05 copy.webp",
        "New Special Offer Banner",
    ),
    (
        "Sunny Banner",
        "/new sunny inajz banner 16 05 copy.webp",
        "Nissan Sunny Special Offer",
    ),
    (
        "Latest Banner",
        "/injaz new banner.webp",
        "Latest Special Offer Banner",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Banner::Table).columns([
            Banner::Name,
            Banner::ImageUrl,
            Banner::AltText,
            Banner::IsActive,
            Banner::DisplayOrder,
        ]);

        for (position, (name, image_url, alt_text)) in STATIC_BANNERS.iter().enumerate() {
            insert.values_panic([
                (*name).into(),
                (*image_url).into(),
                (*alt_text).into(),
                true.into(),
                (position as i32 + 1).into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let image_urls = STATIC_BANNERS.iter().map(|(_, image_url, _)| *image_url);

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Banner::Table)
                    .and_where(Expr::col(Banner::ImageUrl).is_in(image_urls))
                    .to_owned(),
            )
            .await
    }
}
