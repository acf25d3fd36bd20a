use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Name))
                    .col(string(Banner::ImageUrl))
                    .col(string(Banner::AltText).default(""))
                    .col(boolean(Banner::IsActive).default(true))
                    .col(integer(Banner::DisplayOrder).default(0))
                    .col(
                        timestamp_with_time_zone(Banner::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Banner::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_banner_display_order")
                    .table(Banner::Table)
                    .col(Banner::DisplayOrder)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_banner_is_active")
                    .table(Banner::Table)
                    .col(Banner::IsActive)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Name,
    ImageUrl,
    AltText,
    IsActive,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
