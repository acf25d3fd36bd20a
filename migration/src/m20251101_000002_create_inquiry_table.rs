use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(Inquiry::Id))
                    .col(string_uniq(Inquiry::BookingId))
                    .col(string(Inquiry::Name))
                    .col(string_null(Inquiry::CarName))
                    .col(string_null(Inquiry::Brand))
                    .col(string_null(Inquiry::Model))
                    .col(string_null(Inquiry::StartDate))
                    .col(string_null(Inquiry::EndDate))
                    .col(string_null(Inquiry::PickupTime))
                    .col(string_null(Inquiry::DropTime))
                    .col(string_null(Inquiry::PickUpLoc))
                    .col(string_null(Inquiry::DropLocation))
                    .col(string(Inquiry::PhoneNumber))
                    .col(string_null(Inquiry::Email))
                    .col(text_null(Inquiry::Message))
                    .col(string_null(Inquiry::DeliveryMode))
                    .col(string_null(Inquiry::Packages))
                    .col(string_null(Inquiry::Area))
                    .col(boolean(Inquiry::IsNewCar).default(true))
                    .col(string(Inquiry::Status))
                    .col(string(Inquiry::StatusMessage))
                    .col(string(Inquiry::StatusChangedBy))
                    .col(
                        timestamp_with_time_zone(Inquiry::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Inquiry::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inquiry {
    Table,
    Id,
    BookingId,
    Name,
    CarName,
    Brand,
    Model,
    StartDate,
    EndDate,
    PickupTime,
    DropTime,
    PickUpLoc,
    DropLocation,
    PhoneNumber,
    Email,
    Message,
    DeliveryMode,
    Packages,
    Area,
    IsNewCar,
    Status,
    StatusMessage,
    StatusChangedBy,
    CreatedAt,
    UpdatedAt,
}
