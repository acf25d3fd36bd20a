pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_sequence_counter_table;
mod m20251101_000002_create_inquiry_table;
mod m20251101_000003_create_banner_table;
mod m20251101_000004_seed_banners;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_sequence_counter_table::Migration),
            Box::new(m20251101_000002_create_inquiry_table::Migration),
            Box::new(m20251101_000003_create_banner_table::Migration),
            Box::new(m20251101_000004_seed_banners::Migration),
        ]
    }
}
