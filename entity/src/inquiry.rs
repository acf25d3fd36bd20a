use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub booking_id: String,
    pub name: String,
    pub car_name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub pickup_time: Option<String>,
    pub drop_time: Option<String>,
    pub pick_up_loc: Option<String>,
    pub drop_location: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    pub message: Option<String>,
    pub delivery_mode: Option<String>,
    pub packages: Option<String>,
    pub area: Option<String>,
    pub is_new_car: bool,
    pub status: String,
    pub status_message: String,
    pub status_changed_by: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
