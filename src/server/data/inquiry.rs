use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::inquiry::{
    CreateInquiryParams, Inquiry, UpdateInquiryParams, DEFAULT_STATUS,
    DEFAULT_STATUS_CHANGED_BY, DEFAULT_STATUS_MESSAGE,
};

pub struct InquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InquiryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new inquiry under an already allocated booking ID.
    ///
    /// Status fields take their defaults and both timestamps are set to now.
    pub async fn create(
        &self,
        booking_id: String,
        params: CreateInquiryParams,
    ) -> Result<Inquiry, DbErr> {
        let now = Utc::now();

        let entity = entity::inquiry::ActiveModel {
            booking_id: ActiveValue::Set(booking_id),
            name: ActiveValue::Set(params.name),
            car_name: ActiveValue::Set(params.car_name),
            brand: ActiveValue::Set(params.brand),
            model: ActiveValue::Set(params.model),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            pickup_time: ActiveValue::Set(params.pickup_time),
            drop_time: ActiveValue::Set(params.drop_time),
            pick_up_loc: ActiveValue::Set(params.pick_up_loc),
            drop_location: ActiveValue::Set(params.drop_location),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            message: ActiveValue::Set(params.message),
            delivery_mode: ActiveValue::Set(params.delivery_mode),
            packages: ActiveValue::Set(params.packages),
            area: ActiveValue::Set(None),
            is_new_car: ActiveValue::Set(true),
            status: ActiveValue::Set(DEFAULT_STATUS.to_string()),
            status_message: ActiveValue::Set(DEFAULT_STATUS_MESSAGE.to_string()),
            status_changed_by: ActiveValue::Set(DEFAULT_STATUS_CHANGED_BY.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Inquiry::from_entity(entity))
    }

    /// Gets all inquiries, newest first.
    pub async fn get_all(&self) -> Result<Vec<Inquiry>, DbErr> {
        let entities = entity::prelude::Inquiry::find()
            .order_by_desc(entity::inquiry::Column::CreatedAt)
            .order_by_desc(entity::inquiry::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Inquiry::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Inquiry>, DbErr> {
        Ok(entity::prelude::Inquiry::find_by_id(id)
            .one(self.db)
            .await?
            .map(Inquiry::from_entity))
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Inquiry))` - The updated inquiry
    /// - `Ok(None)` - No inquiry with this ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateInquiryParams,
    ) -> Result<Option<Inquiry>, DbErr> {
        let Some(existing) = entity::prelude::Inquiry::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::inquiry::ActiveModel = existing.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(is_new_car) = params.is_new_car {
            active_model.is_new_car = ActiveValue::Set(is_new_car);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(status_message) = params.status_message {
            active_model.status_message = ActiveValue::Set(status_message);
        }
        if let Some(status_changed_by) = params.status_changed_by {
            active_model.status_changed_by = ActiveValue::Set(status_changed_by);
        }

        let optional = [
            (&mut active_model.car_name, params.car_name),
            (&mut active_model.brand, params.brand),
            (&mut active_model.model, params.model),
            (&mut active_model.start_date, params.start_date),
            (&mut active_model.end_date, params.end_date),
            (&mut active_model.pickup_time, params.pickup_time),
            (&mut active_model.drop_time, params.drop_time),
            (&mut active_model.pick_up_loc, params.pick_up_loc),
            (&mut active_model.drop_location, params.drop_location),
            (&mut active_model.email, params.email),
            (&mut active_model.message, params.message),
            (&mut active_model.delivery_mode, params.delivery_mode),
            (&mut active_model.packages, params.packages),
            (&mut active_model.area, params.area),
        ];
        for (column, value) in optional {
            if let Some(value) = value {
                *column = ActiveValue::Set(Some(value));
            }
        }

        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Inquiry::from_entity(entity)))
    }

    /// Deletes an inquiry, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Inquiry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every inquiry, returning the number removed.
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Inquiry::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
