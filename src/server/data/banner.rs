use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::banner::{Banner, CreateBannerParams, UpdateBannerParams};

pub struct BannerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBannerParams) -> Result<Banner, DbErr> {
        let now = Utc::now();

        let entity = entity::banner::ActiveModel {
            name: ActiveValue::Set(params.name),
            image_url: ActiveValue::Set(params.image_url),
            alt_text: ActiveValue::Set(params.alt_text),
            is_active: ActiveValue::Set(params.is_active),
            display_order: ActiveValue::Set(params.display_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Banner::from_entity(entity))
    }

    /// Gets banners ordered by display order, then ID.
    ///
    /// # Arguments
    /// - `active_only` - When true, inactive banners are excluded
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Banner>, DbErr> {
        let mut query = entity::prelude::Banner::find();

        if active_only {
            query = query.filter(entity::banner::Column::IsActive.eq(true));
        }

        let entities = query
            .order_by_asc(entity::banner::Column::DisplayOrder)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Banner::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Banner>, DbErr> {
        Ok(entity::prelude::Banner::find_by_id(id)
            .one(self.db)
            .await?
            .map(Banner::from_entity))
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Banner))` - The updated banner
    /// - `Ok(None)` - No banner with this ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBannerParams,
    ) -> Result<Option<Banner>, DbErr> {
        let Some(existing) = entity::prelude::Banner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::banner::ActiveModel = existing.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
        }
        if let Some(alt_text) = params.alt_text {
            active_model.alt_text = ActiveValue::Set(alt_text);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(display_order) = params.display_order {
            active_model.display_order = ActiveValue::Set(display_order);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Banner::from_entity(entity)))
    }

    /// Deletes a banner, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
