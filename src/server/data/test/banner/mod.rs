use crate::server::{
    data::banner::BannerRepository,
    model::banner::{CreateBannerParams, UpdateBannerParams},
};
use entity::prelude::Banner;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::banner::BannerFactory};

mod create;
mod delete;
mod get_all;
mod update;
