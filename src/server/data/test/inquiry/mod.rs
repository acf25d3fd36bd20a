use crate::server::{
    data::inquiry::InquiryRepository,
    model::inquiry::{CreateInquiryParams, UpdateInquiryParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
