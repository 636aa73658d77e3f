use crate::error::AppError;
use crate::model::catway::{CreateCatwayDto, UpdateCatwayDto};
use crate::service::catway::CatwayService;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod update_state;
