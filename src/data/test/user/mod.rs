use crate::data::user::UserRepository;
use crate::model::user::{CreateUserParam, Role, UpdateUserParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_by_email;
mod update;
