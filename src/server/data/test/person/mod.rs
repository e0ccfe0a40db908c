use crate::server::{data::person::PersonRepository, error::AppError, model::person::PersonParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_id;
mod update;

fn params(id: Uuid, first_name: &str, last_name: &str) -> PersonParams {
    PersonParams {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        phone: None,
        image_path: None,
        remote_uri_path: None,
        image_id: None,
        address_id: None,
    }
}
