use crate::server::{data::address::AddressRepository, model::address::AddressParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod update;

fn params(id: Uuid, street: &str, city: &str) -> AddressParams {
    AddressParams {
        id,
        street: street.to_string(),
        number: "1".to_string(),
        zip_code: "29525".to_string(),
        city: city.to_string(),
    }
}
