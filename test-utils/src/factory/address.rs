//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test addresses with customizable fields.
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    street: String,
    number: String,
    zip_code: String,
    city: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - street: `"Street {n}"`, number: `"{n}"`
    /// - zip_code: `"29556"`, city: `"Suderburg"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            street: format!("Street {}", n),
            number: n.to_string(),
            zip_code: "29556".to_string(),
            city: "Suderburg".to_string(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(self.id),
            street: ActiveValue::Set(self.street),
            number: ActiveValue::Set(self.number),
            zip_code: ActiveValue::Set(self.zip_code),
            city: ActiveValue::Set(self.city),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values.
pub async fn create_address(db: &DatabaseConnection) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db).build().await
}
