use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::address::{Address, AddressParams};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all addresses ordered by city and street.
    pub async fn get_all(&self) -> Result<Vec<Address>, DbErr> {
        let addresses = entity::prelude::Address::find()
            .order_by_asc(entity::address::Column::City)
            .order_by_asc(entity::address::Column::Street)
            .all(self.db)
            .await?;

        Ok(addresses.into_iter().map(Address::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Address>, DbErr> {
        let address = entity::prelude::Address::find_by_id(id).one(self.db).await?;

        Ok(address.map(Address::from_entity))
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Address::find()
            .filter(entity::address::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new address using `params.id` as primary key.
    pub async fn create(&self, params: AddressParams) -> Result<Address, DbErr> {
        let address = entity::address::ActiveModel {
            id: ActiveValue::Set(params.id),
            street: ActiveValue::Set(params.street),
            number: ActiveValue::Set(params.number),
            zip_code: ActiveValue::Set(params.zip_code),
            city: ActiveValue::Set(params.city),
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(address))
    }

    /// Overwrites the fields of an existing address.
    pub async fn update(&self, id: Uuid, params: AddressParams) -> Result<Address, DbErr> {
        let address = entity::prelude::Address::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Address with id {} not found",
                id
            )))?;

        let mut active_model: entity::address::ActiveModel = address.into();
        active_model.street = ActiveValue::Set(params.street);
        active_model.number = ActiveValue::Set(params.number);
        active_model.zip_code = ActiveValue::Set(params.zip_code);
        active_model.city = ActiveValue::Set(params.city);

        let address = active_model.update(self.db).await?;

        Ok(Address::from_entity(address))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Address::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
