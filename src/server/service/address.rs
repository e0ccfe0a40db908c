use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::address::AddressRepository,
    error::AppError,
    model::address::{Address, AddressParams},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Address>, AppError> {
        Ok(AddressRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Address>, AppError> {
        Ok(AddressRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates an address, assigning a new id if `params.id` is nil
    pub async fn create(&self, mut params: AddressParams) -> Result<Address, AppError> {
        let repo = AddressRepository::new(self.db);

        if params.id.is_nil() {
            params.id = Uuid::new_v4();
        } else if repo.exists(params.id).await? {
            return Err(AppError::Conflict(format!(
                "Address with id {} already exists",
                params.id
            )));
        }

        let id = params.id;
        repo.create(params).await.map_err(|err| {
            AppError::conflict_on_duplicate(err, || format!("Address with id {} already exists", id))
        })
    }

    /// Overwrites the fields of an address
    /// Returns None if the address doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        params: AddressParams,
    ) -> Result<Option<Address>, AppError> {
        let repo = AddressRepository::new(self.db);

        if !params.id.is_nil() && params.id != id {
            return Err(AppError::BadRequest(format!(
                "Address id {} in body does not match id {} in route",
                params.id, id
            )));
        }
        if !repo.exists(id).await? {
            return Ok(None);
        }

        Ok(Some(repo.update(id, params).await?))
    }

    /// Deletes an address, references from people and work orders are cleared
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = AddressRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
