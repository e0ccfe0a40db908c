use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{address::AddressRepository, person::PersonRepository, workorder::WorkorderRepository},
    error::AppError,
    model::workorder::{Workorder, WorkorderParams},
    util::id::short_id,
};

pub struct WorkorderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkorderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all work orders created at or after `created_from`, oldest first
    pub async fn get_all(&self, created_from: DateTime<Utc>) -> Result<Vec<Workorder>, AppError> {
        let repo = WorkorderRepository::new(self.db);

        Ok(repo.get_all(created_from).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Workorder>, AppError> {
        let repo = WorkorderRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Gets the work orders of a person
    /// Returns None if the person doesn't exist
    pub async fn get_by_person_id(
        &self,
        person_id: Uuid,
    ) -> Result<Option<Vec<Workorder>>, AppError> {
        if !PersonRepository::new(self.db).exists(person_id).await? {
            return Ok(None);
        }

        let repo = WorkorderRepository::new(self.db);

        Ok(Some(repo.get_by_person_id(person_id).await?))
    }

    /// Creates a work order, assigning a new id if `params.id` is nil
    pub async fn create(&self, mut params: WorkorderParams) -> Result<Workorder, AppError> {
        let repo = WorkorderRepository::new(self.db);

        if params.id.is_nil() {
            params.id = Uuid::new_v4();
        } else if repo.exists(params.id).await? {
            return Err(AppError::Conflict(format!(
                "Workorder with id {} already exists",
                params.id
            )));
        }
        self.check_references(&params).await?;

        let id = params.id;
        let workorder = repo.create(params).await.map_err(|err| {
            AppError::conflict_on_duplicate(err, || {
                format!("Workorder with id {} already exists", id)
            })
        })?;
        tracing::debug!("Created workorder {}", workorder);

        Ok(workorder)
    }

    /// Overwrites all fields of a work order
    /// Returns None if the work order doesn't exist
    pub async fn update(
        &self,
        id: Uuid,
        params: WorkorderParams,
    ) -> Result<Option<Workorder>, AppError> {
        let repo = WorkorderRepository::new(self.db);

        if !params.id.is_nil() && params.id != id {
            return Err(AppError::BadRequest(format!(
                "Workorder id {} in body does not match id {} in route",
                params.id, id
            )));
        }
        if !repo.exists(id).await? {
            return Ok(None);
        }
        self.check_references(&params).await?;

        let workorder = repo.update(id, params).await?;
        tracing::debug!("Updated workorder {}", workorder);

        Ok(Some(workorder))
    }

    /// Deletes a work order
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = WorkorderRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        repo.delete(id).await?;
        tracing::debug!("Deleted workorder {}", short_id(&id));

        Ok(true)
    }

    /// Rejects person and address ids that do not exist
    async fn check_references(&self, params: &WorkorderParams) -> Result<(), AppError> {
        if let Some(person_id) = params.person_id {
            if !PersonRepository::new(self.db).exists(person_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Person with id {} does not exist",
                    person_id
                )));
            }
        }
        if let Some(address_id) = params.address_id {
            if !AddressRepository::new(self.db).exists(address_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Address with id {} does not exist",
                    address_id
                )));
            }
        }

        Ok(())
    }
}
