//! Person service for business logic.
//!
//! Handles id assignment, conflict and reference checks for people, and the
//! assignment of work orders to people.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        address::AddressRepository, image::ImageRepository, person::PersonRepository,
        workorder::WorkorderRepository,
    },
    error::AppError,
    model::{
        person::{Person, PersonParams},
        workorder::Workorder,
    },
    util::id::short_id,
};

/// Service providing business logic for people.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new PersonService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PersonService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all people ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a person by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new person.
    ///
    /// A nil `params.id` is replaced with a new v4 id.
    ///
    /// # Returns
    /// - `Ok(Person)` - The created person
    /// - `Err(AppError::Conflict)` - A person with this id already exists
    /// - `Err(AppError::BadRequest)` - `image_id` or `address_id` references nothing
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, mut params: PersonParams) -> Result<Person, AppError> {
        let repo = PersonRepository::new(self.db);

        if params.id.is_nil() {
            params.id = Uuid::new_v4();
        } else if repo.exists(params.id).await? {
            return Err(AppError::Conflict(format!(
                "Person with id {} already exists",
                params.id
            )));
        }
        self.check_references(&params).await?;

        let id = params.id;
        let person = repo.create(params).await.map_err(|err| {
            AppError::conflict_on_duplicate(err, || format!("Person with id {} already exists", id))
        })?;
        tracing::debug!("Created person {}", person);

        Ok(person)
    }

    /// Overwrites all scalar fields of a person.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - The updated person
    /// - `Ok(None)` - No person with this id
    /// - `Err(AppError::BadRequest)` - Non-nil `params.id` differs from `id`, or unknown reference
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: Uuid, params: PersonParams) -> Result<Option<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        if !params.id.is_nil() && params.id != id {
            return Err(AppError::BadRequest(format!(
                "Person id {} in body does not match id {} in route",
                params.id, id
            )));
        }
        if !repo.exists(id).await? {
            return Ok(None);
        }
        self.check_references(&params).await?;

        let person = repo.update(id, params).await?;
        tracing::debug!("Updated person {}", person);

        Ok(Some(person))
    }

    /// Deletes a person after releasing their work orders.
    ///
    /// # Returns
    /// - `Ok(true)` - Person deleted
    /// - `Ok(false)` - No person with this id
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let repo = PersonRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(false);
        }

        let released = WorkorderRepository::new(self.db)
            .unassign_all_from_person(id)
            .await?;
        repo.delete(id).await?;
        tracing::debug!(
            "Deleted person {} and released {} work orders",
            short_id(&id),
            released
        );

        Ok(true)
    }

    /// Assigns a work order to a person.
    ///
    /// Assigning a work order the person already owns is a no-op.
    ///
    /// # Returns
    /// - `Ok(Workorder)` - The work order owned by the person
    /// - `Err(AppError::NotFound)` - Person or work order does not exist
    /// - `Err(AppError::Conflict)` - Work order belongs to another person
    pub async fn assign_workorder(
        &self,
        person_id: Uuid,
        workorder_id: Uuid,
    ) -> Result<Workorder, AppError> {
        let workorder_repo = WorkorderRepository::new(self.db);
        let (person, workorder) = self.find_person_and_workorder(person_id, workorder_id).await?;

        match workorder.person_id {
            Some(owner) if owner == person.id => Ok(workorder),
            Some(owner) => Err(AppError::Conflict(format!(
                "Workorder {} is already assigned to person {}",
                workorder_id, owner
            ))),
            None => {
                let workorder = workorder_repo.set_person(workorder_id, Some(person.id)).await?;
                tracing::debug!("Assigned workorder {} to person {}", workorder, person);

                Ok(workorder)
            }
        }
    }

    /// Releases a work order from a person.
    ///
    /// # Returns
    /// - `Ok(())` - Work order no longer has an owner
    /// - `Err(AppError::NotFound)` - Person or work order does not exist
    /// - `Err(AppError::BadRequest)` - Work order is not assigned to this person
    pub async fn unassign_workorder(
        &self,
        person_id: Uuid,
        workorder_id: Uuid,
    ) -> Result<(), AppError> {
        let workorder_repo = WorkorderRepository::new(self.db);
        let (person, workorder) = self.find_person_and_workorder(person_id, workorder_id).await?;

        if workorder.person_id != Some(person.id) {
            return Err(AppError::BadRequest(format!(
                "Workorder {} is not assigned to person {}",
                workorder_id, person_id
            )));
        }

        workorder_repo.set_person(workorder_id, None).await?;
        tracing::debug!("Unassigned workorder {} from person {}", workorder, person);

        Ok(())
    }

    async fn find_person_and_workorder(
        &self,
        person_id: Uuid,
        workorder_id: Uuid,
    ) -> Result<(Person, Workorder), AppError> {
        let person = PersonRepository::new(self.db)
            .get_by_id(person_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Person with given id not found".to_string()))?;
        let workorder = WorkorderRepository::new(self.db)
            .get_by_id(workorder_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Workorder with given id not found".to_string()))?;

        Ok((person, workorder))
    }

    /// Rejects image and address ids that do not exist.
    async fn check_references(&self, params: &PersonParams) -> Result<(), AppError> {
        if let Some(image_id) = params.image_id {
            if ImageRepository::new(self.db).get_by_id(image_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Image with id {} does not exist",
                    image_id
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
