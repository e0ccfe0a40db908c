//! Person data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::person::{Person, PersonParams};

/// Repository providing database operations for people.
pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    /// Creates a new PersonRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PersonRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all people ordered by last name, then first name.
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let people = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::LastName)
            .order_by_asc(entity::person::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(Person::from_entity).collect())
    }

    /// Gets a person by id.
    ///
    /// # Returns
    /// - `Ok(Some(Person))` - Person found
    /// - `Ok(None)` - No person with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find_by_id(id).one(self.db).await?;

        Ok(person.map(Person::from_entity))
    }

    /// Checks whether a person with the given id exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Person::find()
            .filter(entity::person::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new person using `params.id` as primary key.
    ///
    /// # Returns
    /// - `Ok(Person)` - The inserted person
    /// - `Err(DbErr)` - Database error, e.g. duplicate id or unknown image/address reference
    pub async fn create(&self, params: PersonParams) -> Result<Person, DbErr> {
        let person = entity::person::ActiveModel {
            id: ActiveValue::Set(params.id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            image_path: ActiveValue::Set(params.image_path),
            remote_uri_path: ActiveValue::Set(params.remote_uri_path),
            image_id: ActiveValue::Set(params.image_id),
            address_id: ActiveValue::Set(params.address_id),
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(person))
    }

    /// Overwrites every scalar field of an existing person.
    ///
    /// `params.id` is ignored, the row is selected by `id`.
    ///
    /// # Returns
    /// - `Ok(Person)` - The updated person
    /// - `Err(DbErr::RecordNotFound)` - No person with this id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: Uuid, params: PersonParams) -> Result<Person, DbErr> {
        let person = entity::prelude::Person::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Person with id {} not found",
                id
            )))?;

        let mut active_model: entity::person::ActiveModel = person.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);
        active_model.image_path = ActiveValue::Set(params.image_path);
        active_model.remote_uri_path = ActiveValue::Set(params.remote_uri_path);
        active_model.image_id = ActiveValue::Set(params.image_id);
        active_model.address_id = ActiveValue::Set(params.address_id);

        let person = active_model.update(self.db).await?;

        Ok(Person::from_entity(person))
    }

    /// Deletes a person by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Person::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
