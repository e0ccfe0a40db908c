//! Person factory for creating test person entities.
//!
//! This module provides factory methods for creating person entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test people with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&db)
///     .first_name("Berta")
///     .last_name("Bauer")
///     .email(Some("b.bauer@gmx.de".to_string()))
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<String>,
    image_id: Option<Uuid>,
    address_id: Option<Uuid>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - first_name: `"First{n}"`, last_name: `"Last{n}"`
    /// - email: `Some("person{n}@example.com")`
    /// - phone, image_id, address_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            first_name: format!("First{}", n),
            last_name: format!("Last{}", n),
            email: Some(format!("person{}@example.com", n)),
            phone: None,
            image_id: None,
            address_id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the referenced image. The image row must already exist.
    pub fn image_id(mut self, image_id: Option<Uuid>) -> Self {
        self.image_id = image_id;
        self
    }

    /// Sets the referenced address. The address row must already exist.
    pub fn address_id(mut self, address_id: Option<Uuid>) -> Self {
        self.address_id = address_id;
        self
    }

    /// Builds and inserts the person entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            id: ActiveValue::Set(self.id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            image_path: ActiveValue::Set(None),
            remote_uri_path: ActiveValue::Set(None),
            image_id: ActiveValue::Set(self.image_id),
            address_id: ActiveValue::Set(self.address_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
///
/// Shorthand for `PersonFactory::new(db).build().await`.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
