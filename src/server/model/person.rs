//! Person domain model and parameters.

use std::fmt;

use uuid::Uuid;

use crate::{model::person::PersonDto, server::util::id::short_id};

/// A person work orders can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub remote_uri_path: Option<String>,
    pub image_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
}

impl Person {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            image_path: entity.image_path,
            remote_uri_path: entity.remote_uri_path,
            image_id: entity.image_id,
            address_id: entity.address_id,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            image_path: self.image_path,
            remote_uri_path: self.remote_uri_path,
            image_id: self.image_id,
            address_id: self.address_id,
        }
    }
}

/// `First Last 01234567`, used in log lines.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first_name, self.last_name, short_id(&self.id))
    }
}

/// Fields written when creating or updating a person.
///
/// Work orders are never taken from a request body; they are assigned through
/// their own endpoints.
#[derive(Debug, Clone)]
pub struct PersonParams {
    /// Requested id, nil when the server should assign one.
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub remote_uri_path: Option<String>,
    pub image_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
}

impl PersonParams {
    pub fn from_dto(dto: PersonDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            image_path: dto.image_path,
            remote_uri_path: dto.remote_uri_path,
            image_id: dto.image_id,
            address_id: dto.address_id,
        }
    }
}
