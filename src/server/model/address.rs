//! Address domain model and parameters.

use uuid::Uuid;

use crate::model::address::AddressDto;

/// Postal address referenced by people and work orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
}

impl Address {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            street: entity.street,
            number: entity.number,
            zip_code: entity.zip_code,
            city: entity.city,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            street: self.street,
            number: self.number,
            postal: self.zip_code,
            city: self.city,
        }
    }
}

/// Fields written when creating or updating an address.
#[derive(Debug, Clone)]
pub struct AddressParams {
    /// Requested id, nil when the server should assign one.
    pub id: Uuid,
    pub street: String,
    pub number: String,
    pub zip_code: String,
    pub city: String,
}

impl AddressParams {
    pub fn from_dto(dto: AddressDto) -> Self {
        Self {
            id: dto.id,
            street: dto.street,
            number: dto.number,
            zip_code: dto.postal,
            city: dto.city,
        }
    }
}
