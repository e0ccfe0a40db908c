use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Postal address referenced by people and work orders.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    pub id: Uuid,
    pub street: String,
    pub number: String,
    /// Postal code, stored as `zip_code`.
    pub postal: String,
    pub city: String,
}
