use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A person work orders can be assigned to.
///
/// A nil `id` on create lets the server assign a new one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonDto {
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
