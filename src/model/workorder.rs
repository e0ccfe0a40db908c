use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::server::util::iso8601;

/// Lifecycle state of a work order, serialized by name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
pub enum WorkorderStateDto {
    #[default]
    Default,
    Assigned,
    Started,
    Completed,
}

/// A unit of work, optionally owned by a person.
///
/// Timestamps are written as `YYYY-MM-DDTHH:MM:SSZ` and accept up to seven
/// fractional second digits or a `+HH:MM` offset on input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkorderDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "iso8601")]
    pub created: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub started: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub completed: DateTime<Utc>,
    /// Duration of the work in nanoseconds.
    pub duration: i64,
    pub remark: String,
    pub state: WorkorderStateDto,
    pub person_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
}

impl Default for WorkorderDto {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            title: String::new(),
            description: String::new(),
            created: now,
            started: now,
            completed: now,
            duration: 0,
            remark: String::new(),
            state: WorkorderStateDto::Default,
            person_id: None,
            address_id: None,
        }
    }
}
