//! Work order domain model and parameters.
//!
//! Durations are `chrono::Duration` inside the service layer and cross both the
//! database and the wire as i64 nanoseconds.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::WorkorderState;
use uuid::Uuid;

use crate::{
    model::workorder::{WorkorderDto, WorkorderStateDto},
    server::util::id::short_id,
};

/// A unit of work, optionally owned by a person.
#[derive(Debug, Clone, PartialEq)]
pub struct Workorder {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub started: DateTime<Utc>,
    pub completed: DateTime<Utc>,
    pub duration: Duration,
    pub remark: String,
    pub state: WorkorderState,
    pub person_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
}

impl Workorder {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::workorder::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created: entity.created,
            started: entity.started,
            completed: entity.completed,
            duration: Duration::nanoseconds(entity.duration),
            remark: entity.remark,
            state: entity.state,
            person_id: entity.person_id,
            address_id: entity.address_id,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> WorkorderDto {
        WorkorderDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created: self.created,
            started: self.started,
            completed: self.completed,
            duration: duration_to_nanos(self.duration),
            remark: self.remark,
            state: state_into_dto(self.state),
            person_id: self.person_id,
            address_id: self.address_id,
        }
    }
}

/// `Title 01234567`, used in log lines.
impl fmt::Display for Workorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, short_id(&self.id))
    }
}

/// Fields written when creating or updating a work order.
#[derive(Debug, Clone)]
pub struct WorkorderParams {
    /// Requested id, nil when the server should assign one.
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created: DateTime<Utc>,
    pub started: DateTime<Utc>,
    pub completed: DateTime<Utc>,
    pub duration: Duration,
    pub remark: String,
    pub state: WorkorderState,
    pub person_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
}

impl WorkorderParams {
    pub fn from_dto(dto: WorkorderDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            created: dto.created,
            started: dto.started,
            completed: dto.completed,
            duration: Duration::nanoseconds(dto.duration),
            remark: dto.remark,
            state: state_from_dto(dto.state),
            person_id: dto.person_id,
            address_id: dto.address_id,
        }
    }
}

/// Nanoseconds of a duration, saturating at the i64 range.
pub fn duration_to_nanos(duration: Duration) -> i64 {
    duration.num_nanoseconds().unwrap_or(if duration < Duration::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

fn state_into_dto(state: WorkorderState) -> WorkorderStateDto {
    match state {
        WorkorderState::Default => WorkorderStateDto::Default,
        WorkorderState::Assigned => WorkorderStateDto::Assigned,
        WorkorderState::Started => WorkorderStateDto::Started,
        WorkorderState::Completed => WorkorderStateDto::Completed,
    }
}

fn state_from_dto(state: WorkorderStateDto) -> WorkorderState {
    match state {
        WorkorderStateDto::Default => WorkorderState::Default,
        WorkorderStateDto::Assigned => WorkorderState::Assigned,
        WorkorderStateDto::Started => WorkorderState::Started,
        WorkorderStateDto::Completed => WorkorderState::Completed,
    }
}
