//! Work order fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::{sea_orm_active_enums::WorkorderState, workorder};
use uuid::Uuid;

/// Default test work order id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x0100_0000_0000_0000_0000_0000_0000_0000);

/// Default test work order title.
pub const DEFAULT_TITLE: &str = "Rasenmähen, 500 m2";

/// Default creation time, `2023-12-01T08:00:00Z`.
pub fn default_created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 12, 1, 8, 0, 0).unwrap()
}

/// Creates a work order entity model with default values.
///
/// # Default Values
/// - id: `01000000-0000-0000-0000-000000000000`
/// - title: `"Rasenmähen, 500 m2"`
/// - created/started: `2023-12-01T08:00:00Z`, completed: four hours later
/// - duration: four hours, state: `Completed`
/// - person_id, address_id: `None`
pub fn entity() -> workorder::Model {
    entity_builder().build()
}

/// Creates a work order entity builder for customization.
pub fn entity_builder() -> WorkorderEntityBuilder {
    WorkorderEntityBuilder::default()
}

/// Builder for creating customized work order entity models.
pub struct WorkorderEntityBuilder {
    id: Uuid,
    title: String,
    state: WorkorderState,
    duration: i64,
    person_id: Option<Uuid>,
}

impl Default for WorkorderEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            title: DEFAULT_TITLE.to_string(),
            state: WorkorderState::Completed,
            duration: 4 * 3_600 * 1_000_000_000,
            person_id: None,
        }
    }
}

impl WorkorderEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn state(mut self, state: WorkorderState) -> Self {
        self.state = state;
        self
    }

    /// Sets the duration in nanoseconds.
    pub fn duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    pub fn person_id(mut self, person_id: Option<Uuid>) -> Self {
        self.person_id = person_id;
        self
    }

    /// Builds the work order entity model.
    pub fn build(self) -> workorder::Model {
        let created = default_created();
        workorder::Model {
            id: self.id,
            title: self.title,
            description: "Mähen, entsorgen, düngen".to_string(),
            created,
            started: created,
            completed: created + chrono::Duration::hours(4),
            duration: self.duration,
            remark: String::new(),
            state: self.state,
            person_id: self.person_id,
            address_id: None,
        }
    }
}
