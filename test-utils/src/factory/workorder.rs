//! Work order factory for creating test work order entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::WorkorderState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test work orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::workorder::WorkorderFactory;
///
/// let workorder = WorkorderFactory::new(&db)
///     .title("Rasenmähen, 500 m2")
///     .person_id(Some(person.id))
///     .build()
///     .await?;
/// ```
pub struct WorkorderFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    title: String,
    description: String,
    created: DateTime<Utc>,
    started: DateTime<Utc>,
    completed: DateTime<Utc>,
    duration: Duration,
    state: WorkorderState,
    person_id: Option<Uuid>,
    address_id: Option<Uuid>,
}

impl<'a> WorkorderFactory<'a> {
    /// Creates a new WorkorderFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - title: `"Workorder {n}"`, description: `"Test workorder description"`
    /// - created/started/completed: now, duration: zero
    /// - state: `WorkorderState::Default`
    /// - person_id, address_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        let now = Utc::now();
        Self {
            db,
            id: Uuid::new_v4(),
            title: format!("Workorder {}", n),
            description: "Test workorder description".to_string(),
            created: now,
            started: now,
            completed: now,
            duration: Duration::zero(),
            state: WorkorderState::Default,
            person_id: None,
            address_id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn state(mut self, state: WorkorderState) -> Self {
        self.state = state;
        self
    }

    /// Sets the owning person. The person row must already exist.
    pub fn person_id(mut self, person_id: Option<Uuid>) -> Self {
        self.person_id = person_id;
        self
    }

    pub fn address_id(mut self, address_id: Option<Uuid>) -> Self {
        self.address_id = address_id;
        self
    }

    /// Builds and inserts the work order entity into the database.
    pub async fn build(self) -> Result<entity::workorder::Model, DbErr> {
        entity::workorder::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created: ActiveValue::Set(self.created),
            started: ActiveValue::Set(self.started),
            completed: ActiveValue::Set(self.completed),
            duration: ActiveValue::Set(self.duration.num_nanoseconds().unwrap_or(i64::MAX)),
            remark: ActiveValue::Set(String::new()),
            state: ActiveValue::Set(self.state),
            person_id: ActiveValue::Set(self.person_id),
            address_id: ActiveValue::Set(self.address_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unassigned work order with default values.
pub async fn create_workorder(db: &DatabaseConnection) -> Result<entity::workorder::Model, DbErr> {
    WorkorderFactory::new(db).build().await
}

/// Creates a work order owned by the given person.
pub async fn create_workorder_for_person(
    db: &DatabaseConnection,
    person_id: Uuid,
) -> Result<entity::workorder::Model, DbErr> {
    WorkorderFactory::new(db)
        .person_id(Some(person_id))
        .build()
        .await
}
