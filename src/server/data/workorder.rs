//! Work order data repository for database operations.
//!
//! Besides plain CRUD this repository owns the person assignment of work orders:
//! setting or clearing `person_id` on a single work order and releasing every work
//! order of a person before that person is deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::workorder::{duration_to_nanos, Workorder, WorkorderParams};

/// Repository providing database operations for work orders.
pub struct WorkorderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkorderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all work orders created at or after `created_from`, oldest first.
    ///
    /// `DateTime::<Utc>::MIN_UTC` disables the filter.
    pub async fn get_all(&self, created_from: DateTime<Utc>) -> Result<Vec<Workorder>, DbErr> {
        let mut query = entity::prelude::Workorder::find();
        if created_from > DateTime::<Utc>::MIN_UTC {
            query = query.filter(entity::workorder::Column::Created.gte(created_from));
        }

        let workorders = query
            .order_by_asc(entity::workorder::Column::Created)
            .all(self.db)
            .await?;

        Ok(workorders.into_iter().map(Workorder::from_entity).collect())
    }

    /// Gets a work order by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Workorder>, DbErr> {
        let workorder = entity::prelude::Workorder::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(workorder.map(Workorder::from_entity))
    }

    /// Gets the work orders assigned to a person, oldest first.
    pub async fn get_by_person_id(&self, person_id: Uuid) -> Result<Vec<Workorder>, DbErr> {
        let workorders = entity::prelude::Workorder::find()
            .filter(entity::workorder::Column::PersonId.eq(person_id))
            .order_by_asc(entity::workorder::Column::Created)
            .all(self.db)
            .await?;

        Ok(workorders.into_iter().map(Workorder::from_entity).collect())
    }

    /// Checks whether a work order with the given id exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Workorder::find()
            .filter(entity::workorder::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new work order using `params.id` as primary key.
    pub async fn create(&self, params: WorkorderParams) -> Result<Workorder, DbErr> {
        let workorder = entity::workorder::ActiveModel {
            id: ActiveValue::Set(params.id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created: ActiveValue::Set(params.created),
            started: ActiveValue::Set(params.started),
            completed: ActiveValue::Set(params.completed),
            duration: ActiveValue::Set(duration_to_nanos(params.duration)),
            remark: ActiveValue::Set(params.remark),
            state: ActiveValue::Set(params.state),
            person_id: ActiveValue::Set(params.person_id),
            address_id: ActiveValue::Set(params.address_id),
        }
        .insert(self.db)
        .await?;

        Ok(Workorder::from_entity(workorder))
    }

    /// Overwrites every scalar field of an existing work order.
    ///
    /// # Returns
    /// - `Ok(Workorder)` - The updated work order
    /// - `Err(DbErr::RecordNotFound)` - No work order with this id
    pub async fn update(&self, id: Uuid, params: WorkorderParams) -> Result<Workorder, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.created = ActiveValue::Set(params.created);
        active_model.started = ActiveValue::Set(params.started);
        active_model.completed = ActiveValue::Set(params.completed);
        active_model.duration = ActiveValue::Set(duration_to_nanos(params.duration));
        active_model.remark = ActiveValue::Set(params.remark);
        active_model.state = ActiveValue::Set(params.state);
        active_model.person_id = ActiveValue::Set(params.person_id);
        active_model.address_id = ActiveValue::Set(params.address_id);

        let workorder = active_model.update(self.db).await?;

        Ok(Workorder::from_entity(workorder))
    }

    /// Sets or clears the owning person of a work order.
    ///
    /// # Returns
    /// - `Ok(Workorder)` - The work order with its new owner
    /// - `Err(DbErr::RecordNotFound)` - No work order with this id
    pub async fn set_person(&self, id: Uuid, person_id: Option<Uuid>) -> Result<Workorder, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.person_id = ActiveValue::Set(person_id);

        let workorder = active_model.update(self.db).await?;

        Ok(Workorder::from_entity(workorder))
    }

    /// Clears `person_id` on every work order of a person.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of released work orders
    pub async fn unassign_all_from_person(&self, person_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Workorder::update_many()
            .col_expr(entity::workorder::Column::PersonId, Expr::value(None::<Uuid>))
            .filter(entity::workorder::Column::PersonId.eq(person_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a work order by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Workorder::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn find_active_model(&self, id: Uuid) -> Result<entity::workorder::ActiveModel, DbErr> {
        let workorder = entity::prelude::Workorder::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Workorder with id {} not found",
                id
            )))?;

        Ok(workorder.into())
    }
}
