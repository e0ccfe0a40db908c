use crate::server::{
    data::workorder::WorkorderRepository,
    model::workorder::WorkorderParams,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::sea_orm_active_enums::WorkorderState;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::workorder::WorkorderFactory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
mod get_by_person_id;
mod set_person;
mod unassign_all_from_person;
mod update;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 12, day, hour, 0, 0).unwrap()
}

fn params(id: Uuid, title: &str, person_id: Option<Uuid>) -> WorkorderParams {
    WorkorderParams {
        id,
        title: title.to_string(),
        description: "Mähen, entsorgen, düngen".to_string(),
        created: at(1, 8),
        started: at(1, 8),
        completed: at(1, 12),
        duration: Duration::hours(4),
        remark: String::new(),
        state: WorkorderState::Completed,
        person_id,
        address_id: None,
    }
}
