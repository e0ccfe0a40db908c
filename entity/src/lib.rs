//! SeaORM entities for the workmanager database.

pub mod prelude;

pub mod address;
pub mod image;
pub mod person;
pub mod sea_orm_active_enums;
pub mod workorder;
