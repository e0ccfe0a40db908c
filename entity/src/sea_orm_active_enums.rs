use sea_orm::entity::prelude::*;

/// Lifecycle state of a work order, stored by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum WorkorderState {
    #[default]
    #[sea_orm(string_value = "Default")]
    Default,
    #[sea_orm(string_value = "Assigned")]
    Assigned,
    #[sea_orm(string_value = "Started")]
    Started,
    #[sea_orm(string_value = "Completed")]
    Completed,
}
