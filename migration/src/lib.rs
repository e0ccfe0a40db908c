pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_address_table;
mod m20261016_000002_create_image_table;
mod m20261016_000003_create_person_table;
mod m20261016_000004_create_workorder_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_address_table::Migration),
            Box::new(m20261016_000002_create_image_table::Migration),
            Box::new(m20261016_000003_create_person_table::Migration),
            Box::new(m20261016_000004_create_workorder_table::Migration),
        ]
    }
}
