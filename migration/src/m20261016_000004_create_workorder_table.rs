use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000001_create_address_table::Address, m20261016_000003_create_person_table::Person,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workorder::Table)
                    .if_not_exists()
                    .col(pk_uuid(Workorder::Id))
                    .col(string(Workorder::Title))
                    .col(text(Workorder::Description))
                    .col(timestamp_with_time_zone(Workorder::Created))
                    .col(timestamp_with_time_zone(Workorder::Started))
                    .col(timestamp_with_time_zone(Workorder::Completed))
                    .col(big_integer(Workorder::Duration).default(0))
                    .col(text(Workorder::Remark))
                    .col(string(Workorder::State).default("Default"))
                    .col(uuid_null(Workorder::PersonId))
                    .col(uuid_null(Workorder::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workorder_person_id")
                            .from(Workorder::Table, Workorder::PersonId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workorder_address_id")
                            .from(Workorder::Table, Workorder::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workorder_person_id")
                    .table(Workorder::Table)
                    .col(Workorder::PersonId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workorder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workorder {
    #[sea_orm(iden = "workorders")]
    Table,
    Id,
    Title,
    Description,
    Created,
    Started,
    Completed,
    Duration,
    Remark,
    State,
    PersonId,
    AddressId,
}
