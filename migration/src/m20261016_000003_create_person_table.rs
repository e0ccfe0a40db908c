use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000001_create_address_table::Address, m20261016_000002_create_image_table::Image,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_uuid(Person::Id))
                    .col(string(Person::FirstName))
                    .col(string(Person::LastName))
                    .col(string_null(Person::Email))
                    .col(string_null(Person::Phone))
                    .col(string_null(Person::ImagePath))
                    .col(string_null(Person::RemoteUriPath))
                    .col(uuid_null(Person::ImageId))
                    .col(uuid_null(Person::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_image_id")
                            .from(Person::Table, Person::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_address_id")
                            .from(Person::Table, Person::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "people")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    ImagePath,
    RemoteUriPath,
    ImageId,
    AddressId,
}
