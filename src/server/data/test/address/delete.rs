use super::*;

/// Tests deleting an address referenced by a person.
///
/// Expected: Ok with address removed and person.address_id cleared
#[tokio::test]
async fn deletes_address_and_clears_person_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (address, _image, person) = factory::helpers::create_person_with_dependencies(db).await?;

    let repo = AddressRepository::new(db);
    repo.delete(address.id).await?;

    assert!(repo.get_by_id(address.id).await?.is_none());
    let db_person = entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_person.address_id, None);

    Ok(())
}
