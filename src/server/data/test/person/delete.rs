use super::*;

/// Tests deleting a person.
///
/// Expected: Ok with person removed
#[tokio::test]
async fn deletes_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    repo.delete(person.id).await?;

    let db_person = entity::prelude::Person::find_by_id(person.id).one(db).await?;
    assert!(db_person.is_none());

    Ok(())
}

/// Tests deleting an unknown person.
///
/// Expected: Ok, deleting nothing is not an error at this layer
#[tokio::test]
async fn succeeds_when_person_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PersonRepository::new(db).delete(Uuid::new_v4()).await;

    assert!(result.is_ok());

    Ok(())
}
