use super::*;

/// Tests deleting a work order.
///
/// Verifies that the owning person is left untouched.
///
/// Expected: Ok with work order removed
#[tokio::test]
async fn deletes_workorder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let workorder = factory::create_workorder_for_person(db, person.id).await?;

    let repo = WorkorderRepository::new(db);
    repo.delete(workorder.id).await?;

    assert!(!repo.exists(workorder.id).await?);
    let db_person = entity::prelude::Person::find_by_id(person.id).one(db).await?;
    assert!(db_person.is_some());

    Ok(())
}
