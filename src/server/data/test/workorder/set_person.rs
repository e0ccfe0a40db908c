use super::*;

/// Tests assigning a work order to a person.
///
/// Expected: Ok with person_id set, other fields untouched
#[tokio::test]
async fn assigns_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let workorder = factory::create_workorder(db).await?;

    let updated = WorkorderRepository::new(db)
        .set_person(workorder.id, Some(person.id))
        .await?;

    assert_eq!(updated.person_id, Some(person.id));
    assert_eq!(updated.title, workorder.title);

    Ok(())
}

/// Tests releasing a work order from its person.
///
/// Expected: Ok with person_id cleared
#[tokio::test]
async fn clears_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let workorder = factory::create_workorder_for_person(db, person.id).await?;

    let updated = WorkorderRepository::new(db)
        .set_person(workorder.id, None)
        .await?;

    assert_eq!(updated.person_id, None);

    Ok(())
}

/// Tests assigning an unknown work order.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_workorder_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WorkorderRepository::new(db)
        .set_person(Uuid::new_v4(), None)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
