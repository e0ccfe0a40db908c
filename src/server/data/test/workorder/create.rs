use super::*;

/// Tests creating a work order.
///
/// Verifies that timestamps, state and the duration survive the round
/// trip through the nanosecond column.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_workorder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let repo = WorkorderRepository::new(db);
    let workorder = repo.create(params(id, "Rasenmähen, 500 m2", None)).await?;

    assert_eq!(workorder.id, id);
    assert_eq!(workorder.created, at(1, 8));
    assert_eq!(workorder.completed, at(1, 12));
    assert_eq!(workorder.duration, Duration::hours(4));
    assert_eq!(workorder.state, WorkorderState::Completed);

    let db_workorder = entity::prelude::Workorder::find_by_id(id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_workorder.duration, 4 * 3_600 * 1_000_000_000);

    Ok(())
}

/// Tests creating a work order owned by an existing person.
///
/// Expected: Ok with person_id set
#[tokio::test]
async fn creates_workorder_for_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let workorder = WorkorderRepository::new(db)
        .create(params(Uuid::new_v4(), "Hecke schneiden", Some(person.id)))
        .await?;

    assert_eq!(workorder.person_id, Some(person.id));

    Ok(())
}

/// Tests creating a work order with an id that is already taken.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_workorder(db).await?;

    let result = WorkorderRepository::new(db)
        .create(params(existing.id, "Fenster putzen", None))
        .await;

    assert!(result.is_err());

    Ok(())
}
