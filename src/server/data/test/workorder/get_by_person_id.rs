use super::*;

/// Tests listing the work orders of a person.
///
/// Verifies that work orders of other people and unassigned work orders
/// are not returned.
///
/// Expected: Ok with only the person's work orders
#[tokio::test]
async fn returns_only_workorders_of_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, owned) = factory::helpers::create_person_with_workorders(db, 3).await?;
    factory::helpers::create_person_with_workorders(db, 2).await?;
    factory::create_workorder(db).await?;

    let workorders = WorkorderRepository::new(db)
        .get_by_person_id(person.id)
        .await?;

    assert_eq!(workorders.len(), 3);
    assert!(workorders.iter().all(|w| w.person_id == Some(person.id)));
    for workorder in &owned {
        assert!(workorders.iter().any(|w| w.id == workorder.id));
    }

    Ok(())
}

/// Tests listing work orders of a person without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_person_without_workorders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let workorders = WorkorderRepository::new(db)
        .get_by_person_id(person.id)
        .await?;

    assert!(workorders.is_empty());

    Ok(())
}
