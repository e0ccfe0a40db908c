use super::*;

/// Tests updating every field of a work order.
///
/// Expected: Ok with all fields replaced and the id kept
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;
    let workorder = factory::create_workorder(db).await?;

    let mut update = params(Uuid::nil(), "Laub entfernen", Some(person.id));
    update.state = WorkorderState::Started;
    update.duration = Duration::minutes(45);
    update.remark = "Nur vorne".to_string();

    let updated = WorkorderRepository::new(db)
        .update(workorder.id, update)
        .await?;

    assert_eq!(updated.id, workorder.id);
    assert_eq!(updated.title, "Laub entfernen");
    assert_eq!(updated.state, WorkorderState::Started);
    assert_eq!(updated.duration, Duration::minutes(45));
    assert_eq!(updated.remark, "Nur vorne");
    assert_eq!(updated.person_id, Some(person.id));
    assert_eq!(updated.created, at(1, 8));

    Ok(())
}

/// Tests updating an unknown work order.
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
        .update(Uuid::new_v4(), params(Uuid::nil(), "Zaun streichen", None))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
