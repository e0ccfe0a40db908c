use super::*;

/// Tests updating all scalar fields of a person.
///
/// Verifies that optional fields can be set as well as cleared and
/// that references are overwritten.
///
/// Expected: Ok with every field replaced
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (address, _image, person) = factory::helpers::create_person_with_dependencies(db).await?;

    let repo = PersonRepository::new(db);
    let mut update = params(Uuid::nil(), "Fritz", "Fischer");
    update.email = None;
    update.phone = Some("0511 123456".to_string());
    update.address_id = Some(address.id);
    update.image_id = None;

    let updated = repo.update(person.id, update).await?;

    assert_eq!(updated.id, person.id);
    assert_eq!(updated.first_name, "Fritz");
    assert_eq!(updated.last_name, "Fischer");
    assert_eq!(updated.email, None);
    assert_eq!(updated.phone.as_deref(), Some("0511 123456"));
    assert_eq!(updated.address_id, Some(address.id));
    assert_eq!(updated.image_id, None);

    Ok(())
}

/// Tests updating an unknown person.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_person_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PersonRepository::new(db)
        .update(Uuid::new_v4(), params(Uuid::nil(), "Gerda", "Gans"))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
