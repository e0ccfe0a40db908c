use super::*;

/// Tests creating a person with a caller supplied id.
///
/// Verifies that the repository inserts the person under exactly the
/// given id and persists all scalar fields.
///
/// Expected: Ok with person stored under the given id
#[tokio::test]
async fn creates_person_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let id = Uuid::new_v4();
    let repo = PersonRepository::new(db);
    let person = repo.create(params(id, "Benno", "Bauer")).await?;

    assert_eq!(person.id, id);
    assert_eq!(person.first_name, "Benno");
    assert_eq!(person.email.as_deref(), Some("benno@example.com"));

    let db_person = entity::prelude::Person::find_by_id(id).one(db).await?;
    assert!(db_person.is_some());
    assert_eq!(db_person.unwrap().last_name, "Bauer");

    Ok(())
}

/// Tests creating a person that references an existing image and address.
///
/// Expected: Ok with both references persisted
#[tokio::test]
async fn creates_person_with_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;
    let image = factory::create_image(db).await?;

    let repo = PersonRepository::new(db);
    let mut person_params = params(Uuid::new_v4(), "Christine", "Conrad");
    person_params.address_id = Some(address.id);
    person_params.image_id = Some(image.id);
    let person = repo.create(person_params).await?;

    assert_eq!(person.address_id, Some(address.id));
    assert_eq!(person.image_id, Some(image.id));

    Ok(())
}

/// Tests creating a person with an id that is already taken.
///
/// Verifies that the primary key constraint rejects the duplicate.
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

    let existing = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    let result = repo.create(params(existing.id, "Dana", "Dörr")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a duplicate id slipping past the existence check becomes a conflict.
///
/// Two requests creating the same id can both pass `exists`; the insert of the
/// second one then fails on the primary key.
///
/// Expected: `AppError::Conflict`
#[tokio::test]
async fn duplicate_insert_maps_to_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    let err = repo
        .create(params(existing.id, "Dana", "Dörr"))
        .await
        .unwrap_err();
    let app_err = AppError::conflict_on_duplicate(err, || "taken".to_string());

    assert!(matches!(app_err, AppError::Conflict(ref msg) if msg == "taken"));

    Ok(())
}
