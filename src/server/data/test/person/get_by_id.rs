use super::*;

/// Tests fetching an existing person.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_person_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);
    let person = repo.get_by_id(created.id).await?;

    assert!(person.is_some());
    let person = person.unwrap();
    assert_eq!(person.id, created.id);
    assert_eq!(person.first_name, created.first_name);
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests fetching an unknown id.
///
/// Expected: Ok(None) and `exists` false
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let id = Uuid::new_v4();

    assert!(repo.get_by_id(id).await?.is_none());
    assert!(!repo.exists(id).await?);

    Ok(())
}
