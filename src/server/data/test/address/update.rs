use super::*;

/// Tests updating an address.
///
/// Expected: Ok with all fields replaced
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;

    let repo = AddressRepository::new(db);
    let updated = repo
        .update(address.id, params(Uuid::nil(), "Lindenweg", "Bienenbüttel"))
        .await?;

    assert_eq!(updated.id, address.id);
    assert_eq!(updated.street, "Lindenweg");
    assert_eq!(updated.city, "Bienenbüttel");

    let fetched = repo.get_by_id(address.id).await?.unwrap();
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests updating an unknown address.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_when_address_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AddressRepository::new(db)
        .update(Uuid::new_v4(), params(Uuid::nil(), "Lindenweg", "Celle"))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
