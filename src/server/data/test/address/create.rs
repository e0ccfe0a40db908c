use super::*;

/// Tests creating addresses and listing them.
///
/// Expected: Ok with addresses ordered by city, then street
#[tokio::test]
async fn creates_and_lists_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddressRepository::new(db);
    let uelzen = repo.create(params(Uuid::new_v4(), "Bahnhofstraße", "Uelzen")).await?;
    let celle = repo.create(params(Uuid::new_v4(), "Markt", "Celle")).await?;

    assert_eq!(uelzen.zip_code, "29525");
    assert!(repo.exists(uelzen.id).await?);

    let addresses = repo.get_all().await?;
    let ids: Vec<_> = addresses.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![celle.id, uelzen.id]);

    Ok(())
}
