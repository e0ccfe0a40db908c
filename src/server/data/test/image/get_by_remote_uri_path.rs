use super::*;

/// Tests looking up an image by its URI.
///
/// Expected: Ok(Some) for the matching record only
#[tokio::test]
async fn returns_image_for_uri() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;
    factory::create_image(db).await?;

    let found = ImageRepository::new(db)
        .get_by_remote_uri_path(&image.remote_uri_path)
        .await?;

    assert_eq!(found.map(|i| i.id), Some(image.id));

    Ok(())
}

/// Tests looking up an unknown URI.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uri() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_image(db).await?;

    let found = ImageRepository::new(db)
        .get_by_remote_uri_path(&format!("{}/missing0.abc", DEFAULT_BASE_URI))
        .await?;

    assert!(found.is_none());

    Ok(())
}
