use super::*;

/// Tests creating an image record.
///
/// Expected: Ok with a fresh id and the given fields
#[tokio::test]
async fn creates_image_with_fresh_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    let image = repo.create(params("ab12cd34.x1y")).await?;

    assert!(!image.id.is_nil());
    assert_eq!(image.content_type, "image/png");
    assert_eq!(image.file_name(), "ab12cd34.x1y");
    assert!(repo.get_by_id(image.id).await?.is_some());

    Ok(())
}

/// Tests creating two records for the same URI.
///
/// Verifies the unique constraint on `remote_uri_path`.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_duplicate_remote_uri_path() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    repo.create(params("ab12cd34.x1y")).await?;
    let result = repo.create(params("ab12cd34.x1y")).await;

    assert!(result.is_err());

    Ok(())
}
