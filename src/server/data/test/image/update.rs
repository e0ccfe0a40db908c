use super::*;

/// Tests pointing an image record at a new file.
///
/// Expected: Ok with new content type and URI, same id
#[tokio::test]
async fn replaces_file_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::create_image(db).await?;

    let mut update = params("zz99yy88.q1w");
    update.content_type = "image/jpeg".to_string();
    let updated = ImageRepository::new(db).update(image.id, update).await?;

    assert_eq!(updated.id, image.id);
    assert_eq!(updated.content_type, "image/jpeg");
    assert_eq!(updated.file_name(), "zz99yy88.q1w");

    Ok(())
}
