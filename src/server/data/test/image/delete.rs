use super::*;

/// Tests deleting an image referenced by a person.
///
/// Verifies that the person survives and loses the reference.
///
/// Expected: Ok with image removed and person.image_id cleared
#[tokio::test]
async fn deletes_image_and_clears_person_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_address, image, person) = factory::helpers::create_person_with_dependencies(db).await?;

    ImageRepository::new(db).delete(image.id).await?;

    assert!(entity::prelude::Image::find_by_id(image.id)
        .one(db)
        .await?
        .is_none());
    let db_person = entity::prelude::Person::find_by_id(person.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_person.image_id, None);

    Ok(())
}
