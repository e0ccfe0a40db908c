use super::*;

/// Tests releasing all work orders of a person.
///
/// Verifies that work orders of other people keep their owner.
///
/// Expected: Ok with the number of released work orders
#[tokio::test]
async fn releases_only_workorders_of_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (person, _) = factory::helpers::create_person_with_workorders(db, 2).await?;
    let (other, _) = factory::helpers::create_person_with_workorders(db, 1).await?;

    let repo = WorkorderRepository::new(db);
    let released = repo.unassign_all_from_person(person.id).await?;

    assert_eq!(released, 2);
    assert!(repo.get_by_person_id(person.id).await?.is_empty());
    assert_eq!(repo.get_by_person_id(other.id).await?.len(), 1);

    let all = repo.get_all(DateTime::<Utc>::MIN_UTC).await?;
    assert_eq!(all.iter().filter(|w| w.person_id.is_none()).count(), 2);

    Ok(())
}
