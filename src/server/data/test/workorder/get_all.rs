use super::*;

/// Tests listing work orders without a date filter.
///
/// Expected: Ok with all work orders, oldest first
#[tokio::test]
async fn returns_all_ordered_by_created() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let third = WorkorderFactory::new(db).created(at(3, 10)).build().await?;
    let first = WorkorderFactory::new(db).created(at(1, 8)).build().await?;
    let second = WorkorderFactory::new(db).created(at(2, 9)).build().await?;

    let workorders = WorkorderRepository::new(db)
        .get_all(DateTime::<Utc>::MIN_UTC)
        .await?;

    let ids: Vec<_> = workorders.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing work orders created from a given day on.
///
/// Verifies that work orders created exactly at the lower bound are
/// included and older ones are skipped.
///
/// Expected: Ok with the two newer work orders
#[tokio::test]
async fn filters_by_created_from() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workmanager_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    WorkorderFactory::new(db).created(at(1, 8)).build().await?;
    let on_bound = WorkorderFactory::new(db).created(at(2, 0)).build().await?;
    let later = WorkorderFactory::new(db).created(at(3, 10)).build().await?;

    let workorders = WorkorderRepository::new(db).get_all(at(2, 0)).await?;

    let ids: Vec<_> = workorders.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![on_bound.id, later.id]);

    Ok(())
}
