use super::*;

/// Tests counting rows inserted through factories.
///
/// Expected: one row in each table touched by the parcel factory, zero elsewhere
#[tokio::test]
async fn counts_rows_per_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_parcel_with_dependencies(db).await?;
    let repo = FixtureRepository::new(db);

    assert_eq!(repo.count(EntityKind::User).await?, 1);
    assert_eq!(repo.count(EntityKind::Location).await?, 1);
    assert_eq!(repo.count(EntityKind::Locker).await?, 1);
    assert_eq!(repo.count(EntityKind::Parcel).await?, 1);
    assert_eq!(repo.count(EntityKind::Order).await?, 0);
    assert_eq!(repo.count(EntityKind::ParcelAssignment).await?, 0);

    Ok(())
}

/// Tests counting a table that was never created.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FixtureRepository::new(db).count(EntityKind::Item).await;

    assert!(result.is_err());

    Ok(())
}
