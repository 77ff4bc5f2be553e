use super::*;

/// Tests clearing every table after a full fixture set was inserted.
///
/// Verifies that children are deleted before their parents so no foreign key
/// blocks the teardown.
///
/// Expected: Ok with every table empty
#[tokio::test]
async fn empties_every_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixtures = FixtureGenerator::new(StdRng::seed_from_u64(1), Utc::now())
        .generate(&SeedCounts::small())
        .unwrap();
    let repo = FixtureRepository::new(db);
    repo.insert_all(fixtures).await.unwrap();

    let result = repo.clear_all().await;

    assert!(result.is_ok());
    for kind in EntityKind::INSERT_ORDER {
        assert_eq!(repo.count(kind).await?, 0, "{} not cleared", kind);
    }

    Ok(())
}

/// Tests clearing tables that hold no rows.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_on_empty_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FixtureRepository::new(db).clear_all().await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests clearing rows that were inserted outside the seeder.
///
/// Expected: Ok with the hand-made parcel and its dependencies removed
#[tokio::test]
async fn removes_rows_not_created_by_seeder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _location, _locker, _parcel) =
        factory::helpers::create_parcel_with_dependencies(db).await?;

    FixtureRepository::new(db).clear_all().await.unwrap();

    assert_eq!(entity::prelude::Parcel::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Locker::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests teardown against a schema missing most tables.
///
/// Verifies that the first failing table is reported and tables later in the
/// teardown order keep their rows.
///
/// Expected: Err(Teardown) naming the parcel assignment table, user rows untouched
#[tokio::test]
async fn fails_on_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let result = FixtureRepository::new(db).clear_all().await;

    assert!(matches!(
        result,
        Err(SeedError::Teardown {
            kind: EntityKind::ParcelAssignment,
            ..
        })
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests clearing a single parent table.
///
/// Verifies that foreign keys cascade so dependent parcels disappear with their sender.
///
/// Expected: Ok(1) with the dependent parcel removed
#[tokio::test]
async fn clearing_parent_cascades_to_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_parcel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_parcel_with_dependencies(db).await?;

    let removed = FixtureRepository::new(db)
        .clear_table(EntityKind::User)
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(entity::prelude::Parcel::find().count(db).await?, 0);

    Ok(())
}
