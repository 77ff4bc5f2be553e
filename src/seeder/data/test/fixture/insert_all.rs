use super::*;

/// Tests inserting a complete generated fixture set.
///
/// Verifies that batches go in dependency order and the report matches the rows
/// stored for every table.
///
/// Expected: Ok with report totals equal to the generated set
#[tokio::test]
async fn inserts_complete_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixtures = FixtureGenerator::new(StdRng::seed_from_u64(4), Utc::now())
        .generate(&SeedCounts::small())
        .unwrap();
    let expected = fixtures.clone();

    let repo = FixtureRepository::new(db);
    let report = repo.insert_all(fixtures).await.unwrap();

    assert_eq!(report.total(), expected.total() as u64);
    for kind in EntityKind::INSERT_ORDER {
        assert_eq!(report.rows(kind), expected.len(kind) as u64);
        assert_eq!(repo.count(kind).await?, expected.len(kind) as u64);
    }

    let kinds: Vec<_> = report.iter().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, EntityKind::INSERT_ORDER.to_vec());

    Ok(())
}

/// Tests inserting a set whose batches are all empty.
///
/// Expected: Ok with a zero report and no rows written
#[tokio::test]
async fn inserts_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixtures = FixtureGenerator::new(StdRng::seed_from_u64(5), Utc::now())
        .generate(&SeedCounts::empty())
        .unwrap();

    let report = FixtureRepository::new(db).insert_all(fixtures).await.unwrap();

    assert_eq!(report.total(), 0);

    Ok(())
}

/// Tests inserting a set on top of rows that share its identifiers.
///
/// Verifies that insertion stops at the failing batch and later batches are not written.
///
/// Expected: Err(Insert) for users, no locations stored
#[tokio::test]
async fn stops_at_first_failing_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fixtures = FixtureGenerator::new(StdRng::seed_from_u64(6), Utc::now())
        .generate(&SeedCounts::small())
        .unwrap();
    let repo = FixtureRepository::new(db);
    repo.insert_batch(EntityKind::User, vec![fixtures.users[0].clone()])
        .await
        .unwrap();

    let result = repo.insert_all(fixtures).await;

    assert!(matches!(
        result,
        Err(SeedError::Insert {
            kind: EntityKind::User,
            ..
        })
    ));
    assert_eq!(repo.count(EntityKind::User).await?, 1);
    assert_eq!(repo.count(EntityKind::Location).await?, 0);

    Ok(())
}
