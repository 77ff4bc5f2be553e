use super::*;

/// Tests inserting a batch of users in one statement.
///
/// Expected: Ok(3) with three rows stored
#[tokio::test]
async fn inserts_every_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = FixtureGenerator::new(StdRng::seed_from_u64(2), Utc::now())
        .generate(&SeedCounts {
            users: 3,
            ..SeedCounts::empty()
        })
        .unwrap()
        .users;

    let result = FixtureRepository::new(db)
        .insert_batch(EntityKind::User, users)
        .await;

    assert!(matches!(result, Ok(3)));
    assert_eq!(entity::prelude::User::find().count(db).await?, 3);

    Ok(())
}

/// Tests that an empty batch never reaches the database.
///
/// Expected: Ok(0) even though the target table does not exist
#[tokio::test]
async fn skips_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FixtureRepository::new(db)
        .insert_batch(EntityKind::Card, Vec::<entity::card::Model>::new())
        .await;

    assert!(matches!(result, Ok(0)));

    Ok(())
}

/// Tests inserting a row whose primary key already exists.
///
/// Expected: Err(Insert) naming the user table
#[tokio::test]
async fn fails_on_duplicate_primary_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = FixtureRepository::new(db)
        .insert_batch(EntityKind::User, vec![existing])
        .await;

    assert!(matches!(
        result,
        Err(SeedError::Insert {
            kind: EntityKind::User,
            ..
        })
    ));

    Ok(())
}

/// Tests inserting lockers that reference a location that was never stored.
///
/// Expected: Err(Insert) from the foreign key constraint, no lockers stored
#[tokio::test]
async fn fails_on_dangling_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Location)
        .with_table(entity::prelude::Locker)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lockers = FixtureGenerator::new(StdRng::seed_from_u64(3), Utc::now())
        .generate(&SeedCounts {
            locations: 1,
            lockers: 2,
            ..SeedCounts::empty()
        })
        .unwrap()
        .lockers;

    let result = FixtureRepository::new(db)
        .insert_batch(EntityKind::Locker, lockers)
        .await;

    assert!(matches!(
        result,
        Err(SeedError::Insert {
            kind: EntityKind::Locker,
            ..
        })
    ));
    assert_eq!(entity::prelude::Locker::find().count(db).await?, 0);

    Ok(())
}

/// Tests inserting a batch that needs more than one insert statement.
///
/// Verifies that rows beyond the bind parameter budget of a single statement are
/// still written and reported as one batch.
///
/// Expected: Ok with every row stored
#[tokio::test]
async fn inserts_batch_larger_than_one_statement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let columns = <entity::prelude::User as EntityTrait>::Column::iter().count();
    let rows = rows_per_insert(columns) * 2 + 7;
    let users = FixtureGenerator::new(StdRng::seed_from_u64(7), Utc::now())
        .generate(&SeedCounts {
            users: rows,
            ..SeedCounts::empty()
        })
        .unwrap()
        .users;

    let result = FixtureRepository::new(db)
        .insert_batch(EntityKind::User, users)
        .await;

    assert_eq!(result.unwrap(), rows as u64);
    assert_eq!(
        entity::prelude::User::find().count(db).await?,
        rows as u64
    );

    Ok(())
}

#[test]
fn statement_size_stays_within_parameter_budget() {
    assert_eq!(rows_per_insert(14), 2142);
    assert!(rows_per_insert(14) * 14 <= 30_000);
    assert_eq!(rows_per_insert(0), 30_000);
    assert_eq!(rows_per_insert(50_000), 1);
}
