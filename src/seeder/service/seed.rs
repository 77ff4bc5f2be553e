use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use rand::{rngs::StdRng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::seeder::{
    data::fixture::FixtureRepository,
    error::AppError,
    generator::FixtureGenerator,
    model::{counts::SeedCounts, kind::EntityKind, report::SeedReport},
};

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the contents of every table with freshly generated fixtures.
    ///
    /// # Arguments
    /// - `counts` - Batch sizes for the fixed-size tables
    /// - `rng_seed` - Seed for the fixture RNG; the same seed regenerates the same dataset
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Rows written per table
    /// - `Err(AppError::SeedErr)` - Generation, teardown or insertion failed
    pub async fn seed(&self, counts: &SeedCounts, rng_seed: u64) -> Result<SeedReport, AppError> {
        self.seed_at(counts, rng_seed, Utc::now()).await
    }

    /// Like `seed`, with an explicit reference time for generated timestamps.
    ///
    /// The whole fixture set is generated before any row is deleted, so a generation
    /// failure leaves the database untouched. Teardown and insertion are not wrapped in
    /// a transaction; a failure part-way leaves the tables partially cleared or filled.
    pub async fn seed_at(
        &self,
        counts: &SeedCounts,
        rng_seed: u64,
        now: DateTime<Utc>,
    ) -> Result<SeedReport, AppError> {
        let fixtures =
            FixtureGenerator::new(StdRng::seed_from_u64(rng_seed), now).generate(counts)?;
        tracing::info!(
            "Generated {} fixture rows with seed {}",
            fixtures.total(),
            rng_seed
        );

        let repo = FixtureRepository::new(self.db);

        repo.clear_all().await?;
        tracing::info!("Cleared existing data");

        let report = repo.insert_all(fixtures).await?;
        for (kind, rows) in report.iter() {
            tracing::info!("Inserted {} {} rows", rows, kind);
        }

        self.check_report(&report).await?;
        tracing::info!("Database seeded successfully with {} rows", report.total());

        Ok(report)
    }

    /// Compares stored row counts with the report and warns on any difference.
    ///
    /// A mismatch means something else wrote to the tables during the run; it is not
    /// treated as a failure.
    async fn check_report(&self, report: &SeedReport) -> Result<(), AppError> {
        let repo = FixtureRepository::new(self.db);

        for kind in EntityKind::INSERT_ORDER {
            let stored = repo.count(kind).await?;
            let expected = report.rows(kind);
            if stored != expected {
                tracing::warn!(
                    "Table {} holds {} rows after seeding, expected {}",
                    kind,
                    stored,
                    expected
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::error::seed::SeedError;
    use sea_orm::{DbErr, EntityTrait};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests a full seed run against an empty schema.
    ///
    /// Expected: Ok with every table holding exactly the reported rows
    #[tokio::test]
    async fn seeds_every_table() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let report = SeedService::new(db)
            .seed(&SeedCounts::small(), 42)
            .await
            .unwrap();

        let repo = FixtureRepository::new(db);
        for kind in EntityKind::INSERT_ORDER {
            assert_eq!(repo.count(kind).await?, report.rows(kind), "{}", kind);
        }
        assert_eq!(report.rows(EntityKind::User), 20);
        assert_eq!(report.rows(EntityKind::Parcel), 40);

        Ok(())
    }

    /// Tests that a second run replaces the first instead of adding to it.
    ///
    /// Expected: Ok with row counts equal to the second report only
    #[tokio::test]
    async fn second_run_replaces_previous_rows() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = SeedService::new(db);

        service.seed(&SeedCounts::small(), 1).await.unwrap();
        let report = service.seed(&SeedCounts::small(), 2).await.unwrap();

        let repo = FixtureRepository::new(db);
        for kind in EntityKind::INSERT_ORDER {
            assert_eq!(repo.count(kind).await?, report.rows(kind), "{}", kind);
        }

        Ok(())
    }

    /// Tests that rows inserted by hand disappear after a run.
    ///
    /// Expected: Ok with the hand-made user gone
    #[tokio::test]
    async fn removes_preexisting_rows() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _, _, _) = factory::helpers::create_parcel_with_dependencies(db).await?;

        SeedService::new(db)
            .seed(&SeedCounts::small(), 3)
            .await
            .unwrap();

        let found = entity::prelude::User::find_by_id(user.user_id).one(db).await?;
        assert!(found.is_none());

        Ok(())
    }

    /// Tests a run that cannot generate its fixtures.
    ///
    /// Verifies that the database is not touched when generation fails.
    ///
    /// Expected: Err(EmptyPool) with the existing parcel still present
    #[tokio::test]
    async fn generation_failure_keeps_existing_rows() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_parcel_with_dependencies(db).await?;
        let counts = SeedCounts {
            drivers: 0,
            ..SeedCounts::small()
        };

        let result = SeedService::new(db).seed(&counts, 4).await;

        assert!(matches!(
            result,
            Err(AppError::SeedErr(SeedError::EmptyPool {
                child: EntityKind::ParcelAssignment,
                parent: EntityKind::Driver,
            }))
        ));
        assert_eq!(
            FixtureRepository::new(db)
                .count(EntityKind::Parcel)
                .await?,
            1
        );

        Ok(())
    }

    /// Tests a run where every batch is configured empty.
    ///
    /// Expected: Ok with every table emptied and nothing inserted
    #[tokio::test]
    async fn empty_counts_clear_the_database() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::helpers::create_parcel_with_dependencies(db).await?;

        let report = SeedService::new(db)
            .seed(&SeedCounts::empty(), 5)
            .await
            .unwrap();

        assert_eq!(report.total(), 0);
        let repo = FixtureRepository::new(db);
        for kind in EntityKind::INSERT_ORDER {
            assert_eq!(repo.count(kind).await?, 0, "{}", kind);
        }

        Ok(())
    }

    /// Tests that a fixed seed and reference time reproduce identical row counts.
    #[tokio::test]
    async fn same_seed_reproduces_the_same_report() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_seed_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = SeedService::new(db);
        let now = Utc::now();

        let first = service
            .seed_at(&SeedCounts::small(), 6, now)
            .await
            .unwrap();
        let second = service
            .seed_at(&SeedCounts::small(), 6, now)
            .await
            .unwrap();

        assert_eq!(first, second);

        Ok(())
    }
}
