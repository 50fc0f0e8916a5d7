//! Database service layer
//! 
//! Bundles the repositories over one shared pool. Each repository call checks a
//! connection out of the pool for the duration of a single statement.

use crate::database::{
    connection, DatabasePool, CollegeRepository, StudentRepository, EventRepository,
    RegistrationRepository, ReportRepository,
};
use crate::utils::errors::RegistryError;
use crate::utils::logging::log_database_operation;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub colleges: CollegeRepository,
    pub students: StudentRepository,
    pub events: EventRepository,
    pub registrations: RegistrationRepository,
    pub reports: ReportRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            colleges: CollegeRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            reports: ReportRepository::new(pool.clone()),
            pool,
        }
    }

    /// Shared connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Create the schema if absent and load the reference dataset, each step on request
    pub async fn bootstrap(&self, run_migrations: bool, seed: bool) -> Result<(), RegistryError> {
        if run_migrations {
            let started = Instant::now();
            let result = connection::run_migrations(&self.pool).await;
            log_database_operation("migrate", "*", started.elapsed().as_millis() as u64, result.is_ok());
            result?;
        }

        if seed {
            let started = Instant::now();
            let result = super::seed::seed_reference_data(&self.pool).await;
            log_database_operation("seed", "*", started.elapsed().as_millis() as u64, result.is_ok());
            result?;
        }
        Ok(())
    }

    /// Check storage reachability
    pub async fn health_check(&self) -> Result<(), RegistryError> {
        connection::health_check(&self.pool).await
    }

    /// Row counts per table
    pub async fn get_stats(&self) -> Result<serde_json::Value, RegistryError> {
        let stats = serde_json::json!({
            "colleges": self.colleges.count().await?,
            "students": self.students.count().await?,
            "events": self.events.count().await?,
            "registrations": self.registrations.count().await?,
        });

        Ok(stats)
    }
}
