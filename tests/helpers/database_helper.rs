//! Test database helper utilities
//! 
//! Every `TestDatabase` owns a freshly created database with the schema applied.
//! `TEST_DATABASE_URL` points at an existing server; otherwise a PostgreSQL
//! container is started and kept alive for the lifetime of the helper.

use campus_events::database::{run_migrations, seed_reference_data, DatabaseService};
use campus_events::EventRegistry;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::sync::Once;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use uuid::Uuid;

static INIT: Once = Once::new();

pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_name: String,
    _container: Option<ContainerAsync<PostgresImage>>,
}

impl TestDatabase {
    /// Empty schema, no reference data
    pub async fn new() -> TestResult<Self> {
        // Initialize logging once
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("campus_events=debug")
                .with_test_writer()
                .try_init();
        });

        let (server_options, container) = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => (url.parse::<PgConnectOptions>()?, None),
            Err(_) => {
                let container = PostgresImage::default()
                    .with_db_name("campus_events")
                    .with_user("test_user")
                    .with_password("test_password")
                    .start()
                    .await?;
                let host = container.get_host().await?;
                let port = container.get_host_port_ipv4(5432).await?;
                let options = PgConnectOptions::new()
                    .host(&host.to_string())
                    .port(port)
                    .username("test_user")
                    .password("test_password")
                    .database("campus_events");
                (options, Some(container))
            }
        };

        let unique_id = Uuid::new_v4().simple().to_string();
        let database_name = format!("test_campus_{}", &unique_id[..12]);

        let admin_pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(server_options.clone())
            .await?;
        sqlx::query(&format!("CREATE DATABASE {}", database_name))
            .execute(&admin_pool)
            .await?;
        admin_pool.close().await;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(server_options.database(&database_name))
            .await?;
        run_migrations(&pool).await?;

        Ok(Self {
            pool,
            database_name,
            _container: container,
        })
    }

    /// Schema plus the reference dataset
    pub async fn seeded() -> TestResult<Self> {
        let db = Self::new().await?;
        seed_reference_data(&db.pool).await?;
        Ok(db)
    }

    pub fn service(&self) -> DatabaseService {
        DatabaseService::new(self.pool.clone())
    }

    pub fn registry(&self) -> EventRegistry {
        EventRegistry::new(self.service())
    }

    /// Count rows in a table
    pub async fn count_records(&self, table: &str) -> TestResult<i64> {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// Count rows matching a simple `column = id` filter
    pub async fn count_where(&self, table: &str, column: &str, id: i64) -> TestResult<i64> {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {} WHERE {} = $1", table, column))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
