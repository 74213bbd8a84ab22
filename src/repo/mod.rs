//! Persistence layer: the catalog engine seam, its Postgres implementation
//! and the raw query modules.
//!
//! The engine is always an injected handle, never ambient state. Everything
//! above this module talks to a [`Catalog`], so the Postgres-backed
//! [`Repository`] and the [`InMemoryCatalog`] substitute are interchangeable.

mod in_memory;
pub use in_memory::*;

mod sql_models;
pub use sql_models::*;

pub mod facades;
pub use facades::*;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::types;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("query execution failed :: {0}")]
    Query(#[from] sqlx::Error),
    #[error("schema migration failed :: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("engine unavailable :: {0}")]
    Unavailable(String),
}

/// The persistence engine seam.
///
/// One operation per collection accessor, each mapping to exactly one read
/// query. Ordering and relation includes are fixed per operation and applied
/// engine-side.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every field of study, in engine order.
    async fn field_all(&self) -> Result<Vec<types::Field>, Error>;

    /// Every semester ordered by `number` ascending, each carrying the name
    /// of its field.
    async fn semester_all(&self) -> Result<Vec<types::Semester>, Error>;

    /// Every user, in engine order.
    async fn user_all(&self) -> Result<Vec<types::User>, Error>;
}

/// Postgres-backed catalog engine.
///
/// Thin handle over a sqlx pool; the pool owns connection lifecycle and
/// timeouts.
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded schema migrations.
    pub async fn init(&self) -> Result<(), Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl Catalog for Repository {
    async fn field_all(&self) -> Result<Vec<types::Field>, Error> {
        let records = pg_queries::field_find_all(self).await?;
        Ok(records.into_iter().map(types::Field::from).collect())
    }

    async fn semester_all(&self) -> Result<Vec<types::Semester>, Error> {
        let records = pg_queries::semester_find_all(self).await?;
        Ok(records.into_iter().map(types::Semester::from).collect())
    }

    async fn user_all(&self) -> Result<Vec<types::User>, Error> {
        let records = pg_queries::user_find_all(self).await?;
        Ok(records.into_iter().map(types::User::from).collect())
    }
}
