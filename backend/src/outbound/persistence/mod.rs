//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides [`DieselRequestStore`], the durable implementation of the
//! `RequestStore` port, backed by PostgreSQL via `diesel-async` and a `bb8`
//! connection pool.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) are
//!   internal and never reach the domain.
//! - Database errors are mapped to `RequestStoreError`; driver messages stay
//!   in debug logs.
//!
//! # Example
//!
//! ```no_run
//! use request_desk::outbound::persistence::{DbPool, DieselRequestStore, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/requests")).await?;
//! let store = DieselRequestStore::new(pool);
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_request_store;
mod models;
mod pool;
mod schema;

pub use diesel_request_store::DieselRequestStore;
pub use pool::{DbPool, PoolConfig, PoolError};
