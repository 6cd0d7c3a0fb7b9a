//! Outbound adapters implementing the `RequestStore` port.
//!
//! - **memory**: process-local maps, used when no database is configured
//! - **persistence**: PostgreSQL via Diesel
//!
//! Adapters translate between domain entities and their storage
//! representation. They contain no lifecycle rules.

pub mod memory;
pub mod persistence;
