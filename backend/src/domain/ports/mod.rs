//! Domain ports for the hexagonal boundary.
//!
//! [`RequestStore`] is the driven (outbound) port implemented by the
//! in-memory and PostgreSQL adapters. [`RequestDesk`] is the driving port
//! the HTTP and function adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod request_desk;
mod request_store;

pub use request_desk::{DeletedRequest, RequestDesk};
#[cfg(test)]
pub use request_store::MockRequestStore;
pub use request_store::{RequestStore, RequestStoreError};
