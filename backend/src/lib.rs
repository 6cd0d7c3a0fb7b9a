//! Request desk: song requests and audience feedback for a live event.
//!
//! The crate follows a hexagonal layout. [`domain`] holds the entities, the
//! lifecycle service and its ports; [`outbound`] provides the in-memory and
//! PostgreSQL stores; [`inbound`] exposes the service over HTTP and as a
//! serverless function.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
