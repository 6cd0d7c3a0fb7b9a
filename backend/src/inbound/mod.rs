//! Inbound adapters translating external calls into [`RequestDesk`] calls.
//!
//! [`http`] serves the actix-web routes; [`function`] serves serverless
//! invocations. Both share [`payload`] for body validation and [`resource`]
//! for the route table and CORS headers.
//!
//! [`RequestDesk`]: crate::domain::ports::RequestDesk

pub mod function;
pub mod http;
pub mod payload;
pub mod resource;
