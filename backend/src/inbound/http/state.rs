//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! [`RequestDesk`] port, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::RequestDesk;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub desk: Arc<dyn RequestDesk>,
}

impl HttpState {
    /// Construct state around a desk implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use request_desk::domain::RequestDeskService;
    /// use request_desk::inbound::http::state::HttpState;
    /// use request_desk::outbound::memory::InMemoryRequestStore;
    ///
    /// let desk = RequestDeskService::new(
    ///     Arc::new(InMemoryRequestStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(Arc::new(desk));
    /// # let _ = state;
    /// ```
    pub fn new(desk: Arc<dyn RequestDesk>) -> Self {
        Self { desk }
    }
}
