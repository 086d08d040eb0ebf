//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, run the timed simulations, and emit progress or
//! notifications back to the frontend.

pub mod analysis_service;
pub mod donation_service;
pub mod notification_center;
pub mod proposal_service;
pub mod session_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use csrimpact_bridge::MessageFromBackend;
    use tokio::sync::{RwLock, mpsc};

    use super::AppContextHandle;
    use crate::app::AppContext;
    use crate::profile::ProfileStore;
    use crate::state::State;

    /// Builds an `AppContext` over a temp-dir store plus the receiver for
    /// everything the services send to the frontend.
    pub fn test_context(
        store_dir: &std::path::Path,
    ) -> (AppContextHandle, mpsc::Receiver<MessageFromBackend>) {
        let (tx, rx) = mpsc::channel(64);
        let store = ProfileStore::at(store_dir);
        let state = Arc::new(RwLock::new(State::new(Default::default(), store)));
        (Arc::new(AppContext { state, tx }), rx)
    }

    /// Drains every message currently sitting in the channel.
    pub fn drain(rx: &mut mpsc::Receiver<MessageFromBackend>) -> Vec<MessageFromBackend> {
        let mut out = Vec::new();
        while let Ok(message) = rx.try_recv() {
            out.push(message);
        }
        out
    }
}
