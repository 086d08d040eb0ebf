//! Backend runtime setup and orchestration.
//!
//! This module wires together the profile store, shared state, and the
//! message dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use csrimpact_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::profile::ProfileStore;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let store = ProfileStore::open_default().expect("failed to open profile store");
    let profile = store.load().await.expect("failed to load profile");

    let state = Arc::new(RwLock::new(State::new(profile, store)));
    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
