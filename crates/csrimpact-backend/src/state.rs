use std::collections::HashMap;

use csrimpact_bridge::notification::NotificationQueue;
use tokio::task::JoinHandle;

use crate::profile::{Profile, ProfileStore};

/// Donations settled during this run, layered on top of a project's static
/// catalog numbers. Never persisted; a fresh start begins from the catalog
/// baseline again.
#[derive(Debug, Clone, Copy, Default)]
pub struct FundingOverlay {
    pub extra_raised: u64,
    pub extra_donors: usize,
}

/// The core application state that holds the profile, the notification
/// queue, and other shared resources.
///
/// This struct contains all the data that needs to be shared across async
/// tasks in the application.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) to allow safe concurrent reads and
/// occasional writes from multiple tasks.
#[derive(Debug)]
pub struct State {
    /// The loaded persisted profile (role + submitted proposals).
    pub profile: Profile,
    /// Durable store the profile is written back to.
    pub store: ProfileStore,
    /// The process-wide notification queue. Lives as long as the backend.
    pub notifications: NotificationQueue,
    /// Per-project donation overlays keyed by catalog project id.
    pub funding: HashMap<&'static str, FundingOverlay>,
    /// Whether the one-shot welcome notification was already emitted this
    /// run. Logout does not reset it.
    pub welcomed: bool,
    /// Handle of the staged login verification task, if one is running.
    /// A newer login or a logout aborts it.
    pub verification_task: Option<JoinHandle<()>>,
    /// Handle of the AI sector-match task, if one is running.
    pub analysis_task: Option<JoinHandle<()>>,
}

impl State {
    pub fn new(profile: Profile, store: ProfileStore) -> Self {
        Self {
            profile,
            store,
            notifications: NotificationQueue::new(),
            funding: HashMap::new(),
            welcomed: false,
            verification_task: None,
            analysis_task: None,
        }
    }
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
///
/// This is the recommended way to pass state into async handlers, background
/// tasks, or any context where multiple tasks need read access (and occasional
/// write access).
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
