//! Communication bridge between frontend and backend.
//!
//! This crate defines the types and protocols used to connect the graphical
//! frontend with the asynchronous backend responsible for session handling,
//! the notification queue, proposal persistence, and the timed funding
//! simulations.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., log in, submit a proposal, donate).
//! - The backend pushes events (e.g., verification progress, notification
//!   queue changes, settled donations).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod catalog;
pub mod money;
pub mod notification;
pub mod proposal;
pub mod session;

use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::notification::{Notification, NotificationKind};
use crate::proposal::{ProposalForm, SubmittedProposal};
use crate::session::UserRole;

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous progress/events (e.g., verification steps, notifications).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Response to the session request: the role persisted in the profile,
    /// if any.
    SessionResponse { role: Option<UserRole> },
    /// One step of the staged login verification has elapsed.
    VerificationProgress {
        /// Steps completed so far, starting at 1.
        step: usize,
        /// Total number of steps for the active role.
        total: usize,
        /// Human-readable label of the stage that just completed.
        stage: &'static str,
    },
    /// All verification stages have elapsed; the frontend should switch to
    /// its success state while the final delay runs.
    VerificationSucceeded,
    /// The login simulation has fully finished; the frontend navigates to
    /// the dashboard.
    LoginCompleted { role: UserRole, registering: bool },
    /// Progress of the AI sector-match simulation, in percent (0..=100).
    AnalysisProgress { percent: u8 },
    /// The AI sector-match simulation finished with a suggestion.
    AnalysisCompleted { sector_id: &'static str },
    /// A proposal submission finished processing and was persisted.
    ProposalSubmitted { proposal: SubmittedProposal },
    /// Response to the proposal list request: persisted submissions first
    /// (newest on top), followed by the static historical entries.
    ProposalListResponse { proposals: Vec<SubmittedProposal> },
    /// Current funding numbers for a project, combining the static catalog
    /// amounts with any donations settled during this run.
    ProjectFundingResponse {
        project_id: &'static str,
        raised: u64,
        donor_count: usize,
    },
    /// The notification queue changed; carries the full queue in insertion
    /// order (oldest first).
    NotificationsChanged { notifications: Vec<Notification> },
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the persisted session role.
    SessionRequest,
    /// Start the staged login/registration simulation for a role.
    LoginRequest { role: UserRole, registering: bool },
    /// Clear the persisted role and cancel any running simulation.
    LogoutRequest,
    /// The dashboard became visible; used for the one-shot welcome
    /// notification.
    DashboardOpened { role: UserRole },
    /// Start the AI sector-match simulation over a mission description.
    AnalyzeMissionRequest { description: String },
    /// Abort an in-flight sector-match simulation (e.g., on role switch).
    CancelAnalysisRequest,
    /// Submit a new funding proposal.
    SubmitProposalRequest { form: ProposalForm },
    /// Request the proposal list for the track-status view.
    ProposalListRequest,
    /// Request current funding numbers for a project.
    ProjectFundingRequest { project_id: &'static str },
    /// Simulate a donation to a project.
    DonationRequest { project_id: &'static str, amount: u64 },
    /// Append a notification to the shared queue.
    ShowNotification { kind: NotificationKind, text: String },
    /// Remove a notification from the shared queue, if still present.
    DismissNotification { id: u64 },
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
