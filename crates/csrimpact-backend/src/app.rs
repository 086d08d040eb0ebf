//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses and notifications back to the frontend bridge.

use std::sync::Arc;

use csrimpact_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc::{Receiver, Sender};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::SessionRequest => {
                services::session_service::handle_session_request(self.clone()).await;
            }
            MessageToBackend::LoginRequest { role, registering } => {
                services::session_service::handle_login_request(self.clone(), role, registering)
                    .await;
            }
            MessageToBackend::LogoutRequest => {
                services::session_service::handle_logout_request(self.clone()).await;
            }
            MessageToBackend::DashboardOpened { role } => {
                services::session_service::handle_dashboard_opened(self.clone(), role).await;
            }
            MessageToBackend::AnalyzeMissionRequest { description } => {
                services::analysis_service::handle_analyze_mission(self.clone(), description)
                    .await;
            }
            MessageToBackend::CancelAnalysisRequest => {
                services::analysis_service::handle_cancel_analysis(self.clone()).await;
            }
            MessageToBackend::SubmitProposalRequest { form } => {
                services::proposal_service::handle_submit_proposal(self.clone(), form).await;
            }
            MessageToBackend::ProposalListRequest => {
                services::proposal_service::handle_proposal_list_request(self.clone()).await;
            }
            MessageToBackend::ProjectFundingRequest { project_id } => {
                services::donation_service::handle_funding_request(self.clone(), project_id).await;
            }
            MessageToBackend::DonationRequest { project_id, amount } => {
                services::donation_service::handle_donation_request(self.clone(), project_id, amount)
                    .await;
            }
            MessageToBackend::ShowNotification { kind, text } => {
                services::notification_center::show(&self.clone(), kind, text).await;
            }
            MessageToBackend::DismissNotification { id } => {
                services::notification_center::dismiss(&self.clone(), id).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }
}
