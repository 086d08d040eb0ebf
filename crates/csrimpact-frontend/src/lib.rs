use csrimpact_bridge::notification::NotificationKind;
use csrimpact_bridge::proposal::ProposalForm;
use csrimpact_bridge::session::UserRole;
use csrimpact_bridge::{MessageFromBackend, MessageToBackend};
use gpui::{AppContext, Application, AsyncApp, Global, TitlebarOptions, WindowOptions};
use gpui_component::Root;
use tokio::sync::mpsc;

use crate::entities::DataEntities;
use crate::router::Route;

pub mod components;
pub mod entities;
pub mod router;
mod views;

/// Frontend-side handle to the backend: typed wrappers over the command
/// channel, registered as a gpui global.
#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        self.to_backend
            .send(message)
            .await
            .expect("failed to send message to backend");
    }

    pub async fn request_session(&self) {
        self.send(MessageToBackend::SessionRequest).await;
    }

    pub async fn login(&self, role: UserRole, registering: bool) {
        self.send(MessageToBackend::LoginRequest { role, registering })
            .await;
    }

    pub async fn logout(&self) {
        self.send(MessageToBackend::LogoutRequest).await;
    }

    pub async fn dashboard_opened(&self, role: UserRole) {
        self.send(MessageToBackend::DashboardOpened { role }).await;
    }

    pub async fn analyze_mission(&self, description: String) {
        self.send(MessageToBackend::AnalyzeMissionRequest { description })
            .await;
    }

    pub async fn cancel_analysis(&self) {
        self.send(MessageToBackend::CancelAnalysisRequest).await;
    }

    pub async fn submit_proposal(&self, form: ProposalForm) {
        self.send(MessageToBackend::SubmitProposalRequest { form })
            .await;
    }

    pub async fn request_proposals(&self) {
        self.send(MessageToBackend::ProposalListRequest).await;
    }

    pub async fn request_funding(&self, project_id: &'static str) {
        self.send(MessageToBackend::ProjectFundingRequest { project_id })
            .await;
    }

    pub async fn donate(&self, project_id: &'static str, amount: u64) {
        self.send(MessageToBackend::DonationRequest { project_id, amount })
            .await;
    }

    pub async fn show_notification(&self, kind: NotificationKind, text: impl Into<String>) {
        self.send(MessageToBackend::ShowNotification {
            kind,
            text: text.into(),
        })
        .await;
    }

    pub async fn dismiss_notification(&self, id: u64) {
        self.send(MessageToBackend::DismissNotification { id }).await;
    }
}

impl Global for BackendBridge {}

/// Applies one backend event to the shared entities, including the two
/// navigation side effects (login completion and proposal submission).
fn apply_backend_message(data: &DataEntities, message: MessageFromBackend, cx: &mut AsyncApp) {
    match message {
        MessageFromBackend::SessionResponse { role } => {
            let _ = data.session.update(cx, |session, cx| {
                session.persisted_role = role;
                session.loaded = true;
                cx.notify();
            });
            // With an existing session the login form auto-redirects, like
            // a browser back-navigation landing on the dashboard.
            if let Some(role) = role {
                let _ = data.router.update(cx, |router, cx| {
                    if matches!(router.route(), Route::Login { .. }) {
                        router.push(Route::Dashboard, Some(role), cx);
                    }
                });
            }
        }
        MessageFromBackend::VerificationProgress { step, total, stage } => {
            let _ = data.verification.update(cx, |verification, cx| {
                verification.progress(step, total, stage);
                cx.notify();
            });
        }
        MessageFromBackend::VerificationSucceeded => {
            let _ = data.verification.update(cx, |verification, cx| {
                verification.succeed();
                cx.notify();
            });
        }
        MessageFromBackend::LoginCompleted { role, .. } => {
            let _ = data.verification.update(cx, |verification, cx| {
                verification.reset();
                cx.notify();
            });
            let _ = data.router.update(cx, |router, cx| {
                router.push(Route::Dashboard, Some(role), cx);
            });
        }
        MessageFromBackend::AnalysisProgress { percent } => {
            let _ = data.analysis.update(cx, |analysis, cx| {
                analysis.progress(percent);
                cx.notify();
            });
        }
        MessageFromBackend::AnalysisCompleted { sector_id } => {
            let _ = data.analysis.update(cx, |analysis, cx| {
                analysis.complete(sector_id);
                cx.notify();
            });
        }
        MessageFromBackend::ProposalSubmitted { proposal } => {
            let _ = data.proposals.update(cx, |proposals, cx| {
                proposals.prepend(proposal);
                cx.notify();
            });
            let _ = data.router.update(cx, |router, cx| {
                router.push(Route::TrackStatus, None, cx);
            });
        }
        MessageFromBackend::ProposalListResponse { proposals } => {
            let _ = data.proposals.update(cx, |entity, cx| {
                entity.set(proposals);
                cx.notify();
            });
        }
        MessageFromBackend::ProjectFundingResponse {
            project_id,
            raised,
            donor_count,
        } => {
            let _ = data.funding.update(cx, |funding, cx| {
                funding.set(project_id, raised, donor_count);
                cx.notify();
            });
        }
        MessageFromBackend::NotificationsChanged { notifications } => {
            let _ = data.notifications.update(cx, |entity, cx| {
                entity.set(notifications);
                cx.notify();
            });
        }
    }
}

pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    // Any route is reachable directly by launching with its path; there is
    // no access-control layer in front of the table.
    let initial_route = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or_default();

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let data = DataEntities::new(initial_route, cx);
        let listener_data = data.clone();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        cx.spawn(async move |cx| {
            cx.open_window(
                WindowOptions {
                    titlebar: Some(TitlebarOptions {
                        title: Some("CSR Impact".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    cx.spawn(async move |cx| {
                        while let Some(message) = rx.recv().await {
                            log::debug!("Got a message from backend: {message:?}");
                            apply_backend_message(&listener_data, message, cx);
                        }
                    })
                    .detach();

                    cx.spawn(async move |_| {
                        bridge.request_session().await;
                    })
                    .detach();

                    let view = cx.new(|cx| views::AppShell::new(&data, window, cx));
                    cx.new(|cx| Root::new(view, window, cx))
                },
            )?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
