//! Session handling: role persistence, the staged login verification
//! simulation, the one-shot welcome notification, and logout.
//!
//! The verification is a bounded linear state machine driven entirely by
//! timers: one progress message per interval, a success marker one interval
//! after the last stage, and completion after a further fixed delay. The
//! running task's handle lives in shared state so a newer login or a logout
//! aborts it instead of letting stale updates reach the frontend.

use std::time::Duration;

use csrimpact_bridge::MessageFromBackend;
use csrimpact_bridge::notification::NotificationKind;
use csrimpact_bridge::session::UserRole;

use super::{AppContextHandle, notification_center};

/// Delay between two verification stages.
pub const VERIFICATION_STEP_INTERVAL: Duration = Duration::from_millis(800);

/// Delay between the success marker and the completed login.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(1500);

/// Delay before the welcome notification on the first dashboard visit.
pub const WELCOME_DELAY: Duration = Duration::from_secs(1);

/// Stage labels shown while "verifying" a corporate login.
pub const COMPANY_STAGES: [&str; 5] = [
    "INITIATING SECURE HANDSHAKE",
    "CONNECTING TO MCA DATABASE (API V2.1)",
    "VERIFYING CIN & GSTIN RECORDS",
    "VALIDATING TAX COMPLIANCE STATUS",
    "FINALIZING CORPORATE AUTHORIZATION",
];

/// Stage labels shown while "verifying" an NGO login.
pub const NGO_STAGES: [&str; 5] = [
    "ESTABLISHING SECURE CONNECTION",
    "ACCESSING NGO DARPAN REGISTRY",
    "VALIDATING REGISTRATION ID",
    "CHECKING FCRA COMPLIANCE",
    "AUTHORIZING PARTNER ACCESS",
];

/// The verification stages for a role.
pub fn stages_for(role: UserRole) -> &'static [&'static str; 5] {
    match role {
        UserRole::Company => &COMPANY_STAGES,
        UserRole::Ngo => &NGO_STAGES,
    }
}

/// Handles an incoming session request (see
/// [`csrimpact_bridge::MessageToBackend::SessionRequest`]).
pub async fn handle_session_request(context: AppContextHandle) {
    let role = {
        let state = context.state.read().await;
        state.profile.role
    };
    context
        .send(MessageFromBackend::SessionResponse { role })
        .await;
}

/// Starts the staged login simulation for a role.
///
/// The role is persisted before the first timer fires, so a restart during
/// the animation still lands on the chosen role. The simulation always
/// succeeds; input validity beyond field presence is the frontend's concern.
pub async fn handle_login_request(context: AppContextHandle, role: UserRole, registering: bool) {
    let (store, profile) = {
        let mut state = context.state.write().await;
        if let Some(previous) = state.verification_task.take() {
            previous.abort();
        }
        state.profile.role = Some(role);
        (state.store.clone(), state.profile.clone())
    };
    if let Err(e) = store.save(&profile).await {
        log::error!("Failed to persist session role: {e}");
    }

    log::info!("Starting {role:?} login verification (registering: {registering})");
    let task_context = context.clone();
    let handle = tokio::spawn(async move {
        let stages = stages_for(role);
        let total = stages.len();

        for (index, stage) in stages.iter().copied().enumerate() {
            tokio::time::sleep(VERIFICATION_STEP_INTERVAL).await;
            task_context
                .send(MessageFromBackend::VerificationProgress {
                    step: index + 1,
                    total,
                    stage,
                })
                .await;
        }

        tokio::time::sleep(VERIFICATION_STEP_INTERVAL).await;
        task_context.send(MessageFromBackend::VerificationSucceeded).await;

        tokio::time::sleep(COMPLETION_DELAY).await;
        let text = if registering {
            "Identity Verified. Redirecting to Secure Dashboard..."
        } else {
            "Credentials Validated. Accessing Dashboard..."
        };
        notification_center::show(&task_context, NotificationKind::Success, text).await;
        task_context
            .send(MessageFromBackend::LoginCompleted { role, registering })
            .await;
    });

    context.state.write().await.verification_task = Some(handle);
}

/// Clears the persisted role and cancels anything still running. Submitted
/// proposals and the welcome flag survive a logout.
pub async fn handle_logout_request(context: AppContextHandle) {
    let (store, profile) = {
        let mut state = context.state.write().await;
        if let Some(task) = state.verification_task.take() {
            task.abort();
        }
        if let Some(task) = state.analysis_task.take() {
            task.abort();
        }
        state.profile.role = None;
        (state.store.clone(), state.profile.clone())
    };
    if let Err(e) = store.save(&profile).await {
        log::error!("Failed to clear session role: {e}");
    }

    log::info!("Session cleared");
    context
        .send(MessageFromBackend::SessionResponse { role: None })
        .await;
}

/// Emits the role-flavored welcome notification on the first dashboard
/// visit of this run; later visits are silent.
pub async fn handle_dashboard_opened(context: AppContextHandle, role: UserRole) {
    {
        let mut state = context.state.write().await;
        if state.welcomed {
            return;
        }
        state.welcomed = true;
    }

    let context = context.clone();
    tokio::spawn(async move {
        tokio::time::sleep(WELCOME_DELAY).await;
        let text = match role {
            UserRole::Company => "Welcome back, Corporate Partner. Your impact data is synced.",
            UserRole::Ngo => "Welcome, NGO Partner. Grant opportunities updated.",
        };
        notification_center::show(&context, NotificationKind::Info, text).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{drain, test_context};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn verification_steps_follow_the_interval() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_login_request(context.clone(), UserRole::Ngo, false).await;
        tokio::task::yield_now().await;

        // Nothing happens before the first interval elapses.
        assert!(drain(&mut rx).is_empty());
        advance(VERIFICATION_STEP_INTERVAL - Duration::from_millis(1)).await;
        assert!(drain(&mut rx).is_empty());

        // One progress message per interval, five in total.
        for expected_step in 1..=5 {
            advance(Duration::from_millis(1)).await;
            let messages = drain(&mut rx);
            match messages.as_slice() {
                [MessageFromBackend::VerificationProgress { step, total, stage }] => {
                    assert_eq!(*step, expected_step);
                    assert_eq!(*total, 5);
                    assert_eq!(*stage, NGO_STAGES[expected_step - 1]);
                }
                other => panic!("expected a single progress message, got {other:?}"),
            }
            advance(VERIFICATION_STEP_INTERVAL - Duration::from_millis(1)).await;
        }

        // Success only lands one full interval after the last stage.
        assert!(drain(&mut rx).is_empty());
        advance(Duration::from_millis(1)).await;
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [MessageFromBackend::VerificationSucceeded]
        ));

        // Completion only after the extra delay, never earlier.
        advance(COMPLETION_DELAY - Duration::from_millis(1)).await;
        assert!(drain(&mut rx).is_empty());
        advance(Duration::from_millis(1)).await;
        let messages = drain(&mut rx);
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::LoginCompleted {
                role: UserRole::Ngo,
                registering: false,
            }
        )));
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::NotificationsChanged { notifications } if notifications.len() == 1
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn login_persists_the_role_before_the_animation_finishes() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, _rx) = test_context(dir.path());

        handle_login_request(context.clone(), UserRole::Company, true).await;

        let state = context.state.read().await;
        assert_eq!(state.profile.role, Some(UserRole::Company));
        let persisted = state.store.load().await.expect("load should succeed");
        assert_eq!(persisted.role, Some(UserRole::Company));
    }

    #[tokio::test(start_paused = true)]
    async fn a_newer_login_aborts_the_previous_verification() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_login_request(context.clone(), UserRole::Company, false).await;
        tokio::task::yield_now().await;
        handle_login_request(context.clone(), UserRole::Ngo, false).await;
        tokio::task::yield_now().await;

        advance(VERIFICATION_STEP_INTERVAL).await;
        let messages = drain(&mut rx);
        // Only the NGO run is still alive.
        assert!(messages.iter().all(|message| matches!(
            message,
            MessageFromBackend::VerificationProgress { stage, .. } if NGO_STAGES.contains(stage)
        )));
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn logout_clears_the_role_but_keeps_proposals() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_login_request(context.clone(), UserRole::Ngo, false).await;
        {
            let mut state = context.state.write().await;
            state.profile.submitted_proposals.push(
                csrimpact_bridge::proposal::history().remove(0),
            );
        }
        drain(&mut rx);

        handle_logout_request(context.clone()).await;

        let state = context.state.read().await;
        assert_eq!(state.profile.role, None);
        assert_eq!(state.profile.submitted_proposals.len(), 1);
        assert!(state.verification_task.is_none());
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [MessageFromBackend::SessionResponse { role: None }]
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn welcome_notification_fires_once_after_its_delay() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_dashboard_opened(context.clone(), UserRole::Ngo).await;
        tokio::task::yield_now().await;
        assert!(drain(&mut rx).is_empty());

        advance(WELCOME_DELAY).await;
        tokio::task::yield_now().await;
        let messages = drain(&mut rx);
        assert!(matches!(
            messages.as_slice(),
            [MessageFromBackend::NotificationsChanged { notifications }]
                if notifications[0].text.contains("NGO Partner")
        ));

        // A second visit stays silent.
        handle_dashboard_opened(context.clone(), UserRole::Ngo).await;
        advance(WELCOME_DELAY).await;
        tokio::task::yield_now().await;
        assert!(drain(&mut rx).is_empty());
    }
}
