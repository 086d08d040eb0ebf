//! The process-wide notification queue and its expiry scheduling.
//!
//! Every change to the queue rebroadcasts the full snapshot so the frontend
//! never has to reconcile diffs. Each shown notification gets its own
//! independent expiry task; dismissal is idempotent, so a timer firing for
//! an already-dismissed id does nothing.

use std::time::Duration;

use csrimpact_bridge::MessageFromBackend;
use csrimpact_bridge::notification::NotificationKind;

use super::AppContextHandle;

/// How long a notification stays in the queue unless dismissed earlier.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Appends a notification to the queue and schedules its automatic removal.
/// Fire-and-forget; cannot fail.
pub async fn show(context: &AppContextHandle, kind: NotificationKind, text: impl Into<String>) {
    let id = {
        let mut state = context.state.write().await;
        state.notifications.push(kind, text)
    };
    broadcast(context).await;

    let context = context.clone();
    tokio::spawn(async move {
        tokio::time::sleep(NOTIFICATION_TTL).await;
        dismiss(&context, id).await;
    });
}

/// Removes the notification with the given id if it is still queued.
/// A no-op (and no rebroadcast) when the id is absent.
pub async fn dismiss(context: &AppContextHandle, id: u64) {
    let removed = {
        let mut state = context.state.write().await;
        state.notifications.remove(id)
    };
    if removed {
        broadcast(context).await;
    }
}

async fn broadcast(context: &AppContextHandle) {
    let notifications = {
        let state = context.state.read().await;
        state.notifications.snapshot()
    };
    context
        .send(MessageFromBackend::NotificationsChanged { notifications })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use tokio::time::{Duration, advance};

    #[tokio::test(start_paused = true)]
    async fn notification_expires_after_ttl_and_not_before() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, _rx) = test_context(dir.path());

        show(&context, NotificationKind::Success, "saved").await;
        // Let the expiry task register its timer before touching the clock.
        tokio::task::yield_now().await;
        assert_eq!(context.state.read().await.notifications.len(), 1);

        advance(NOTIFICATION_TTL - Duration::from_millis(1)).await;
        assert_eq!(context.state.read().await.notifications.len(), 1);

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(context.state.read().await.notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn each_notification_expires_on_its_own_timer() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, _rx) = test_context(dir.path());

        show(&context, NotificationKind::Info, "first").await;
        tokio::task::yield_now().await;
        advance(Duration::from_secs(3)).await;
        show(&context, NotificationKind::Error, "second").await;
        tokio::task::yield_now().await;

        // First expires at t=5s, second must survive until t=8s.
        advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        {
            let state = context.state.read().await;
            assert_eq!(state.notifications.len(), 1);
            assert_eq!(state.notifications.entries()[0].text, "second");
        }

        advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        assert!(context.state.read().await.notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn early_dismissal_leaves_other_timers_untouched() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, _rx) = test_context(dir.path());

        show(&context, NotificationKind::Info, "keep").await;
        show(&context, NotificationKind::Info, "drop").await;

        let dropped_id = {
            let state = context.state.read().await;
            state.notifications.entries()[1].id
        };
        dismiss(&context, dropped_id).await;

        let state = context.state.read().await;
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications.entries()[0].text, "keep");
    }

    #[tokio::test(start_paused = true)]
    async fn every_change_broadcasts_the_full_queue() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        show(&context, NotificationKind::Success, "one").await;
        show(&context, NotificationKind::Info, "two").await;

        let updates: Vec<usize> = crate::services::testing::drain(&mut rx)
            .into_iter()
            .map(|message| match message {
                MessageFromBackend::NotificationsChanged { notifications } => notifications.len(),
                other => panic!("unexpected message: {other:?}"),
            })
            .collect();
        assert_eq!(updates, vec![1, 2]);
    }
}
