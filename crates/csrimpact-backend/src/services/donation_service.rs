//! Funding queries and the donation settlement simulation.
//!
//! Settled donations live in a per-project overlay on top of the static
//! catalog numbers. The overlay is process-local by design: a fresh run
//! starts from the catalog baseline again, like the original's in-view
//! state survived navigation but not a reload.

use std::time::Duration;

use csrimpact_bridge::MessageFromBackend;
use csrimpact_bridge::catalog::{self, Project};
use csrimpact_bridge::money::format_inr;
use csrimpact_bridge::notification::NotificationKind;

use super::{AppContextHandle, notification_center};
use crate::state::FundingOverlay;

/// Simulated payment-gateway delay before a donation settles.
pub const SETTLEMENT_DELAY: Duration = Duration::from_millis(2500);

fn funding_totals(project: &Project, overlay: Option<&FundingOverlay>) -> (u64, usize) {
    let overlay = overlay.copied().unwrap_or_default();
    (
        project.funds_raised + overlay.extra_raised,
        project.donors.len() + overlay.extra_donors,
    )
}

/// Replies with the current funding numbers for a project (see
/// [`csrimpact_bridge::MessageToBackend::ProjectFundingRequest`]).
pub async fn handle_funding_request(context: AppContextHandle, project_id: &'static str) {
    let Some(project) = catalog::project_by_id(project_id) else {
        log::warn!("Funding request for unknown project {project_id:?}");
        return;
    };

    let (raised, donor_count) = {
        let state = context.state.read().await;
        funding_totals(project, state.funding.get(project.id))
    };
    context
        .send(MessageFromBackend::ProjectFundingResponse {
            project_id: project.id,
            raised,
            donor_count,
        })
        .await;
}

/// Simulates a donation: a fixed settlement delay, then the overlay update
/// and a settlement broadcast plus a success notification.
pub async fn handle_donation_request(
    context: AppContextHandle,
    project_id: &'static str,
    amount: u64,
) {
    if amount == 0 {
        notification_center::show(
            &context,
            NotificationKind::Error,
            "Enter a valid donation amount.",
        )
        .await;
        return;
    }
    let Some(project) = catalog::project_by_id(project_id) else {
        notification_center::show(&context, NotificationKind::Error, "Project not found.").await;
        return;
    };

    log::info!("Processing donation of {amount} to {project_id}");
    let context = context.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SETTLEMENT_DELAY).await;

        let (raised, donor_count) = {
            let mut state = context.state.write().await;
            let overlay = state.funding.entry(project.id).or_default();
            overlay.extra_raised += amount;
            overlay.extra_donors += 1;
            funding_totals(project, Some(&*overlay))
        };

        context
            .send(MessageFromBackend::ProjectFundingResponse {
                project_id: project.id,
                raised,
                donor_count,
            })
            .await;
        notification_center::show(
            &context,
            NotificationKind::Success,
            format!(
                "Thank you! {} donation processed successfully.",
                format_inr(amount)
            ),
        )
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{drain, test_context};
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn donation_settles_after_the_delay() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());
        let baseline = catalog::project_by_id("p1").expect("catalog should contain p1");

        handle_donation_request(context.clone(), "p1", 5_000).await;
        tokio::task::yield_now().await;

        advance(SETTLEMENT_DELAY - Duration::from_millis(1)).await;
        assert!(drain(&mut rx).is_empty());
        assert!(context.state.read().await.funding.is_empty());

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;

        let messages = drain(&mut rx);
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::ProjectFundingResponse {
                project_id: "p1",
                raised,
                donor_count,
            } if *raised == baseline.funds_raised + 5_000
                && *donor_count == baseline.donors.len() + 1
        )));
        assert!(messages.iter().any(|message| matches!(
            message,
            MessageFromBackend::NotificationsChanged { notifications }
                if notifications[0].text.contains("₹5,000")
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn donations_accumulate_in_the_overlay_only() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_donation_request(context.clone(), "p2", 1_000).await;
        tokio::task::yield_now().await;
        advance(SETTLEMENT_DELAY).await;
        tokio::task::yield_now().await;
        handle_donation_request(context.clone(), "p2", 10_000).await;
        tokio::task::yield_now().await;
        advance(SETTLEMENT_DELAY).await;
        tokio::task::yield_now().await;
        drain(&mut rx);

        let state = context.state.read().await;
        let overlay = state.funding.get("p2").expect("overlay should exist");
        assert_eq!(overlay.extra_raised, 11_000);
        assert_eq!(overlay.extra_donors, 2);
        // The catalog baseline is untouched.
        assert_eq!(
            catalog::project_by_id("p2").map(|p| p.funds_raised),
            Some(500_000)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn funding_request_reflects_the_overlay() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());
        {
            let mut state = context.state.write().await;
            state.funding.insert(
                "p3",
                FundingOverlay {
                    extra_raised: 2_500,
                    extra_donors: 1,
                },
            );
        }

        handle_funding_request(context.clone(), "p3").await;

        assert!(matches!(
            drain(&mut rx).as_slice(),
            [MessageFromBackend::ProjectFundingResponse {
                project_id: "p3",
                raised: 1_502_500,
                donor_count: 3,
            }]
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_requests_only_produce_error_notifications() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_donation_request(context.clone(), "p1", 0).await;
        handle_donation_request(context.clone(), "p99", 500).await;
        handle_funding_request(context.clone(), "p99").await;

        advance(SETTLEMENT_DELAY).await;
        tokio::task::yield_now().await;

        let notifications: Vec<String> = drain(&mut rx)
            .into_iter()
            .filter_map(|message| match message {
                MessageFromBackend::NotificationsChanged { notifications } => {
                    Some(notifications.last().map(|n| n.text.clone()))
                }
                MessageFromBackend::ProjectFundingResponse { .. } => {
                    panic!("no funding response expected for invalid requests")
                }
                _ => None,
            })
            .flatten()
            .collect();
        assert_eq!(notifications.len(), 2);
        assert!(notifications[0].contains("valid donation amount"));
        assert!(notifications[1].contains("Project not found"));
        assert!(context.state.read().await.funding.is_empty());
    }
}
