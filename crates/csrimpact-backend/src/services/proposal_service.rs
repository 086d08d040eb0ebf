//! Proposal submission and the track-status listing.
//!
//! Submission runs behind a fixed simulated processing delay, then the new
//! record is prepended to the persisted list. Persisted entries are never
//! mutated or removed; the static history is appended at display time only.

use std::time::Duration;

use chrono::{Datelike, Local};
use csrimpact_bridge::MessageFromBackend;
use csrimpact_bridge::notification::NotificationKind;
use csrimpact_bridge::proposal::{
    PROPOSAL_ID_PREFIX, ProposalForm, ProposalStatus, SubmittedProposal, history,
};
use rand::Rng;

use super::{AppContextHandle, notification_center};

/// Simulated processing time before a submission is accepted.
pub const SUBMISSION_DELAY: Duration = Duration::from_secs(2);

/// Builds a fresh proposal identifier: prefix, current year, and a random
/// four-digit suffix.
fn generate_proposal_id() -> String {
    let suffix: u16 = rand::rng().random_range(1000..10000);
    format!("{PROPOSAL_ID_PREFIX}-{}-{suffix}", Local::now().year())
}

/// The submission date in the display form used throughout the UI.
fn submission_date() -> String {
    Local::now().format("%b %-d, %Y").to_string()
}

/// Handles a proposal submission (see
/// [`csrimpact_bridge::MessageToBackend::SubmitProposalRequest`]).
pub async fn handle_submit_proposal(context: AppContextHandle, form: ProposalForm) {
    log::info!("Processing proposal submission: {:?}", form.title);

    let context = context.clone();
    tokio::spawn(async move {
        tokio::time::sleep(SUBMISSION_DELAY).await;

        let proposal = SubmittedProposal {
            id: generate_proposal_id(),
            title: form.title,
            date: submission_date(),
            status: ProposalStatus::Pending,
            raised: 0,
            goal: form.goal,
            progress: 0,
            rejection_reason: None,
        };

        let (store, profile) = {
            let mut state = context.state.write().await;
            state.profile.submitted_proposals.insert(0, proposal.clone());
            (state.store.clone(), state.profile.clone())
        };
        if let Err(e) = store.save(&profile).await {
            log::error!("Failed to persist submitted proposal: {e}");
        }

        notification_center::show(
            &context,
            NotificationKind::Success,
            "Proposal Submitted Successfully! Sent for verification.",
        )
        .await;
        context
            .send(MessageFromBackend::ProposalSubmitted { proposal })
            .await;
    });
}

/// Replies with the persisted submissions (newest first) followed by the
/// static historical entries. The merge is display-only and never written
/// back to the profile.
pub async fn handle_proposal_list_request(context: AppContextHandle) {
    let mut proposals = {
        let state = context.state.read().await;
        state.profile.submitted_proposals.clone()
    };
    proposals.extend(history());

    context
        .send(MessageFromBackend::ProposalListResponse { proposals })
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{drain, test_context};
    use tokio::time::advance;

    fn solar_clinics_form() -> ProposalForm {
        ProposalForm {
            title: "Solar Clinics".into(),
            sector_id: "health".into(),
            location: "Nagpur, Maharashtra".into(),
            description: "Rooftop solar for rural primary health centres.".into(),
            goal: 500_000,
            duration_months: 12,
        }
    }

    fn assert_id_shape(id: &str) {
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3, "id should be PREFIX-year-suffix: {id}");
        assert_eq!(parts[0], PROPOSAL_ID_PREFIX);
        assert_eq!(parts[1].len(), 4);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        let suffix: u16 = parts[2].parse().expect("suffix should be numeric");
        assert!((1000..10000).contains(&suffix));
    }

    #[tokio::test(start_paused = true)]
    async fn submission_prepends_a_pending_entry_after_the_delay() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());
        {
            let mut state = context.state.write().await;
            state.profile.submitted_proposals = vec![history().remove(0)];
        }

        handle_submit_proposal(context.clone(), solar_clinics_form()).await;
        tokio::task::yield_now().await;

        advance(SUBMISSION_DELAY - Duration::from_millis(1)).await;
        assert_eq!(context.state.read().await.profile.submitted_proposals.len(), 1);

        advance(Duration::from_millis(1)).await;

        // The submission task persists to disk before reporting back, so
        // wait for its completion message instead of polling.
        loop {
            match rx.recv().await.expect("channel should stay open") {
                MessageFromBackend::ProposalSubmitted { proposal } => {
                    assert_eq!(proposal.title, "Solar Clinics");
                    break;
                }
                _ => continue,
            }
        }

        let state = context.state.read().await;
        assert_eq!(state.profile.submitted_proposals.len(), 2);
        let newest = &state.profile.submitted_proposals[0];
        assert_eq!(newest.title, "Solar Clinics");
        assert_eq!(newest.status, ProposalStatus::Pending);
        assert_eq!(newest.goal, 500_000);
        assert_eq!(newest.raised, 0);
        assert_id_shape(&newest.id);
    }

    #[tokio::test(start_paused = true)]
    async fn submission_survives_in_the_store() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());

        handle_submit_proposal(context.clone(), solar_clinics_form()).await;
        tokio::task::yield_now().await;
        advance(SUBMISSION_DELAY).await;
        loop {
            match rx.recv().await.expect("channel should stay open") {
                MessageFromBackend::ProposalSubmitted { .. } => break,
                _ => continue,
            }
        }

        let persisted = {
            let state = context.state.read().await;
            state.store.load().await.expect("load should succeed")
        };
        assert_eq!(persisted.submitted_proposals.len(), 1);
        assert_eq!(persisted.submitted_proposals[0].title, "Solar Clinics");
    }

    #[tokio::test]
    async fn listing_appends_history_without_touching_the_profile() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let (context, mut rx) = test_context(dir.path());
        {
            let mut state = context.state.write().await;
            state.profile.submitted_proposals = vec![SubmittedProposal {
                id: "APP-2026-1234".into(),
                title: "Mine".into(),
                date: "Aug 6, 2026".into(),
                status: ProposalStatus::Pending,
                raised: 0,
                goal: 100,
                progress: 0,
                rejection_reason: None,
            }];
        }

        handle_proposal_list_request(context.clone()).await;

        let messages = drain(&mut rx);
        match messages.as_slice() {
            [MessageFromBackend::ProposalListResponse { proposals }] => {
                assert_eq!(proposals.len(), 1 + history().len());
                assert_eq!(proposals[0].title, "Mine");
                assert_eq!(proposals[1].id, "APP-2024-001");
            }
            other => panic!("expected a single list response, got {other:?}"),
        }
        // The static entries stay out of the profile.
        assert_eq!(context.state.read().await.profile.submitted_proposals.len(), 1);
    }
}
