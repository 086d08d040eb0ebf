use serde::{Deserialize, Serialize};

/// Prefix of every generated proposal identifier
/// (`APP-<year>-<4-digit suffix>`).
pub const PROPOSAL_ID_PREFIX: &str = "APP";

/// Review status of a submitted proposal.
///
/// New submissions are always [`ProposalStatus::Pending`] and stay that way
/// in the persisted profile; the other variants only occur in the static
/// historical list shown alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Active,
    Rejected,
}

/// A funding request record, either user-submitted (persisted) or from the
/// static history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedProposal {
    pub id: String,
    pub title: String,
    /// Submission date in `Mon D, YYYY` form, display-only.
    pub date: String,
    pub status: ProposalStatus,
    pub raised: u64,
    pub goal: u64,
    /// Funding progress in percent.
    pub progress: u8,
    /// Reviewer feedback, only present on rejected entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Form data collected by the submit-proposal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalForm {
    pub title: String,
    pub sector_id: String,
    pub location: String,
    pub description: String,
    pub goal: u64,
    pub duration_months: u32,
}

/// The static historical entries appended after the persisted submissions in
/// the track-status view. Display-only; never merged into the profile.
pub fn history() -> Vec<SubmittedProposal> {
    vec![
        SubmittedProposal {
            id: "APP-2024-001".into(),
            title: "Clean Water Initiative Phase 2".into(),
            date: "Oct 24, 2023".into(),
            status: ProposalStatus::Active,
            raised: 1_500_000,
            goal: 2_000_000,
            progress: 75,
            rejection_reason: None,
        },
        SubmittedProposal {
            id: "APP-2023-892".into(),
            title: "Community Solar Grid".into(),
            date: "Dec 01, 2023".into(),
            status: ProposalStatus::Rejected,
            raised: 0,
            goal: 1_200_000,
            progress: 0,
            rejection_reason: Some("Budget documentation incomplete.".into()),
        },
    ]
}
