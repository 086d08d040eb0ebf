use csrimpact_bridge::proposal::SubmittedProposal;

/// The track-status listing: persisted submissions plus the static history,
/// as assembled by the backend.
#[derive(Debug, Clone, Default)]
pub struct ProposalsEntity {
    pub proposals: Vec<SubmittedProposal>,
    pub loaded: bool,
}

impl ProposalsEntity {
    pub fn set(&mut self, proposals: Vec<SubmittedProposal>) {
        self.proposals = proposals;
        self.loaded = true;
    }

    /// Optimistic insert for a just-submitted proposal; the next list
    /// response replaces the whole vector anyway.
    pub fn prepend(&mut self, proposal: SubmittedProposal) {
        self.proposals.insert(0, proposal);
    }
}
