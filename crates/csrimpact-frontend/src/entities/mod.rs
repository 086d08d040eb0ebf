use gpui::{App, AppContext, Entity};

use crate::router::Route;

pub mod analysis_entity;
pub mod funding_entity;
pub mod notifications_entity;
pub mod proposals_entity;
pub mod router_entity;
pub mod session_entity;
pub mod verification_entity;

/// The shared entities every view reads from and the backend-event loop
/// writes into.
#[derive(Clone)]
pub struct DataEntities {
    pub router: Entity<router_entity::RouterEntity>,
    pub session: Entity<session_entity::SessionEntity>,
    pub verification: Entity<verification_entity::VerificationEntity>,
    pub analysis: Entity<analysis_entity::AnalysisEntity>,
    pub proposals: Entity<proposals_entity::ProposalsEntity>,
    pub funding: Entity<funding_entity::FundingEntity>,
    pub notifications: Entity<notifications_entity::NotificationsEntity>,
}

impl DataEntities {
    pub fn new(initial_route: Route, cx: &mut App) -> Self {
        Self {
            router: cx.new(|_| router_entity::RouterEntity::new(initial_route)),
            session: cx.new(|_| session_entity::SessionEntity::default()),
            verification: cx.new(|_| verification_entity::VerificationEntity::default()),
            analysis: cx.new(|_| analysis_entity::AnalysisEntity::default()),
            proposals: cx.new(|_| proposals_entity::ProposalsEntity::default()),
            funding: cx.new(|_| funding_entity::FundingEntity::default()),
            notifications: cx.new(|_| notifications_entity::NotificationsEntity::default()),
        }
    }
}
