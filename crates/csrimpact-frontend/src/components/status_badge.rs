use csrimpact_bridge::proposal::ProposalStatus;
use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div};
use gpui_component::StyledExt;

use super::{danger_red, faded, success_green, warning_yellow};

/// Colored pill describing a proposal's review status.
#[derive(IntoElement)]
pub struct StatusBadge {
    status: ProposalStatus,
}

impl StatusBadge {
    pub fn new(status: ProposalStatus) -> Self {
        Self { status }
    }
}

impl RenderOnce for StatusBadge {
    fn render(self, _: &mut Window, _: &mut App) -> impl IntoElement {
        let (label, color) = match self.status {
            ProposalStatus::Active => ("Verified & Live", success_green()),
            ProposalStatus::Pending => ("Under Review", warning_yellow()),
            ProposalStatus::Rejected => ("Action Needed", danger_red()),
        };

        div()
            .px_3()
            .py_1()
            .rounded_full()
            .border_1()
            .border_color(faded(color, 0.3))
            .bg(faded(color, 0.1))
            .text_color(color)
            .text_xs()
            .font_bold()
            .child(label)
    }
}
