use csrimpact_bridge::money::{format_inr, percent_funded};
use csrimpact_bridge::proposal::{ProposalStatus, SubmittedProposal};
use csrimpact_bridge::session::UserRole;
use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, px, relative,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::BackendBridge;
use crate::components::{
    card::Card, danger_red, faded, status_badge::StatusBadge, success_green, warning_yellow,
};
use crate::entities::DataEntities;
use crate::router::Route;

/// The track-status listing: persisted submissions first, then the static
/// history, with status badges and funding bars.
pub struct TrackStatusPage {
    data: DataEntities,
}

impl TrackStatusPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.proposals, |_, _, cx| cx.notify()).detach();

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_proposals().await;
        })
        .detach();

        Self { data: data.clone() }
    }

    fn render_proposal(
        &self,
        proposal: &SubmittedProposal,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let (status_color, status_icon) = match proposal.status {
            ProposalStatus::Active => (success_green(), IconName::CircleCheck),
            ProposalStatus::Pending => (warning_yellow(), IconName::Eye),
            ProposalStatus::Rejected => (danger_red(), IconName::TriangleAlert),
        };
        let progress = if proposal.progress > 0 {
            proposal.progress
        } else {
            percent_funded(proposal.raised, proposal.goal)
        };

        Card::new()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .w(px(44.))
                            .h(px(44.))
                            .rounded_full()
                            .bg(faded(status_color, 0.12))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(status_color)
                            .child(Icon::new(status_icon)),
                    )
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .justify_between()
                                    .child(div().text_lg().font_bold().child(proposal.title.clone()))
                                    .child(
                                        div()
                                            .text_xs()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(format!("ID: {}", proposal.id)),
                                    ),
                            )
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(
                                        div()
                                            .text_sm()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(format!("Submitted: {}", proposal.date)),
                                    )
                                    .child(StatusBadge::new(proposal.status)),
                            ),
                    ),
            )
            .when(
                matches!(
                    proposal.status,
                    ProposalStatus::Active | ProposalStatus::Pending
                ),
                |this| {
                    this.child(
                        div()
                            .flex()
                            .justify_between()
                            .text_xs()
                            .child(
                                div()
                                    .font_bold()
                                    .text_color(success_green())
                                    .child(format!("{} Raised", format_inr(proposal.raised))),
                            )
                            .child(
                                div()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("Goal: {}", format_inr(proposal.goal))),
                            ),
                    )
                    .child(
                        div()
                            .w_full()
                            .h(px(8.))
                            .rounded_full()
                            .bg(cx.theme().muted)
                            .child(
                                div()
                                    .h_full()
                                    .rounded_full()
                                    .bg(success_green())
                                    .w(relative(progress as f32 / 100.0)),
                            ),
                    )
                },
            )
            .when_some(proposal.rejection_reason.clone(), |this, reason| {
                this.child(
                    div()
                        .p_3()
                        .rounded_lg()
                        .border_1()
                        .border_color(faded(danger_red(), 0.3))
                        .bg(faded(danger_red(), 0.08))
                        .text_sm()
                        .text_color(danger_red())
                        .child(format!("Reason for Rejection: {reason}")),
                )
            })
    }
}

impl Render for TrackStatusPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let proposals = self.data.proposals.read(cx).proposals.clone();

        div()
            .flex()
            .flex_col()
            .gap_6()
            .p_8()
            .child(
                div().child(
                    Button::new("back")
                        .ghost()
                        .icon(IconName::ArrowLeft)
                        .label("Back to Dashboard")
                        .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                            // Returning to the dashboard keeps the NGO
                            // branch active regardless of the persisted role.
                            this.data.router.update(cx, |router, cx| {
                                router.push(Route::Dashboard, Some(UserRole::Ngo), cx);
                            });
                        })),
                ),
            )
            .child(div().text_3xl().font_bold().child("Track Status"))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Monitor your applications and funding progress in real-time."),
            )
            .map(|this| {
                if proposals.is_empty() {
                    this.child(
                        div()
                            .py_16()
                            .text_center()
                            .text_color(faded(cx.theme().foreground, 0.5))
                            .child("No proposals submitted yet."),
                    )
                } else {
                    this.children(
                        proposals
                            .iter()
                            .map(|proposal| self.render_proposal(proposal, cx)),
                    )
                }
            })
    }
}
