use csrimpact_bridge::catalog::SECTORS;
use csrimpact_bridge::notification::NotificationKind;
use csrimpact_bridge::proposal::ProposalForm;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div,
};
use gpui_component::{
    ActiveTheme, IconName, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputState},
    select::{Select, SelectItem, SelectState},
};

use crate::BackendBridge;
use crate::components::card::Card;
use crate::entities::DataEntities;

#[derive(Debug, Clone)]
struct SectorOption {
    name: SharedString,
    id: &'static str,
}

impl SelectItem for SectorOption {
    type Value = &'static str;

    fn title(&self) -> SharedString {
        self.name.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.id
    }
}

/// The proposal submission form. Field presence is the only validation,
/// standing in for the browser's native `required` enforcement; everything
/// deeper is out of scope.
pub struct SubmitProposalPage {
    data: DataEntities,
    title_input: Entity<InputState>,
    location_input: Entity<InputState>,
    description_input: Entity<InputState>,
    goal_input: Entity<InputState>,
    duration_input: Entity<InputState>,
    sector_select: Entity<SelectState<Vec<SectorOption>>>,
    submitting: bool,
}

impl SubmitProposalPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let sector_select = cx.new(|cx| {
            let options: Vec<SectorOption> = SECTORS
                .iter()
                .map(|sector| SectorOption {
                    name: sector.name.into(),
                    id: sector.id,
                })
                .collect();
            SelectState::new(options, None, window, cx)
        });

        Self {
            data: data.clone(),
            title_input: cx.new(|cx| {
                InputState::new(window, cx).placeholder("e.g., Solar Power for Rural Clinics")
            }),
            location_input: cx.new(|cx| InputState::new(window, cx).placeholder("City, State")),
            description_input: cx.new(|cx| {
                InputState::new(window, cx).placeholder(
                    "Describe the problem, your solution, and the expected outcome...",
                )
            }),
            goal_input: cx.new(|cx| InputState::new(window, cx).placeholder("500000")),
            duration_input: cx.new(|cx| InputState::new(window, cx).placeholder("12")),
            sector_select,
            submitting: false,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        if self.submitting {
            return;
        }

        let title = self.title_input.read(cx).value().trim().to_string();
        let location = self.location_input.read(cx).value().trim().to_string();
        let description = self.description_input.read(cx).value().trim().to_string();
        let goal = self
            .goal_input
            .read(cx)
            .value()
            .trim()
            .parse::<u64>()
            .unwrap_or(0);
        let duration_months = self
            .duration_input
            .read(cx)
            .value()
            .trim()
            .parse::<u32>()
            .unwrap_or(0);
        let sector_id = self.sector_select.read(cx).selected_value().copied();

        let bridge = cx.global::<BackendBridge>().clone();
        let (Some(sector_id), false) = (sector_id, title.is_empty() || location.is_empty() || description.is_empty() || goal == 0 || duration_months == 0)
        else {
            cx.spawn(async move |_, _| {
                bridge
                    .show_notification(
                        NotificationKind::Error,
                        "Please fill in all required fields.",
                    )
                    .await;
            })
            .detach();
            return;
        };

        self.submitting = true;
        cx.notify();

        let form = ProposalForm {
            title,
            sector_id: sector_id.to_string(),
            location,
            description,
            goal,
            duration_months,
        };
        cx.spawn(async move |_, _| {
            bridge.submit_proposal(form).await;
        })
        .detach();
    }
}

impl Render for SubmitProposalPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let field_label = |text: &'static str, cx: &mut Context<Self>| {
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child(text)
        };
        let section_title = |text: &'static str, cx: &mut Context<Self>| {
            div()
                .text_lg()
                .font_bold()
                .pb_2()
                .border_b_1()
                .border_color(cx.theme().border)
                .child(text)
        };

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
                            this.data.router.update(cx, |router, cx| router.back(cx));
                        })),
                ),
            )
            .child(div().text_3xl().font_bold().child("Submit Proposal"))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Create a new funding request. All submissions undergo a strict 48-hour verification process."),
            )
            .child(
                Card::new()
                    .child(section_title("Project Details", cx))
                    .child(field_label("PROJECT TITLE *", cx))
                    .child(TextInput::new(&self.title_input))
                    .child(field_label("SECTOR *", cx))
                    .child(Select::new(&self.sector_select).placeholder("Select a Sector"))
                    .child(field_label("LOCATION *", cx))
                    .child(TextInput::new(&self.location_input))
                    .child(field_label("IMPACT SUMMARY *", cx))
                    .child(TextInput::new(&self.description_input))
                    .child(section_title("Funding & Timeline", cx))
                    .child(field_label("TOTAL FUNDS NEEDED (₹) *", cx))
                    .child(TextInput::new(&self.goal_input))
                    .child(field_label("PROJECT DURATION (MONTHS) *", cx))
                    .child(TextInput::new(&self.duration_input))
                    .child(section_title("Documentation", cx))
                    .child(
                        div()
                            .p_8()
                            .rounded_xl()
                            .border_1()
                            .border_dashed()
                            .border_color(cx.theme().border)
                            .flex()
                            .flex_col()
                            .items_center()
                            .gap_2()
                            .child(div().font_bold().child("Upload Project Proposal & Budget"))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child("PDF, DOCX up to 10MB"),
                            ),
                    )
                    .child(
                        Button::new("submit-proposal")
                            .primary()
                            .w_full()
                            .loading(self.submitting)
                            .label(if self.submitting {
                                "Submitting Proposal..."
                            } else {
                                "Submit for Verification"
                            })
                            .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                this.submit(cx);
                            })),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_center()
                            .text_color(cx.theme().muted_foreground)
                            .child("By submitting, you agree to our CSR Compliance Terms & Conditions."),
                    ),
            )
    }
}
