use csrimpact_bridge::catalog;
use csrimpact_bridge::money::{format_inr, percent_funded};
use csrimpact_bridge::notification::NotificationKind;
use gpui::{
    AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, hsla, px, relative, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputState},
};

use crate::BackendBridge;
use crate::components::{brand_blue, brand_orange, card::Card, faded};
use crate::entities::DataEntities;

/// Quick-pick donation amounts in the modal.
static QUICK_AMOUNTS: [u64; 3] = [1_000, 5_000, 10_000];

/// Detail view for one project: funding sidebar, donor list, and the
/// donate modal with its simulated payment delay.
///
/// Funding numbers come from the backend (catalog baseline plus this run's
/// settled donations); nothing here survives a restart.
pub struct ProjectDetailsPage {
    data: DataEntities,
    project_id: String,
    donate_open: bool,
    processing: bool,
    amount_input: Entity<InputState>,
}

impl ProjectDetailsPage {
    pub fn new(
        data: &DataEntities,
        project_id: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // A funding update for this project while a donation is in flight
        // means it settled: close the modal.
        cx.observe(&data.funding, |this: &mut Self, _, cx| {
            if this.processing {
                this.processing = false;
                this.donate_open = false;
            }
            cx.notify();
        })
        .detach();

        if let Some(project) = catalog::project_by_id(&project_id) {
            let bridge = cx.global::<BackendBridge>().clone();
            let id = project.id;
            cx.spawn(async move |_, _| {
                bridge.request_funding(id).await;
            })
            .detach();
        }

        Self {
            data: data.clone(),
            project_id,
            donate_open: false,
            processing: false,
            amount_input: cx.new(|cx| InputState::new(window, cx).placeholder("5000")),
        }
    }

    fn confirm_donation(&mut self, project_id: &'static str, cx: &mut Context<Self>) {
        if self.processing {
            return;
        }
        let amount = self
            .amount_input
            .read(cx)
            .value()
            .trim()
            .parse::<u64>()
            .unwrap_or(0);
        let bridge = cx.global::<BackendBridge>().clone();

        if amount == 0 {
            cx.spawn(async move |_, _| {
                bridge
                    .show_notification(NotificationKind::Error, "Enter a valid donation amount.")
                    .await;
            })
            .detach();
            return;
        }

        self.processing = true;
        cx.notify();
        cx.spawn(async move |_, _| {
            bridge.donate(project_id, amount).await;
        })
        .detach();
    }

    fn render_donate_modal(
        &self,
        project: &'static catalog::Project,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let processing = self.processing;
        let project_id = project.id;

        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .id("donate-backdrop")
                    .absolute()
                    .inset_0()
                    .bg(hsla(0., 0., 0., 0.6))
                    .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                        if !this.processing {
                            this.donate_open = false;
                            cx.notify();
                        }
                    })),
            )
            .child(
                div().w(px(420.)).child(
                    Card::new()
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .justify_between()
                                .child(div().text_xl().font_bold().child("Make a Donation"))
                                .child(
                                    Button::new("close-donate")
                                        .ghost()
                                        .icon(IconName::Close)
                                        .disabled(processing)
                                        .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                            this.donate_open = false;
                                            cx.notify();
                                        })),
                                ),
                        )
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!(
                                    "You are donating to {}. Your contribution is directly tracked end-to-end.",
                                    project.title
                                )),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                                .child("ENTER AMOUNT (₹)"),
                        )
                        .child(TextInput::new(&self.amount_input))
                        .child(div().flex().gap_2().children(QUICK_AMOUNTS.iter().map(
                            |amount| {
                                let amount = *amount;
                                div().flex_1().child(
                                    Button::new(("quick-amount", amount as usize))
                                        .outline()
                                        .w_full()
                                        .label(format_inr(amount))
                                        .on_click(cx.listener(move |this: &mut Self, _, window, cx| {
                                            this.amount_input.update(cx, |input, cx| {
                                                input.set_value(amount.to_string(), window, cx);
                                            });
                                        })),
                                )
                            },
                        )))
                        .child(
                            Button::new("confirm-donation")
                                .primary()
                                .w_full()
                                .loading(processing)
                                .label(if processing {
                                    "Processing Secure Payment..."
                                } else {
                                    "Confirm Donation"
                                })
                                .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                    this.confirm_donation(project_id, cx);
                                })),
                        )
                        .child(
                            div()
                                .text_xs()
                                .text_center()
                                .text_color(cx.theme().muted_foreground)
                                .child("Secured by 256-bit SSL Encryption. Tax benefits may apply."),
                        ),
                ),
            )
    }
}

impl Render for ProjectDetailsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let back_button = Button::new("back")
            .ghost()
            .icon(IconName::ArrowLeft)
            .label("Back")
            .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                this.data.router.update(cx, |router, cx| router.back(cx));
            }));

        let Some(project) = catalog::project_by_id(&self.project_id) else {
            return div()
                .flex()
                .flex_col()
                .items_center()
                .gap_4()
                .py_24()
                .child(div().text_2xl().font_bold().child("Project not found"))
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(format!("No project with id {:?} exists.", self.project_id)),
                )
                .child(back_button);
        };

        let funding = self.data.funding.read(cx).get(project.id);
        let raised = funding.map_or(project.funds_raised, |f| f.raised);
        let donor_count = funding.map_or(project.donors.len(), |f| f.donor_count);
        let progress = percent_funded(raised, project.funds_required);
        let sector_name = catalog::sector_by_id(project.sector_id).map_or("-", |s| s.name);

        div()
            .relative()
            .flex()
            .flex_col()
            .gap_6()
            .p_8()
            .child(div().child(back_button))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(brand_orange())
                            .text_xs()
                            .font_bold()
                            .child(sector_name.to_uppercase()),
                    )
                    .when(project.verified, |this| {
                        this.child(
                            div()
                                .flex()
                                .items_center()
                                .gap_1()
                                .px_3()
                                .py_1()
                                .rounded_full()
                                .bg(faded(brand_blue(), 0.2))
                                .text_color(brand_blue())
                                .text_xs()
                                .font_bold()
                                .child(Icon::new(IconName::CircleCheck))
                                .child("VERIFIED PROJECT"),
                        )
                    }),
            )
            .child(div().text_3xl().font_bold().child(project.title))
            .child(
                div().flex().gap_6().items_start()
                    .child(
                        div().flex_1().flex().flex_col().gap_6().child(
                            Card::new()
                                .child(div().text_lg().font_bold().child("About the Project"))
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(cx.theme().muted_foreground)
                                        .child(project.description),
                                )
                                .child(div().text_sm().font_bold().child("Timeline"))
                                .child(
                                    div()
                                        .flex()
                                        .gap_3()
                                        .text_sm()
                                        .text_color(cx.theme().muted_foreground)
                                        .child("Start: Jan 2024")
                                        .child("End: Dec 2024"),
                                ),
                        ),
                    )
                    .child(
                        div()
                            .w(px(320.))
                            .flex()
                            .flex_col()
                            .gap_6()
                            .child(
                                Card::new()
                                    .accent(faded(brand_orange(), 0.5))
                                    .child(
                                        div()
                                            .flex()
                                            .items_end()
                                            .justify_between()
                                            .child(
                                                div()
                                                    .text_2xl()
                                                    .font_bold()
                                                    .child(format_inr(raised)),
                                            )
                                            .child(
                                                div()
                                                    .text_sm()
                                                    .text_color(cx.theme().muted_foreground)
                                                    .child(format!(
                                                        "of {}",
                                                        format_inr(project.funds_required)
                                                    )),
                                            ),
                                    )
                                    .child(
                                        div()
                                            .w_full()
                                            .h(px(10.))
                                            .rounded_full()
                                            .bg(cx.theme().muted)
                                            .child(
                                                div()
                                                    .h_full()
                                                    .rounded_full()
                                                    .bg(brand_orange())
                                                    .w(relative(progress as f32 / 100.0)),
                                            ),
                                    )
                                    .child(
                                        div()
                                            .flex()
                                            .justify_between()
                                            .text_xs()
                                            .text_color(cx.theme().muted_foreground)
                                            .child(format!("{progress}% Funded"))
                                            .child(format!("{} Days Left", project.days_left)),
                                    )
                                    .child(
                                        Button::new("donate-now")
                                            .primary()
                                            .w_full()
                                            .label("Donate Now")
                                            .on_click(cx.listener(|this: &mut Self, _, window, cx| {
                                                this.donate_open = true;
                                                this.amount_input.update(cx, |input, cx| {
                                                    input.set_value("", window, cx);
                                                });
                                                cx.notify();
                                            })),
                                    ),
                            )
                            .child(
                                Card::new()
                                    .child(div().font_bold().child("Creator"))
                                    .child(
                                        div()
                                            .flex()
                                            .items_center()
                                            .gap_3()
                                            .child(
                                                div()
                                                    .w(px(40.))
                                                    .h(px(40.))
                                                    .rounded_full()
                                                    .bg(cx.theme().muted)
                                                    .flex()
                                                    .items_center()
                                                    .justify_center()
                                                    .font_bold()
                                                    .child(
                                                        project
                                                            .creator
                                                            .chars()
                                                            .next()
                                                            .unwrap_or('?')
                                                            .to_string(),
                                                    ),
                                            )
                                            .child(
                                                div()
                                                    .flex()
                                                    .flex_col()
                                                    .child(div().font_bold().child(project.creator))
                                                    .child(
                                                        div()
                                                            .text_xs()
                                                            .text_color(brand_blue())
                                                            .child("KYC Verified"),
                                                    ),
                                            ),
                                    ),
                            )
                            .child(
                                Card::new()
                                    .child(
                                        div()
                                            .font_bold()
                                            .child(format!("Recent Donors ({donor_count})")),
                                    )
                                    .children(project.donors.iter().map(|donor| {
                                        div()
                                            .flex()
                                            .items_center()
                                            .justify_between()
                                            .p_2()
                                            .rounded_lg()
                                            .bg(cx.theme().muted)
                                            .text_sm()
                                            .child(*donor)
                                            .when(*donor != "Anonymous", |this| {
                                                this.child(
                                                    div()
                                                        .text_color(brand_blue())
                                                        .child(Icon::new(IconName::CircleCheck)),
                                                )
                                            })
                                    }))
                                    .when(donor_count > project.donors.len(), |this| {
                                        this.child(
                                            div()
                                                .text_xs()
                                                .text_center()
                                                .text_color(cx.theme().muted_foreground)
                                                .child(format!(
                                                    "+ {} recent anonymous donors",
                                                    donor_count - project.donors.len()
                                                )),
                                        )
                                    }),
                            ),
                    ),
            )
            .when(self.donate_open, |this| {
                this.child(self.render_donate_modal(project, cx))
            })
    }
}
