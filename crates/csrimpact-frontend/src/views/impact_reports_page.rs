use csrimpact_bridge::money::format_inr;
use csrimpact_bridge::session::UserRole;
use gpui::{
    Context, Hsla, IntoElement, ParentElement, Render, Styled, Window, div, px, relative,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::components::{brand_blue, brand_orange, card::Card, faded, success_green};
use crate::entities::DataEntities;
use crate::router::Route;

/// One row of the implementation tracker. Fabricated display data, like the
/// rest of the reporting view.
struct TrackerEntry {
    id: &'static str,
    name: &'static str,
    allocated: u64,
    utilized: u64,
    status: &'static str,
    phase: &'static str,
    last_update: &'static str,
}

static TRACKER: [TrackerEntry; 3] = [
    TrackerEntry {
        id: "P-101",
        name: "Digital Literacy for Rural Schools",
        allocated: 5_000_000,
        utilized: 4_250_000,
        status: "Implementation",
        phase: "Phase 3: Training",
        last_update: "2 days ago",
    },
    TrackerEntry {
        id: "P-102",
        name: "Clean Water RO Installation",
        allocated: 1_500_000,
        utilized: 1_500_000,
        status: "Completed",
        phase: "Handover to Gram Panchayat",
        last_update: "Completed",
    },
    TrackerEntry {
        id: "P-103",
        name: "Sustainable Farming Kits",
        allocated: 2_500_000,
        utilized: 500_000,
        status: "Planning",
        phase: "Phase 1: Vendor Procurement",
        last_update: "1 week ago",
    },
];

/// The corporate reporting view: KPI cards and the implementation tracker.
pub struct ImpactReportsPage {
    data: DataEntities,
}

impl ImpactReportsPage {
    pub fn new(data: &DataEntities) -> Self {
        Self { data: data.clone() }
    }

    fn kpi_card(
        &self,
        icon: IconName,
        color: Hsla,
        label: &'static str,
        value: &'static str,
        detail: &'static str,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div().flex_1().child(
            Card::new()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_4()
                        .child(
                            div()
                                .w(px(52.))
                                .h(px(52.))
                                .rounded_full()
                                .bg(faded(color, 0.12))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(color)
                                .child(Icon::new(icon)),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(cx.theme().muted_foreground)
                                        .child(label),
                                )
                                .child(div().text_2xl().font_bold().child(value))
                                .child(div().text_xs().text_color(color).child(detail)),
                        ),
                ),
        )
    }

    fn render_tracker_entry(&self, entry: &'static TrackerEntry, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let utilization = (entry.utilized as f32 / entry.allocated as f32).min(1.0);

        Card::new()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .child(div().text_lg().font_bold().child(entry.name))
                                    .when(entry.status == "Completed", |this| {
                                        this.child(
                                            div()
                                                .text_color(success_green())
                                                .child(Icon::new(IconName::CircleCheck)),
                                        )
                                    }),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("ID: {}", entry.id)),
                            ),
                    )
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_full()
                            .border_1()
                            .border_color(cx.theme().border)
                            .text_xs()
                            .font_bold()
                            .child(entry.status),
                    ),
            )
            .child(
                div()
                    .flex()
                    .justify_between()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(entry.phase)
                    .child(format!(
                        "{} / {} utilized",
                        format_inr(entry.utilized),
                        format_inr(entry.allocated)
                    )),
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
                            .bg(brand_blue())
                            .w(relative(utilization)),
                    ),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("Last update: {}", entry.last_update)),
            )
    }
}

impl Render for ImpactReportsPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
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
                            // Reporting belongs to the corporate branch;
                            // carry the role explicitly on the way back.
                            this.data.router.update(cx, |router, cx| {
                                router.push(Route::Dashboard, Some(UserRole::Company), cx);
                            });
                        })),
                ),
            )
            .child(
                div()
                    .flex()
                    .items_end()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(div().text_3xl().font_bold().child("Impact Reports"))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(cx.theme().muted_foreground)
                                    .child("Real-time financial tracking and verified visual evidence."),
                            ),
                    )
                    .child(
                        Button::new("export-report")
                            .primary()
                            .label("Export Annual Report (CSR-1)"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .child(self.kpi_card(
                        IconName::ChartPie,
                        brand_blue(),
                        "TOTAL BUDGET DEPLOYED",
                        "₹90,00,000",
                        "+12% vs Last Year",
                        cx,
                    ))
                    .child(self.kpi_card(
                        IconName::CircleCheck,
                        success_green(),
                        "FUNDS UTILIZED",
                        "69.4%",
                        "₹62.5L / ₹90L",
                        cx,
                    ))
                    .child(self.kpi_card(
                        IconName::Calendar,
                        brand_orange(),
                        "ACTIVE PROJECTS",
                        "12",
                        "Across 4 Sectors",
                        cx,
                    )),
            )
            .child(div().text_xl().font_bold().child("Implementation Tracker"))
            .children(
                TRACKER
                    .iter()
                    .map(|entry| self.render_tracker_entry(entry, cx)),
            )
    }
}
