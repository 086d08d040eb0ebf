use csrimpact_bridge::catalog::{PARTNERS, SECTORS};
use csrimpact_bridge::notification::NotificationKind;
use csrimpact_bridge::session::UserRole;
use gpui::{
    AppContext, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputState},
};

use crate::BackendBridge;
use crate::components::{
    brand_blue, brand_orange, card::Card, faded, role_accent, sector_icon, success_green,
};
use crate::entities::DataEntities;
use crate::router::Route;

/// The role-branched dashboard: hero action cards, partner strip, sector
/// grid, trust section, and the contact form.
///
/// The role is resolved once at construction and stays fixed for this page
/// instance; an unknown resolution falls back to the Company branch via the
/// role default.
pub struct DashboardPage {
    data: DataEntities,
    role: UserRole,
    contact_name_input: Entity<InputState>,
    contact_email_input: Entity<InputState>,
    contact_message_input: Entity<InputState>,
}

impl DashboardPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let nav_role = data.router.read(cx).nav_role();
        let persisted_role = data.session.read(cx).persisted_role;
        let role = UserRole::resolve(nav_role, persisted_role);

        // A late session response (direct launch onto this route) can still
        // flip the branch.
        cx.observe(&data.session, |this: &mut Self, session, cx| {
            let persisted = session.read(cx).persisted_role;
            let nav = this.data.router.read(cx).nav_role();
            this.role = UserRole::resolve(nav, persisted);
            cx.notify();
        })
        .detach();

        // One-shot welcome notification; the backend ignores repeats.
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.dashboard_opened(role).await;
        })
        .detach();

        Self {
            data: data.clone(),
            role,
            contact_name_input: cx.new(|cx| InputState::new(window, cx).placeholder("John Doe")),
            contact_email_input: cx
                .new(|cx| InputState::new(window, cx).placeholder("john@company.com")),
            contact_message_input: cx
                .new(|cx| InputState::new(window, cx).placeholder("How can we help?")),
        }
    }

    fn navigate(&self, route: Route, cx: &mut Context<Self>) {
        self.data.router.update(cx, |router, cx| {
            router.push(route, None, cx);
        });
    }

    fn submit_contact(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let name = self.contact_name_input.read(cx).value().trim().to_string();
        let email = self.contact_email_input.read(cx).value().trim().to_string();
        let message = self.contact_message_input.read(cx).value().trim().to_string();

        let bridge = cx.global::<BackendBridge>().clone();
        if name.is_empty() || email.is_empty() || message.is_empty() {
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
        }

        for input in [
            &self.contact_name_input,
            &self.contact_email_input,
            &self.contact_message_input,
        ] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        cx.spawn(async move |_, _| {
            bridge
                .show_notification(
                    NotificationKind::Success,
                    "Message Sent! We will contact you shortly.",
                )
                .await;
        })
        .detach();
    }

    fn hero_card(
        &self,
        id: &'static str,
        icon: IconName,
        title: &'static str,
        text: &'static str,
        action: &'static str,
        target: Route,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let accent = role_accent(self.role);
        div()
            .id(id)
            .flex_1()
            .p_8()
            .rounded_xl()
            .border_1()
            .border_color(faded(accent, 0.3))
            .bg(cx.theme().card)
            .cursor_pointer()
            .flex()
            .flex_col()
            .items_center()
            .gap_3()
            .child(
                div()
                    .w(px(56.))
                    .h(px(56.))
                    .rounded_full()
                    .bg(faded(accent, 0.12))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(accent)
                    .child(Icon::new(icon)),
            )
            .child(div().text_xl().font_bold().child(title))
            .child(
                div()
                    .text_sm()
                    .text_center()
                    .text_color(cx.theme().muted_foreground)
                    .child(text),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .text_sm()
                    .font_semibold()
                    .text_color(accent)
                    .child(action)
                    .child(Icon::new(IconName::ArrowRight)),
            )
            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                this.navigate(target.clone(), cx);
            }))
    }

    fn render_hero(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let (badge, title, subtitle) = match self.role {
            UserRole::Company => (
                "Corporate Dashboard",
                "Invest in Verified Impact.",
                "Browse accredited projects, track your funds in real-time, and generate compliant CSR reports.",
            ),
            UserRole::Ngo => (
                "NGO Partner Portal",
                "Fund Your Vision.",
                "Connect with top corporate donors, submit project proposals, and track your funding status.",
            ),
        };

        let cards = div().flex().gap_6().w_full().map(|this| match self.role {
            UserRole::Company => this
                .child(self.hero_card(
                    "hero-sectors",
                    IconName::Search,
                    "Browse Sectors",
                    "Explore verified projects in Education, Health, and more.",
                    "Start Exploring",
                    Route::Projects {
                        sector_id: SECTORS[0].id.to_string(),
                    },
                    cx,
                ))
                .child(self.hero_card(
                    "hero-reports",
                    IconName::ChartPie,
                    "Impact Reports",
                    "View analytics on your deployed funds and social ROI.",
                    "View Dashboard",
                    Route::ImpactReports,
                    cx,
                )),
            UserRole::Ngo => this
                .child(self.hero_card(
                    "hero-submit",
                    IconName::Plus,
                    "Submit Proposal",
                    "Create a new funding request for your social cause.",
                    "Create New",
                    Route::SubmitProposal,
                    cx,
                ))
                .child(self.hero_card(
                    "hero-track",
                    IconName::Eye,
                    "Track Status",
                    "Check the verification and funding status of your projects.",
                    "Check Status",
                    Route::TrackStatus,
                    cx,
                )),
        });

        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .py_12()
            .child(
                div()
                    .px_3()
                    .py_1()
                    .rounded_full()
                    .border_1()
                    .border_color(cx.theme().border)
                    .text_xs()
                    .font_bold()
                    .text_color(cx.theme().muted_foreground)
                    .child(badge),
            )
            .child(div().text_3xl().font_bold().child(title))
            .child(
                div()
                    .text_lg()
                    .text_center()
                    .text_color(cx.theme().muted_foreground)
                    .max_w(px(640.))
                    .child(subtitle),
            )
            .child(cards)
    }

    fn render_partners(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_6()
            .items_center()
            .child(Card::new().child(div().text_xl().text_center().child(
                "\"Enabling transparent CSR impact across verified causes.\"",
            )))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_3()
                    .justify_center()
                    .children(PARTNERS.iter().map(|partner| {
                        div()
                            .px_5()
                            .py_2()
                            .rounded_xl()
                            .border_1()
                            .border_color(cx.theme().border)
                            .flex()
                            .items_center()
                            .gap_2()
                            .font_semibold()
                            .child(*partner)
                            .child(div().text_color(brand_blue()).child(Icon::new(IconName::CircleCheck)))
                    })),
            )
    }

    fn render_sectors(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(div().text_2xl().font_bold().child("Browse by Sector"))
            .child(div().flex().flex_wrap().gap_6().children(SECTORS.iter().map(
                |sector| {
                    let sector_id = sector.id;
                    div()
                        .id(sector.id)
                        .w(px(280.))
                        .p_6()
                        .rounded_xl()
                        .border_1()
                        .border_color(cx.theme().border)
                        .bg(cx.theme().card)
                        .cursor_pointer()
                        .flex()
                        .flex_col()
                        .gap_3()
                        .child(
                            div()
                                .w(px(44.))
                                .h(px(44.))
                                .rounded_lg()
                                .bg(faded(brand_orange(), 0.12))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(brand_orange())
                                .child(Icon::new(sector_icon(sector.icon))),
                        )
                        .child(div().text_lg().font_bold().child(sector.name))
                        .child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(format!("{}+ Projects", sector.project_count)),
                        )
                        .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                            this.navigate(
                                Route::Projects {
                                    sector_id: sector_id.to_string(),
                                },
                                cx,
                            );
                        }))
                },
            )))
    }

    fn render_trust(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let trust_card = |icon: IconName,
                          color: gpui::Hsla,
                          title: &'static str,
                          text: &'static str,
                          cx: &mut Context<Self>| {
            div()
                .flex_1()
                .p_8()
                .rounded_xl()
                .border_1()
                .border_color(cx.theme().border)
                .bg(cx.theme().card)
                .flex()
                .flex_col()
                .items_center()
                .gap_3()
                .child(
                    div()
                        .w(px(56.))
                        .h(px(56.))
                        .rounded_full()
                        .bg(faded(color, 0.12))
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(color)
                        .child(Icon::new(icon)),
                )
                .child(div().text_lg().font_bold().child(title))
                .child(
                    div()
                        .text_sm()
                        .text_center()
                        .text_color(cx.theme().muted_foreground)
                        .child(text),
                )
        };

        div()
            .flex()
            .flex_col()
            .gap_6()
            .child(div().text_2xl().font_bold().text_center().child("Why Trust Us?"))
            .child(
                div()
                    .flex()
                    .gap_6()
                    .child(trust_card(
                        IconName::ChartPie,
                        brand_blue(),
                        "Transparency",
                        "Every rupee is traceable end-to-end. We utilize blockchain ledgers for fund tracking.",
                        cx,
                    ))
                    .child(trust_card(
                        IconName::CircleCheck,
                        brand_orange(),
                        "Impact First",
                        "We ensure measurable change across sectors with quarterly impact auditing.",
                        cx,
                    ))
                    .child(trust_card(
                        IconName::Star,
                        success_green(),
                        "Verified Trust",
                        "Only government-compliant companies and NGOs appear on our platform.",
                        cx,
                    )),
            )
    }

    fn render_contact(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let field_label = |text: &'static str, cx: &mut Context<Self>| {
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child(text)
        };

        Card::new()
            .child(div().text_2xl().font_bold().child("Get in Touch"))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Have questions about registration or project submission? Our CSR support team is here to help."),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child("Head Office: Cyber Hub, DLF Phase 2, Gurugram — support@csrimpact.org"),
            )
            .child(field_label("FULL NAME *", cx))
            .child(TextInput::new(&self.contact_name_input))
            .child(field_label("EMAIL ADDRESS *", cx))
            .child(TextInput::new(&self.contact_email_input))
            .child(field_label("MESSAGE *", cx))
            .child(TextInput::new(&self.contact_message_input))
            .child(
                Button::new("send-message")
                    .primary()
                    .w_full()
                    .label("Send Message")
                    .on_click(cx.listener(|this: &mut Self, _, window, cx| {
                        this.submit_contact(window, cx);
                    })),
            )
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_12()
            .p_8()
            .child(self.render_hero(cx))
            .child(self.render_partners(cx))
            .child(self.render_sectors(cx))
            .child(self.render_trust(cx))
            .child(self.render_contact(cx))
    }
}
