use csrimpact_bridge::catalog;
use csrimpact_bridge::session::UserRole;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, px,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input as TextInput, InputState},
};

use crate::BackendBridge;
use crate::components::{
    analysis_teal, brand_blue, brand_orange, card::Card, faded, role_accent,
    segmented_bar::SegmentedBar,
};
use crate::entities::DataEntities;

/// The login/registration form with its two role tabs, the staged
/// verification overlay, and the AI sector-match panel for NGO
/// registration.
pub struct LoginPage {
    data: DataEntities,
    role: UserRole,
    registering: bool,
    email_input: Entity<InputState>,
    password_input: Entity<InputState>,
    org_name_input: Entity<InputState>,
    registration_id_input: Entity<InputState>,
    gstin_input: Entity<InputState>,
    mission_input: Entity<InputState>,
}

impl LoginPage {
    pub fn new(
        data: &DataEntities,
        tab: Option<UserRole>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&data.verification, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.analysis, |_, _, cx| cx.notify()).detach();

        Self {
            data: data.clone(),
            role: tab.unwrap_or_default(),
            registering: false,
            email_input: cx.new(|cx| InputState::new(window, cx).placeholder("name@org.com")),
            password_input: cx
                .new(|cx| InputState::new(window, cx).placeholder("••••••••").masked(true)),
            org_name_input: cx.new(|cx| InputState::new(window, cx).placeholder("Organization name")),
            registration_id_input: cx.new(|cx| InputState::new(window, cx).placeholder("L12345...")),
            gstin_input: cx.new(|cx| InputState::new(window, cx).placeholder("27AAAA...")),
            mission_input: cx.new(|cx| {
                InputState::new(window, cx).placeholder(
                    "Describe your mission (e.g., 'We provide clean water to rural villages...')",
                )
            }),
        }
    }

    fn set_role(&mut self, role: UserRole, window: &mut Window, cx: &mut Context<Self>) {
        if self.role == role {
            return;
        }
        self.role = role;

        // Switching tabs drops any sector suggestion and aborts a running
        // analysis, like the original clearing its mission state.
        self.data.analysis.update(cx, |analysis, cx| {
            analysis.reset();
            cx.notify();
        });
        self.mission_input
            .update(cx, |input, cx| input.set_value("", window, cx));
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.cancel_analysis().await;
        })
        .detach();
        cx.notify();
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let role = self.role;
        let registering = self.registering;
        self.data.verification.update(cx, |verification, cx| {
            verification.begin();
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.login(role, registering).await;
        })
        .detach();
    }

    fn analyze_mission(&mut self, cx: &mut Context<Self>) {
        let description = self.mission_input.read(cx).value().to_string();
        if description.trim().is_empty() {
            return;
        }
        self.data.analysis.update(cx, |analysis, cx| {
            analysis.begin();
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.analyze_mission(description).await;
        })
        .detach();
    }

    fn render_tab_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let tab_button = |label: &'static str, active: bool| {
            let button = Button::new(label).label(label).w_full();
            if active { button.primary() } else { button.ghost() }
        };

        div()
            .flex()
            .gap_2()
            .child(
                div().flex_1().child(
                    tab_button("CSR Company", self.role == UserRole::Company).on_click(
                        cx.listener(|this: &mut Self, _, window, cx| {
                            this.set_role(UserRole::Company, window, cx);
                        }),
                    ),
                ),
            )
            .child(
                div().flex_1().child(
                    tab_button("Creator / NGO", self.role == UserRole::Ngo).on_click(cx.listener(
                        |this: &mut Self, _, window, cx| {
                            this.set_role(UserRole::Ngo, window, cx);
                        },
                    )),
                ),
            )
    }

    fn render_analysis_panel(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let analysis = *self.data.analysis.read(cx);
        let mission_blank = self.mission_input.read(cx).value().trim().is_empty();
        let teal = analysis_teal();

        div()
            .p_4()
            .rounded_xl()
            .border_1()
            .border_color(cx.theme().border)
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_xs()
                    .font_bold()
                    .text_color(brand_blue())
                    .child("AI SECTOR MATCH"),
            )
            .child(TextInput::new(&self.mission_input))
            .map(|this| {
                if analysis.analyzing {
                    this.child(
                        div()
                            .p_3()
                            .rounded_lg()
                            .border_1()
                            .border_color(faded(teal, 0.3))
                            .bg(faded(teal, 0.08))
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(
                                div()
                                    .text_xs()
                                    .font_bold()
                                    .text_color(teal)
                                    .child("AI ANALYSIS IN PROGRESS..."),
                            )
                            .child(SegmentedBar::new(
                                analysis.percent as f32 / 100.0,
                                teal,
                            ))
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(teal)
                                    .child(format!("{}%", analysis.percent)),
                            ),
                    )
                } else if let Some(sector) =
                    analysis.suggested_sector.and_then(catalog::sector_by_id)
                {
                    this.child(
                        div()
                            .p_2()
                            .rounded_lg()
                            .border_1()
                            .border_color(faded(brand_blue(), 0.3))
                            .bg(faded(brand_blue(), 0.15))
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .child(div().text_color(brand_blue()).child(Icon::new(IconName::CircleCheck)))
                                    .child(div().text_sm().font_bold().child(sector.name)),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(brand_blue())
                                    .child("RECOMMENDED"),
                            ),
                    )
                } else {
                    this.child(
                        Button::new("analyze-mission")
                            .outline()
                            .w_full()
                            .icon(IconName::Bot)
                            .label("Analyze & Suggest Sector")
                            .disabled(mission_blank)
                            .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                this.analyze_mission(cx);
                            })),
                    )
                }
            })
    }

    fn render_form(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let accent = role_accent(self.role);
        let field_label = |text: &'static str, cx: &mut Context<Self>| {
            div()
                .text_xs()
                .text_color(cx.theme().muted_foreground)
                .child(text)
        };

        Card::new()
            .child(self.render_tab_header(cx))
            .child(
                div()
                    .text_xl()
                    .font_bold()
                    .text_center()
                    .child(if self.registering {
                        "Join the Platform"
                    } else {
                        "Welcome Back"
                    }),
            )
            .child(
                div()
                    .text_sm()
                    .text_center()
                    .text_color(cx.theme().muted_foreground)
                    .child(match self.role {
                        UserRole::Company => "Manage funds and track verified impact.",
                        UserRole::Ngo => "Submit projects and access CSR grants.",
                    }),
            )
            .map(|this| {
                if self.registering {
                    let this = this
                        .child(field_label("ORGANIZATION NAME", cx))
                        .child(TextInput::new(&self.org_name_input));
                    match self.role {
                        UserRole::Company => this
                            .child(field_label("CIN NUMBER", cx))
                            .child(TextInput::new(&self.registration_id_input))
                            .child(field_label("GSTIN", cx))
                            .child(TextInput::new(&self.gstin_input)),
                        UserRole::Ngo => this
                            .child(field_label("NGO REG ID (DARPAN)", cx))
                            .child(TextInput::new(&self.registration_id_input))
                            .child(self.render_analysis_panel(cx)),
                    }
                } else {
                    this.child(field_label("EMAIL ADDRESS", cx))
                        .child(TextInput::new(&self.email_input))
                        .child(field_label("PASSWORD", cx))
                        .child(TextInput::new(&self.password_input))
                }
            })
            .child(
                Button::new("login-submit")
                    .primary()
                    .w_full()
                    .label(if self.registering {
                        "Verify & Register"
                    } else {
                        "Login to Dashboard"
                    })
                    .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                        this.submit(cx);
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(if self.registering {
                        "Already have an account?"
                    } else {
                        "New to CSR Impact?"
                    })
                    .child(
                        Button::new("toggle-registering")
                            .ghost()
                            .label(if self.registering { "Login" } else { "Register Now" })
                            .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                                this.registering = !this.registering;
                                cx.notify();
                            })),
                    ),
            )
            .child(div().text_xs().text_center().text_color(faded(accent, 0.8)).child(
                match self.role {
                    UserRole::Company => "The trusted ecosystem for verifiable social impact.",
                    UserRole::Ngo => "Connect with top corporate donors.",
                },
            ))
    }

    fn render_verification(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let verification = self.data.verification.read(cx).clone();
        let accent = role_accent(self.role);
        let percent = (verification.fraction() * 100.0).min(100.0).round() as u8;

        Card::new().accent(faded(accent, 0.4)).map(|this| {
            if !verification.succeeded {
                this.child(
                    div()
                        .text_sm()
                        .font_bold()
                        .text_color(accent)
                        .child("SYSTEM ACCESS IN PROGRESS..."),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child("VERIFYING ENCRYPTED CREDENTIALS"),
                )
                .child(SegmentedBar::new(verification.fraction(), accent))
                .child(
                    div()
                        .text_xs()
                        .font_bold()
                        .text_color(accent)
                        .child(format!("{percent}%")),
                )
                .child(
                    div().flex().flex_col().gap_1().children(
                        verification
                            .completed_stages
                            .iter()
                            .map(|stage| {
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("[OK] {stage}"))
                            }),
                    ),
                )
            } else {
                this.child(
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap_4()
                        .py_8()
                        .child(
                            div()
                                .w(px(72.))
                                .h(px(72.))
                                .rounded_full()
                                .bg(faded(accent, 0.2))
                                .flex()
                                .items_center()
                                .justify_center()
                                .text_color(accent)
                                .child(Icon::new(IconName::CircleCheck)),
                        )
                        .child(div().text_xl().font_bold().child(if self.registering {
                            "IDENTITY VERIFIED"
                        } else {
                            "ACCESS GRANTED"
                        }))
                        .child(
                            div()
                                .text_xs()
                                .text_color(cx.theme().muted_foreground)
                                .child("SESSION SECURED"),
                        ),
                )
            }
        })
    }
}

impl Render for LoginPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let verifying = self.data.verification.read(cx).running;

        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .p_8()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .mb_6()
                    .child(
                        div()
                            .w_8()
                            .h_8()
                            .rounded_md()
                            .bg(brand_orange())
                            .flex()
                            .items_center()
                            .justify_center()
                            .font_bold()
                            .child("C"),
                    )
                    .child(div().text_2xl().font_bold().child("CSRImpact")),
            )
            .child(div().w(px(440.)).map(|this| {
                if verifying {
                    this.child(self.render_verification(cx))
                } else {
                    this.child(self.render_form(cx))
                }
            }))
    }
}
