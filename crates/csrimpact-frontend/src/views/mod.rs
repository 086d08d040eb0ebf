mod dashboard_page;
mod impact_reports_page;
mod login_page;
mod not_found_page;
mod project_details_page;
mod project_list_page;
mod submit_proposal_page;
mod track_status_page;

use csrimpact_bridge::session::UserRole;
use gpui::{
    AnyView, AppContext, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::components::{brand_orange, faded, notification_stack::NotificationStack, role_accent};
use crate::entities::DataEntities;
use crate::router::Route;
use crate::{
    BackendBridge,
    views::{
        dashboard_page::DashboardPage, impact_reports_page::ImpactReportsPage,
        login_page::LoginPage, not_found_page::NotFoundPage,
        project_details_page::ProjectDetailsPage, project_list_page::ProjectListPage,
        submit_proposal_page::SubmitProposalPage, track_status_page::TrackStatusPage,
    },
};

/// Root view: the navbar, the routed page, and the notification stack.
///
/// The active page view is rebuilt whenever the router changes; the role it
/// resolves at construction stays fixed for that page instance.
pub struct AppShell {
    data: DataEntities,
    active_view: AnyView,
}

impl AppShell {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        cx.observe_in(&data.router, window, |this: &mut Self, _, window, cx| {
            this.rebuild_active_view(window, cx);
        })
        .detach();
        cx.observe(&data.session, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.notifications, |_, _, cx| cx.notify())
            .detach();

        let route = data.router.read(cx).route().clone();
        let active_view = Self::build_view(data, &route, window, cx);
        Self {
            data: data.clone(),
            active_view,
        }
    }

    fn rebuild_active_view(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let route = self.data.router.read(cx).route().clone();
        self.active_view = Self::build_view(&self.data, &route, window, cx);
        cx.notify();
    }

    fn build_view(
        data: &DataEntities,
        route: &Route,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyView {
        match route {
            Route::Login { tab } => cx.new(|cx| LoginPage::new(data, *tab, window, cx)).into(),
            Route::Dashboard => cx.new(|cx| DashboardPage::new(data, window, cx)).into(),
            Route::Projects { sector_id } => cx
                .new(|cx| ProjectListPage::new(data, sector_id.clone(), cx))
                .into(),
            Route::Project { project_id } => cx
                .new(|cx| ProjectDetailsPage::new(data, project_id.clone(), window, cx))
                .into(),
            Route::SubmitProposal => cx
                .new(|cx| SubmitProposalPage::new(data, window, cx))
                .into(),
            Route::TrackStatus => cx.new(|cx| TrackStatusPage::new(data, cx)).into(),
            Route::ImpactReports => cx.new(|_| ImpactReportsPage::new(data)).into(),
            Route::NotFound { path } => cx.new(|_| NotFoundPage::new(data, path.clone())).into(),
        }
    }

    fn render_navbar(&self, role: UserRole, route: &Route, cx: &mut Context<Self>) -> impl IntoElement {
        let links: Vec<(&'static str, Route)> = match role {
            UserRole::Company => vec![
                ("Dashboard", Route::Dashboard),
                ("Impact Reports", Route::ImpactReports),
            ],
            UserRole::Ngo => vec![
                ("Dashboard", Route::Dashboard),
                ("Submit Proposal", Route::SubmitProposal),
                ("Track Status", Route::TrackStatus),
            ],
        };
        let active_route = route.clone();

        div()
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            .py_3()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .w_6()
                            .h_6()
                            .rounded_md()
                            .bg(brand_orange())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_sm()
                            .font_bold()
                            .child("C"),
                    )
                    .child(div().text_lg().font_bold().child("CSRImpact")),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(links.into_iter().map(|(label, target)| {
                        let active = active_route == target;
                        let button = Button::new(label).label(label);
                        let button = if active {
                            button.primary()
                        } else {
                            button.ghost()
                        };
                        button.on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                            let target = target.clone();
                            this.data.router.update(cx, |router, cx| {
                                router.push(target, None, cx);
                            });
                        }))
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_full()
                            .border_1()
                            .border_color(faded(role_accent(role), 0.4))
                            .text_xs()
                            .font_semibold()
                            .text_color(role_accent(role))
                            .child(match role {
                                UserRole::Company => "Corporate Partner",
                                UserRole::Ngo => "NGO Partner",
                            }),
                    )
                    .child(
                        Button::new("logout").outline().label("Logout").on_click(
                            cx.listener(|this: &mut Self, _, _, cx| {
                                this.data.router.update(cx, |router, cx| {
                                    router.push(Route::Login { tab: None }, None, cx);
                                });
                                let bridge = cx.global::<BackendBridge>().clone();
                                cx.spawn(async move |_, _| {
                                    bridge.logout().await;
                                })
                                .detach();
                            }),
                        ),
                    ),
            )
    }
}

impl Render for AppShell {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.data.router.read(cx).route().clone();
        let nav_role = self.data.router.read(cx).nav_role();
        let persisted_role = self.data.session.read(cx).persisted_role;
        let role = UserRole::resolve(nav_role, persisted_role);
        let notifications = self.data.notifications.read(cx).notifications.clone();
        let on_login = matches!(route, Route::Login { .. });

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .when(!on_login, |this| {
                this.child(self.render_navbar(role, &route, cx))
            })
            .child(
                div()
                    .id("page-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(self.active_view.clone()),
            )
            .child(NotificationStack::new(notifications))
    }
}
