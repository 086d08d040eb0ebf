use csrimpact_bridge::catalog::{self, Project};
use csrimpact_bridge::money::{format_lakhs, percent_funded};
use gpui::{
    Context, IntoElement, ParentElement, Render, Styled, Window, div, px, relative,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::components::{brand_blue, brand_orange, card::Card, faded};
use crate::entities::DataEntities;
use crate::router::Route;

/// Project listing for one sector. An unknown sector id renders the
/// not-found state instead of failing.
pub struct ProjectListPage {
    data: DataEntities,
    sector_id: String,
}

impl ProjectListPage {
    pub fn new(data: &DataEntities, sector_id: String, _cx: &mut Context<Self>) -> Self {
        Self {
            data: data.clone(),
            sector_id,
        }
    }

    fn render_project_card(
        &self,
        index: usize,
        project: &'static Project,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let raised_fraction =
            percent_funded(project.funds_raised, project.funds_required) as f32 / 100.0;
        let project_id = project.id;

        Card::new()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().text_xl().font_bold().child(project.title))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_3()
                            .when(project.verified, |this| {
                                this.child(
                                    div()
                                        .text_color(brand_blue())
                                        .child(Icon::new(IconName::CircleCheck)),
                                )
                            })
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(format!("{} days left", project.days_left)),
                            ),
                    ),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(project.description),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child("RAISED"),
                            )
                            .child(
                                div()
                                    .font_bold()
                                    .text_color(brand_orange())
                                    .child(format_lakhs(project.funds_raised)),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child("GOAL"),
                            )
                            .child(div().font_bold().child(format_lakhs(project.funds_required))),
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
                            .bg(brand_orange())
                            .w(relative(raised_fraction)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("By {}", project.creator)),
                    )
                    .child(
                        Button::new(("view-project", index))
                            .outline()
                            .label("View Details")
                            .on_click(cx.listener(move |this: &mut Self, _, _, cx| {
                                this.data.router.update(cx, |router, cx| {
                                    router.push(
                                        Route::Project {
                                            project_id: project_id.to_string(),
                                        },
                                        None,
                                        cx,
                                    );
                                });
                            })),
                    ),
            )
    }
}

impl Render for ProjectListPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let back_button = Button::new("back")
            .ghost()
            .icon(IconName::ArrowLeft)
            .label("Back to Sectors")
            .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                this.data.router.update(cx, |router, cx| router.back(cx));
            }));

        let Some(sector) = catalog::sector_by_id(&self.sector_id) else {
            return div()
                .flex()
                .flex_col()
                .items_center()
                .gap_4()
                .py_24()
                .child(div().text_2xl().font_bold().child("Sector not found"))
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(format!("No sector with id {:?} exists.", self.sector_id)),
                )
                .child(back_button);
        };

        let projects: Vec<&'static Project> = catalog::projects_in_sector(sector.id).collect();

        div()
            .flex()
            .flex_col()
            .gap_6()
            .p_8()
            .child(div().child(back_button))
            .child(
                div()
                    .text_3xl()
                    .font_bold()
                    .child(format!("{} Projects", sector.name)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!(
                        "Explore verified opportunities to make a difference in {}.",
                        sector.name.to_lowercase()
                    )),
            )
            .map(|this| {
                if projects.is_empty() {
                    this.child(
                        div()
                            .py_16()
                            .text_center()
                            .text_color(faded(cx.theme().foreground, 0.5))
                            .child("No active projects in this sector currently."),
                    )
                } else {
                    this.children(
                        projects
                            .into_iter()
                            .enumerate()
                            .map(|(index, project)| self.render_project_card(index, project, cx)),
                    )
                }
            })
    }
}
