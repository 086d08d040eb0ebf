use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::entities::DataEntities;
use crate::router::Route;

/// Fallback view for paths outside the route table.
pub struct NotFoundPage {
    data: DataEntities,
    path: String,
}

impl NotFoundPage {
    pub fn new(data: &DataEntities, path: String) -> Self {
        Self {
            data: data.clone(),
            path,
        }
    }
}

impl Render for NotFoundPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_4()
            .py_24()
            .child(div().text_2xl().font_bold().child("Page not found"))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(format!("Nothing is mapped to {:?}.", self.path)),
            )
            .child(
                Button::new("go-dashboard")
                    .primary()
                    .label("Go to Dashboard")
                    .on_click(cx.listener(|this: &mut Self, _, _, cx| {
                        this.data.router.update(cx, |router, cx| {
                            router.push(Route::Dashboard, None, cx);
                        });
                    })),
            )
    }
}
