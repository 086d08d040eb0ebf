use gpui::{
    AnyElement, App, Hsla, IntoElement, ParentElement, RenderOnce, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::ActiveTheme;

/// Rounded, bordered content container used across all pages.
#[derive(Default, IntoElement)]
pub struct Card {
    accent: Option<Hsla>,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tints the card border with an accent color.
    pub fn accent(mut self, color: Hsla) -> Self {
        self.accent = Some(color);
        self
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .rounded_xl()
            .border_1()
            .border_color(cx.theme().border)
            .when_some(self.accent, |this, color| this.border_color(color))
            .bg(cx.theme().card)
            .p_6()
            .flex()
            .flex_col()
            .gap_3()
            .children(self.children)
    }
}
