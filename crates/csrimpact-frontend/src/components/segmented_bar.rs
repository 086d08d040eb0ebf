use gpui::{App, Hsla, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};
use gpui_component::ActiveTheme;

/// The ten-segment progress bar used by the verification overlay and the
/// AI-analysis panel.
#[derive(IntoElement)]
pub struct SegmentedBar {
    fraction: f32,
    color: Hsla,
    segments: usize,
}

impl SegmentedBar {
    pub fn new(fraction: f32, color: Hsla) -> Self {
        Self {
            fraction,
            color,
            segments: 10,
        }
    }
}

impl RenderOnce for SegmentedBar {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let muted = cx.theme().muted;
        div()
            .w_full()
            .flex()
            .gap_1()
            .children((0..self.segments).map(|index| {
                let lit = (index as f32 / self.segments as f32) < self.fraction;
                div()
                    .h(px(6.))
                    .flex_1()
                    .rounded_sm()
                    .bg(if lit { self.color } else { muted })
            }))
    }
}
