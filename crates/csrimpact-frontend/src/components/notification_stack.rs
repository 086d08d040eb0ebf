use csrimpact_bridge::notification::{Notification, NotificationKind};
use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable, StyledExt, button::{Button, ButtonVariants}};

use super::{brand_blue, danger_red, faded, success_green};
use crate::BackendBridge;

/// Renders the shared notification queue as a stack in the top-right
/// corner, newest on top, each entry with its own dismiss button.
#[derive(IntoElement)]
pub struct NotificationStack {
    notifications: Vec<Notification>,
}

impl NotificationStack {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }
}

impl RenderOnce for NotificationStack {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        let card_bg = cx.theme().card;
        let muted = cx.theme().muted_foreground;

        div()
            .absolute()
            .top(px(72.))
            .right(px(24.))
            .flex()
            .flex_col()
            .gap_3()
            // Insertion order is oldest-first; display inverts it.
            .children(self.notifications.into_iter().rev().map(move |notification| {
                let (color, title, icon) = match notification.kind {
                    NotificationKind::Success => {
                        (success_green(), "Success", IconName::CircleCheck)
                    }
                    NotificationKind::Error => (danger_red(), "Error", IconName::TriangleAlert),
                    NotificationKind::Info => (brand_blue(), "Info", IconName::Info),
                };
                let id = notification.id;

                div()
                    .w(px(340.))
                    .p_4()
                    .rounded_xl()
                    .border_1()
                    .border_color(faded(color, 0.35))
                    .bg(card_bg)
                    .shadow_lg()
                    .flex()
                    .gap_3()
                    .items_start()
                    .child(div().text_color(color).child(Icon::new(icon)))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(div().text_sm().font_bold().child(title))
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(muted)
                                    .child(notification.text.clone()),
                            ),
                    )
                    .child(
                        Button::new(("dismiss-notification", id as usize))
                            .ghost()
                            .small()
                            .icon(IconName::Close)
                            .on_click(move |_, _, cx| {
                                let bridge = cx.global::<BackendBridge>().clone();
                                cx.spawn(async move |_| {
                                    bridge.dismiss_notification(id).await;
                                })
                                .detach();
                            }),
                    )
            }))
    }
}
