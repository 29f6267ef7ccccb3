//! Chat panel: message list and input bar

use super::{rgb, rgba, WorkbenchWindow};
use chrono::Local;
use ecocode_core::Message;
use ecocode_ui::components::{svg_icon, IconName, IconSize};
use ecocode_ui::layout;
use gpui::prelude::FluentBuilder;
use gpui::*;

const INPUT_PLACEHOLDER: &str = "Ask for coding help...";

impl WorkbenchWindow {
    pub(super) fn render_chat_panel(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("chat-panel")
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.panel_bg))
            .child(self.render_message_list(cx))
            .child(self.render_input_bar(cx))
    }

    fn render_message_list(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let messages = self.model.workbench.chat().messages();

        div()
            .id("message-list")
            .flex_1()
            .min_h_0()  // Allow shrinking for scrolling to work
            .w_full()
            .overflow_y_scroll()
            .track_scroll(&self.message_scroll_handle)
            .p(px(self.theme.spacing.lg))
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.lg))
            .children(messages.iter().map(|message| self.render_message(message, cx)))
    }

    fn render_message(&self, message: &Message, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_user = message.is_user();
        let is_copied = self.model.workbench.chat().is_copied(&message.id);
        let message_id = message.id.clone();
        let avatar_icon = if is_user { IconName::User } else { IconName::Bot };

        let avatar = div()
            .w(px(32.0))
            .h(px(32.0))
            .flex_shrink_0()
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(rgba(colors.primary.with_alpha(0.1)))
            .child(svg_icon(avatar_icon, IconSize::Medium).text_color(rgb(colors.primary)));

        let bubble = div()
            .max_w(relative(layout::BUBBLE_MAX_WIDTH))
            .flex()
            .flex_col()
            .gap(px(4.0))
            .px(px(self.theme.spacing.lg))
            .py(px(self.theme.spacing.sm))
            .rounded(px(16.0))
            .text_sm()
            .when(is_user, |el| {
                el.bg(rgb(colors.user_bubble))
                    .text_color(rgb(colors.primary_foreground))
            })
            .when(!is_user, |el| {
                el.bg(rgb(colors.assistant_bubble))
                    .text_color(rgb(colors.text_primary))
            })
            .child(message.content.clone())
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .gap(px(8.0))
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(colors.text_secondary))
                            .child(
                                message
                                    .timestamp
                                    .with_timezone(&Local)
                                    .format("%H:%M")
                                    .to_string(),
                            ),
                    )
                    // Only assistant messages can be copied
                    .when(!is_user, |el| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("copy-{}", message_id)))
                                .w(px(22.0))
                                .h(px(22.0))
                                .flex()
                                .items_center()
                                .justify_center()
                                .rounded_full()
                                .cursor_pointer()
                                .hover(|s| s.bg(rgba(colors.hover)))
                                .on_click(cx.listener(move |this, _, cx| {
                                    this.handle_copy_message(&message_id, cx);
                                }))
                                .child(
                                    svg_icon(
                                        if is_copied { IconName::Check } else { IconName::Copy },
                                        IconSize::XSmall,
                                    )
                                    .text_color(if is_copied {
                                        rgb(colors.success)
                                    } else {
                                        rgb(colors.text_secondary)
                                    }),
                                ),
                        )
                    }),
            );

        let row = div()
            .w_full()
            .flex_shrink_0()
            .flex()
            .gap(px(self.theme.spacing.md));

        if is_user {
            row.justify_end().child(bubble).child(avatar)
        } else {
            row.justify_start().child(avatar).child(bubble)
        }
    }

    fn render_input_bar(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let chat = self.model.workbench.chat();
        let input = chat.input().to_string();
        let can_send = chat.can_send();
        let is_empty = input.is_empty();

        div()
            .id("input-bar")
            .w_full()
            .flex_shrink_0()  // Never shrink, keep natural height
            .p(px(self.theme.spacing.lg))
            .flex()
            .items_center()
            .gap(px(self.theme.spacing.sm))
            .border_t_1()
            .border_color(rgb(colors.border_subtle))
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .min_h(px(40.0))
                    .px(px(self.theme.spacing.md))
                    .py(px(self.theme.spacing.sm))
                    .flex()
                    .items_center()
                    .rounded(px(layout::BORDER_RADIUS))
                    .bg(rgb(colors.input_bg))
                    .text_size(px(self.theme.typography.base_size))
                    .when(is_empty, |el| {
                        el.text_color(rgb(colors.text_disabled))
                            .child(INPUT_PLACEHOLDER)
                    })
                    .when(!is_empty, |el| {
                        el.text_color(rgb(colors.text_primary)).child(input)
                    }),
            )
            .child(
                div()
                    .id("send-button")
                    .w(px(40.0))
                    .h(px(40.0))
                    .flex_shrink_0()
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .when(can_send, |el| {
                        el.bg(rgb(colors.primary))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgb(colors.primary_hover)))
                    })
                    .when(!can_send, |el| {
                        el.bg(rgba(colors.primary.with_alpha(0.4)))
                            .cursor_default()
                    })
                    .on_click(cx.listener(|this, _, cx| {
                        this.handle_send_message(cx);
                    }))
                    .child(
                        svg_icon(IconName::Send, IconSize::Small)
                            .text_color(rgb(colors.primary_foreground)),
                    ),
            )
    }
}
