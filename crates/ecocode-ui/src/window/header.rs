//! Header bar

use super::{rgb, rgba, WorkbenchWindow};
use ecocode_core::{HeaderAction, LayoutMode, APP_TITLE};
use ecocode_ui::components::{svg_icon, IconName, IconSize};
use ecocode_ui::layout;
use gpui::prelude::FluentBuilder;
use gpui::*;

impl WorkbenchWindow {
    pub(super) fn render_header(&self, mode: LayoutMode, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let actions = ecocode_core::layout::header_actions(mode);
        let has_menu = actions.contains(&HeaderAction::MenuToggle);

        div()
            .id("header")
            .w_full()
            .h(px(layout::HEADER_HEIGHT))
            .flex_shrink_0()
            .px(px(self.theme.spacing.lg))
            .flex()
            .items_center()
            .justify_between()
            .bg(rgb(colors.header_bg))
            .border_b_1()
            .border_color(rgb(colors.border))
            // Left side: menu toggle and app title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(self.theme.spacing.md))
                    .when(has_menu, |el| {
                        el.child(
                            div()
                                .id("menu-toggle")
                                .w(px(32.0))
                                .h(px(32.0))
                                .flex()
                                .items_center()
                                .justify_center()
                                .rounded(px(layout::BORDER_RADIUS))
                                .cursor_pointer()
                                .hover(|s| s.bg(rgba(colors.hover)))
                                .on_click(cx.listener(|this, _, cx| {
                                    this.toggle_chat(cx);
                                }))
                                .child(
                                    svg_icon(HeaderAction::MenuToggle, IconSize::Medium)
                                        .text_color(rgb(colors.text_primary)),
                                ),
                        )
                    })
                    .child(
                        div()
                            .w(px(28.0))
                            .h(px(28.0))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded_full()
                            .bg(rgba(colors.primary.with_alpha(0.15)))
                            .child(
                                svg_icon(IconName::Code, IconSize::Small)
                                    .text_color(rgb(colors.primary)),
                            ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(colors.text_primary))
                            .child(APP_TITLE),
                    ),
            )
            // Right side: badge and actions
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(self.theme.spacing.sm))
                    .children(
                        actions
                            .into_iter()
                            .filter(|action| !action.is_interactive())
                            .map(|action| self.render_header_item(action)),
                    ),
            )
    }

    fn render_header_item(&self, action: HeaderAction) -> impl IntoElement {
        let colors = &self.theme.colors;
        let is_badge = action == HeaderAction::ReadOnlyBadge;
        let is_primary = action == HeaderAction::Publish;

        div()
            .id(SharedString::from(format!("header-{}", action.label().to_lowercase())))
            .h(px(30.0))
            .px(px(10.0))
            .flex()
            .items_center()
            .gap(px(6.0))
            .rounded(px(layout::BORDER_RADIUS))
            .text_xs()
            .when(is_badge, |el| {
                el.bg(rgba(colors.warning.with_alpha(0.12)))
                    .text_color(rgb(colors.warning))
            })
            .when(is_primary, |el| {
                el.bg(rgb(colors.primary))
                    .text_color(rgb(colors.primary_foreground))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgb(colors.primary_hover)))
            })
            .when(!is_badge && !is_primary, |el| {
                el.border_1()
                    .border_color(rgb(colors.border))
                    .text_color(rgb(colors.text_primary))
                    .cursor_pointer()
                    .hover(|s| s.bg(rgba(colors.hover)))
            })
            .child(svg_icon(action, IconSize::XSmall).text_color(if is_primary {
                rgb(colors.primary_foreground)
            } else if is_badge {
                rgb(colors.warning)
            } else {
                rgb(colors.text_secondary)
            }))
            .child(action.label())
    }
}
