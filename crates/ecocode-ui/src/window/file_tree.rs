//! File explorer

use super::{rgb, rgba, WorkbenchWindow};
use ecocode_core::TreeRow;
use ecocode_ui::components::{svg_icon, IconName, IconSize};
use ecocode_ui::layout;
use gpui::prelude::FluentBuilder;
use gpui::*;

impl WorkbenchWindow {
    pub(super) fn render_file_tree(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let rows = self.model.workbench.files().visible_rows();

        div()
            .id("file-tree")
            .w(px(layout::FILE_TREE_WIDTH))
            .h_full()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .bg(rgb(colors.panel_bg))
            .border_r_1()
            .border_color(rgb(colors.border_subtle))
            // Header: title and new-file affordance
            .child(
                div()
                    .h(px(40.0))
                    .px(px(self.theme.spacing.md))
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(rgb(colors.border_subtle))
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(colors.text_primary))
                            .child("Files"),
                    )
                    .child(
                        div()
                            .id("new-file")
                            .w(px(24.0))
                            .h(px(24.0))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgba(colors.hover)))
                            .child(
                                svg_icon(IconName::Plus, IconSize::Small)
                                    .text_color(rgb(colors.text_secondary)),
                            ),
                    ),
            )
            .child(
                div()
                    .id("file-tree-rows")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .py(px(self.theme.spacing.xs))
                    .flex()
                    .flex_col()
                    .children(rows.into_iter().map(|row| self.render_tree_row(row, cx))),
            )
    }

    fn render_tree_row(&self, row: TreeRow, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let chevron = row.chevron();
        let icon = row.icon();
        let indent = row.indent();
        let row_id = row.id.clone();

        div()
            .id(SharedString::from(format!("row-{}", row.id)))
            .w_full()
            .h(px(layout::TREE_ITEM_HEIGHT))
            .pl(px(indent))
            .pr(px(self.theme.spacing.sm))
            .flex()
            .items_center()
            .gap(px(self.theme.spacing.xs))
            .cursor_pointer()
            .when(row.is_selected, |el| el.bg(rgba(colors.selection)))
            .when(!row.is_selected, |el| el.hover(|s| s.bg(rgba(colors.hover))))
            .on_click(cx.listener(move |this, _, cx| {
                if this.model.workbench.click_row(&row_id) {
                    cx.notify();
                }
            }))
            // Files get a spacer where folders show their chevron
            .child(match chevron {
                Some(chevron) => svg_icon(chevron, IconSize::XSmall)
                    .text_color(rgb(colors.text_secondary))
                    .into_any_element(),
                None => div().w(px(IconSize::XSmall.px())).into_any_element(),
            })
            .child(svg_icon(icon, IconSize::Small).text_color(if row.is_folder {
                rgb(colors.primary)
            } else {
                rgb(colors.text_secondary)
            }))
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .text_sm()
                    .text_ellipsis()
                    .text_color(rgb(colors.text_primary))
                    .child(row.label),
            )
    }
}
