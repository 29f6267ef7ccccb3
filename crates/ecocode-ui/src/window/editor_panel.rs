//! Editor panel: tab bar, code view, preview and console

use super::{rgb, rgba, WorkbenchWindow};
use ecocode_core::editor::console_log;
use ecocode_core::types::ConsoleLevel;
use ecocode_core::{EditorTab, CODE_SNIPPET, PREVIEW_PAGE};
use ecocode_ui::components::{svg_icon, IconName, IconSize};
use ecocode_ui::layout;
use gpui::prelude::FluentBuilder;
use gpui::*;

impl WorkbenchWindow {
    pub(super) fn render_editor_panel(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let editor = self.model.workbench.editor();
        let tab = editor.active_tab();
        let show_tree = tab == EditorTab::Code && !editor.is_full_width();

        let content = match tab {
            EditorTab::Code => div()
                .size_full()
                .flex()
                .flex_row()
                .when(show_tree, |el| el.child(self.render_file_tree(cx)))
                .child(self.render_code_view())
                .into_any_element(),
            EditorTab::Preview => self.render_preview().into_any_element(),
            EditorTab::Split => div()
                .size_full()
                .flex()
                .flex_row()
                .child(div().flex_1().min_w_0().h_full().child(self.render_code_view()))
                .child(div().w(px(1.0)).h_full().bg(rgb(colors.border)))
                .child(div().flex_1().min_w_0().h_full().child(self.render_preview()))
                .into_any_element(),
            EditorTab::Console => self.render_console().into_any_element(),
        };

        div()
            .id("editor-panel")
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.code_bg))
            .child(self.render_tab_bar(cx))
            .child(div().flex_1().min_h_0().overflow_hidden().child(content))
    }

    // ========================================================================
    // Tab Bar
    // ========================================================================

    fn render_tab_bar(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let editor = self.model.workbench.editor();
        let active = editor.active_tab();
        let is_building = editor.is_building();
        let full_width_icon = if editor.is_full_width() {
            IconName::Minimize
        } else {
            IconName::Maximize
        };

        div()
            .id("editor-tab-bar")
            .w_full()
            .h(px(layout::TAB_BAR_HEIGHT))
            .flex_shrink_0()
            .px(px(self.theme.spacing.sm))
            .flex()
            .items_center()
            .justify_between()
            .bg(rgb(colors.panel_bg))
            .border_b_1()
            .border_color(rgb(colors.border_subtle))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(2.0))
                    .children(EditorTab::ALL.into_iter().map(|tab| {
                        let is_active = tab == active;
                        div()
                            .id(SharedString::from(format!("tab-{}", tab.label().to_lowercase())))
                            .h(px(30.0))
                            .px(px(self.theme.spacing.md))
                            .flex()
                            .items_center()
                            .gap(px(6.0))
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .text_xs()
                            .cursor_pointer()
                            .when(is_active, |el| {
                                el.bg(rgb(colors.surface_elevated))
                                    .text_color(rgb(colors.text_primary))
                            })
                            .when(!is_active, |el| {
                                el.text_color(rgb(colors.text_secondary))
                                    .hover(|s| s.bg(rgba(colors.hover)))
                            })
                            .on_click(cx.listener(move |this, _, cx| {
                                this.model.workbench.editor_mut().set_tab(tab);
                                cx.notify();
                            }))
                            .child(svg_icon(tab, IconSize::XSmall))
                            .child(tab.label())
                    })),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(self.theme.spacing.sm))
                    .child(
                        div()
                            .id("toggle-full-width")
                            .w(px(28.0))
                            .h(px(28.0))
                            .flex()
                            .items_center()
                            .justify_center()
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .cursor_pointer()
                            .hover(|s| s.bg(rgba(colors.hover)))
                            .on_click(cx.listener(|this, _, cx| {
                                this.model.workbench.editor_mut().toggle_full_width();
                                cx.notify();
                            }))
                            .child(
                                svg_icon(full_width_icon, IconSize::Small)
                                    .text_color(rgb(colors.text_secondary)),
                            ),
                    )
                    .child(
                        div()
                            .id("run-button")
                            .h(px(28.0))
                            .px(px(self.theme.spacing.md))
                            .flex()
                            .items_center()
                            .gap(px(6.0))
                            .rounded(px(layout::BORDER_RADIUS_SM))
                            .text_xs()
                            .text_color(rgb(colors.primary_foreground))
                            .when(!is_building, |el| {
                                el.bg(rgb(colors.primary))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(rgb(colors.primary_hover)))
                            })
                            .when(is_building, |el| {
                                el.bg(rgba(colors.primary.with_alpha(0.5)))
                                    .cursor_default()
                            })
                            .on_click(cx.listener(|this, _, cx| {
                                if this.model.workbench.editor_mut().run() {
                                    cx.notify();
                                }
                            }))
                            .child(svg_icon(
                                if is_building { IconName::Loader } else { IconName::Play },
                                IconSize::XSmall,
                            ))
                            .child(editor.run_label()),
                    ),
            )
    }

    // ========================================================================
    // Code View
    // ========================================================================

    fn render_code_view(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let typography = &self.theme.typography;
        let open_file = self.model.workbench.editor().open_file().unwrap_or("untitled").to_string();
        let line_height = typography.small_size * typography.line_height;

        div()
            .id("code-view")
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.code_bg))
            .child(
                div()
                    .h(px(32.0))
                    .flex_shrink_0()
                    .px(px(self.theme.spacing.md))
                    .flex()
                    .items_center()
                    .gap(px(6.0))
                    .border_b_1()
                    .border_color(rgb(colors.border_subtle))
                    .text_xs()
                    .text_color(rgb(colors.text_secondary))
                    .child(svg_icon(IconName::File, IconSize::XSmall))
                    .child(open_file),
            )
            .child(
                div()
                    .id("code-lines")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .p(px(self.theme.spacing.md))
                    .font_family("monospace")
                    .text_size(px(typography.small_size))
                    .children(CODE_SNIPPET.lines().enumerate().map(|(idx, line)| {
                        div()
                            .h(px(line_height))
                            .flex()
                            .whitespace_nowrap()
                            .child(
                                div()
                                    .w(px(36.0))
                                    .flex_shrink_0()
                                    .text_color(rgb(colors.line_number))
                                    .child(format!("{}", idx + 1)),
                            )
                            .child(
                                div()
                                    .text_color(rgb(colors.code_text))
                                    .child(line.to_string()),
                            )
                    })),
            )
    }

    // ========================================================================
    // Preview
    // ========================================================================

    fn render_preview(&self) -> impl IntoElement {
        let colors = &self.theme.colors;

        if self.model.workbench.editor().is_loading() {
            return div()
                .id("preview")
                .size_full()
                .flex()
                .flex_col()
                .items_center()
                .justify_center()
                .gap(px(self.theme.spacing.md))
                .bg(rgb(colors.surface))
                .child(svg_icon(IconName::Loader, IconSize::Large).text_color(rgb(colors.primary)))
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(colors.text_secondary))
                        .child("Loading preview..."),
                );
        }

        let page = &PREVIEW_PAGE;
        let [secondary_button, primary_button] = page.header_buttons;

        div()
            .id("preview")
            .size_full()
            .overflow_y_scroll()
            .flex()
            .flex_col()
            .bg(rgb(colors.surface))
            // Page header
            .child(
                div()
                    .w_full()
                    .p(px(self.theme.spacing.lg))
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(rgb(colors.border))
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child(page.title),
                    )
                    .child(
                        div()
                            .flex()
                            .gap(px(self.theme.spacing.sm))
                            .child(
                                div()
                                    .px(px(self.theme.spacing.lg))
                                    .py(px(self.theme.spacing.sm))
                                    .rounded(px(layout::BORDER_RADIUS))
                                    .border_1()
                                    .border_color(rgb(colors.border))
                                    .text_sm()
                                    .child(secondary_button),
                            )
                            .child(
                                div()
                                    .px(px(self.theme.spacing.lg))
                                    .py(px(self.theme.spacing.sm))
                                    .rounded(px(layout::BORDER_RADIUS))
                                    .bg(rgb(colors.primary))
                                    .text_color(rgb(colors.primary_foreground))
                                    .text_sm()
                                    .child(primary_button),
                            ),
                    ),
            )
            // Welcome card
            .child(
                div()
                    .p(px(self.theme.spacing.xl))
                    .child(
                        div()
                            .p(px(self.theme.spacing.xl))
                            .rounded(px(layout::BORDER_RADIUS))
                            .bg(rgb(colors.surface_elevated))
                            .flex()
                            .flex_col()
                            .gap(px(self.theme.spacing.lg))
                            .child(
                                div()
                                    .text_lg()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(page.heading),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(colors.text_secondary))
                                    .child(page.intro),
                            )
                            .child(
                                div()
                                    .flex()
                                    .gap(px(self.theme.spacing.lg))
                                    .children(page.cards.iter().map(|card| {
                                        div()
                                            .flex_1()
                                            .p(px(self.theme.spacing.lg))
                                            .rounded(px(layout::BORDER_RADIUS))
                                            .border_1()
                                            .border_color(rgb(colors.border))
                                            .flex()
                                            .flex_col()
                                            .gap(px(self.theme.spacing.sm))
                                            .child(
                                                div()
                                                    .text_base()
                                                    .font_weight(FontWeight::MEDIUM)
                                                    .child(card.title),
                                            )
                                            .child(
                                                div()
                                                    .text_sm()
                                                    .text_color(rgb(colors.text_secondary))
                                                    .child(card.body),
                                            )
                                    })),
                            ),
                    ),
            )
    }

    // ========================================================================
    // Console
    // ========================================================================

    fn render_console(&self) -> impl IntoElement {
        let colors = &self.theme.colors;

        div()
            .id("console")
            .size_full()
            .overflow_y_scroll()
            .p(px(self.theme.spacing.lg))
            .flex()
            .flex_col()
            .gap(px(self.theme.spacing.xs))
            .bg(rgb(colors.code_bg))
            .font_family("monospace")
            .text_size(px(self.theme.typography.small_size))
            .children(console_log().into_iter().map(|line| {
                div()
                    .text_color(match line.level {
                        ConsoleLevel::Info => rgb(colors.code_text),
                        ConsoleLevel::Warning => rgb(colors.warning),
                    })
                    .child(line.text)
            }))
    }
}
