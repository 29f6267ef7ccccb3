//! Main Eco-Code window
//!
//! - Header: title, menu toggle (mobile), status badge, actions (desktop)
//! - ChatPanel: resizable on desktop, percentage of the window width
//! - EditorPanel: tabs, run button, file tree, code / preview / console

mod chat_panel;
mod editor_panel;
mod file_tree;
mod header;

use ecocode_core::{LayoutMode, MobilePane, Point, PointerEvent, ResizeCursor, Viewport};
use ecocode_ui::components::{apply_edit, key_action, KeyAction};
use ecocode_ui::{Rgba as ThemeRgba, Theme, WorkbenchModel};
use gpui::prelude::FluentBuilder;
use gpui::*;
use std::time::Duration;
use tracing::debug;

/// Interval between timer polls
const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ============================================================================
// Window State
// ============================================================================

pub struct WorkbenchWindow {
    theme: Theme,
    model: WorkbenchModel,
    /// Focus handle
    focus_handle: FocusHandle,
    /// Scroll handle for the message list (auto-scroll)
    message_scroll_handle: ScrollHandle,
    /// Message count at the last scroll, to detect new messages
    last_message_count: usize,
}

impl WorkbenchWindow {
    pub fn new(cx: &mut ViewContext<Self>, theme: Theme, model: WorkbenchModel) -> Self {
        let focus_handle = cx.focus_handle();
        cx.focus(&focus_handle);

        // Spawn a timer to apply fired workbench timers
        cx.spawn(|view, mut cx| async move {
            loop {
                cx.background_executor().timer(POLL_INTERVAL).await;

                let result = view.update(&mut cx, |this, cx| {
                    if this.model.poll_and_process_updates() {
                        this.scroll_to_latest_message();
                        cx.notify();
                    }
                });
                if result.is_err() {
                    debug!("Window released, stopping poll loop");
                    break;
                }
            }
        })
        .detach();

        let last_message_count = model.workbench.chat().messages().len();
        Self {
            theme,
            model,
            focus_handle,
            message_scroll_handle: ScrollHandle::new(),
            last_message_count,
        }
    }

    // ========================================================================
    // Event Handlers
    // ========================================================================

    fn scroll_to_latest_message(&mut self) {
        let count = self.model.workbench.chat().messages().len();
        if count > self.last_message_count {
            self.message_scroll_handle.scroll_to_item(count - 1);
        }
        self.last_message_count = count;
    }

    fn chat_visible(&self) -> bool {
        !matches!(
            self.model.workbench.layout().mode(),
            LayoutMode::Mobile(MobilePane::Editor)
        )
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut ViewContext<Self>) {
        if !self.chat_visible() {
            return;
        }

        let keystroke = &event.keystroke;
        let action = key_action(
            &keystroke.key,
            keystroke.ime_key.as_deref(),
            keystroke.modifiers.shift,
            keystroke.modifiers.platform || keystroke.modifiers.control,
        );

        match action {
            KeyAction::Submit => self.handle_send_message(cx),
            KeyAction::Ignore => {}
            edit => {
                let mut buffer = self.model.workbench.chat().input().to_string();
                if apply_edit(&mut buffer, &edit) {
                    self.model.workbench.chat_mut().set_input(buffer);
                    cx.notify();
                }
            }
        }
    }

    fn handle_send_message(&mut self, cx: &mut ViewContext<Self>) {
        if self.model.send_message() {
            self.scroll_to_latest_message();
            cx.notify();
        }
    }

    fn handle_copy_message(&mut self, id: &str, cx: &mut ViewContext<Self>) {
        if self.model.copy_message(id) {
            cx.notify();
        }
    }

    fn toggle_chat(&mut self, cx: &mut ViewContext<Self>) {
        if self.model.workbench.layout_mut().toggle_chat() {
            cx.notify();
        }
    }

    fn start_resizing_chat(&mut self, _event: &MouseDownEvent, cx: &mut ViewContext<Self>) {
        self.model.workbench.chat_panel_mut().start();
        cx.notify();
    }

    fn resize_chat(&mut self, event: &MouseMoveEvent, cx: &mut ViewContext<Self>) {
        if !self.model.workbench.chat_panel().is_resizing() {
            return;
        }

        let bounds = cx.viewport_size();
        let viewport = Viewport {
            width: f32::from(bounds.width) as f64,
            height: f32::from(bounds.height) as f64,
        };
        let pointer = PointerEvent::Mouse(Point {
            x: f32::from(event.position.x) as f64,
            y: f32::from(event.position.y) as f64,
        });

        if self.model.workbench.chat_panel_mut().pointer_moved(&pointer, viewport) {
            cx.notify();
        }
    }

    fn stop_resizing_chat(&mut self, _event: &MouseUpEvent, cx: &mut ViewContext<Self>) {
        if self.model.workbench.chat_panel().is_resizing() {
            self.model.workbench.chat_panel_mut().end();
            cx.notify();
        }
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn render_chat_resizer(&self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let resizing = self.model.workbench.chat_panel().is_resizing();

        div()
            .id("chat-resizer")
            .w(px(ecocode_ui::layout::RESIZER_WIDTH))
            .h_full()
            .flex_shrink_0()
            .cursor(CursorStyle::ResizeLeftRight)
            .bg(rgb(colors.border_subtle))
            .when(resizing, |el| el.bg(rgba(colors.primary.with_alpha(0.35))))
            .when(!resizing, |el| {
                el.hover(|s| s.bg(rgba(colors.border.with_alpha(0.6))))
            })
            .on_mouse_down(MouseButton::Left, cx.listener(|this, event: &MouseDownEvent, cx| {
                this.start_resizing_chat(event, cx);
            }))
    }

    fn render_body(&self, mode: LayoutMode, cx: &mut ViewContext<Self>) -> AnyElement {
        match mode {
            LayoutMode::Mobile(MobilePane::Chat) => div()
                .size_full()
                .child(self.render_chat_panel(cx))
                .into_any_element(),
            LayoutMode::Mobile(MobilePane::Editor) => div()
                .size_full()
                .child(self.render_editor_panel(cx))
                .into_any_element(),
            LayoutMode::Desktop => {
                let fraction = (self.model.workbench.chat_panel().size() / 100.0) as f32;
                div()
                    .size_full()
                    .flex()
                    .flex_row()
                    .child(
                        div()
                            .w(relative(fraction))
                            .h_full()
                            .flex_shrink_0()
                            .child(self.render_chat_panel(cx)),
                    )
                    .child(self.render_chat_resizer(cx))
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .h_full()
                            .child(self.render_editor_panel(cx)),
                    )
                    .into_any_element()
            }
        }
    }
}

// ============================================================================
// Render Implementation
// ============================================================================

impl FocusableView for WorkbenchWindow {
    fn focus_handle(&self, _cx: &AppContext) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for WorkbenchWindow {
    fn render(&mut self, cx: &mut ViewContext<Self>) -> impl IntoElement {
        let viewport = cx.viewport_size();
        self.model
            .workbench
            .layout_mut()
            .update_viewport(f32::from(viewport.width) as f64);

        let mode = self.model.workbench.layout().mode();
        let drag_cursor = self.model.workbench.cursor_hint().map(cursor_style);
        let colors = self.theme.colors.clone();
        let body = self.render_body(mode, cx);

        div()
            .id("ecocode-window")
            .key_context("WorkbenchWindow")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(rgb(colors.app_bg))
            .text_color(rgb(colors.text_primary))
            .when_some(drag_cursor, |el, cursor| el.cursor(cursor))
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, cx| {
                this.resize_chat(event, cx);
            }))
            .on_mouse_up(MouseButton::Left, cx.listener(|this, event: &MouseUpEvent, cx| {
                this.stop_resizing_chat(event, cx);
            }))
            .on_mouse_up_out(MouseButton::Left, cx.listener(|this, event: &MouseUpEvent, cx| {
                this.stop_resizing_chat(event, cx);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, cx| {
                this.handle_key_down(event, cx);
            }))
            .child(self.render_header(mode, cx))
            .child(
                div()
                    .flex_1()
                    .min_h_0()  // Allow shrinking so the panels can scroll
                    .overflow_hidden()
                    .child(body),
            )
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn cursor_style(cursor: ResizeCursor) -> CursorStyle {
    match cursor {
        ResizeCursor::EastWest => CursorStyle::ResizeLeftRight,
        ResizeCursor::NorthSouth => CursorStyle::ResizeUpDown,
    }
}

fn rgb(c: ThemeRgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: 1.0,
    }
}

fn rgba(c: ThemeRgba) -> Rgba {
    Rgba {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}
