use gpui::{
    App, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, px,
};
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    collapsible::Collapsible,
    h_flex,
    text::TextView,
};

use crate::text::sanitize_and_format;

/// 1-based display label for the source at `index`.
pub fn source_label(index: usize) -> String {
    format!("Source {}", index + 1)
}

/// One collapsible source excerpt - stateful, toggles independently of its
/// siblings. The raw blob is sanitized once at construction; the body is
/// rendered as markdown.
pub struct SourceItem {
    index: usize,
    text: SharedString,
    open: bool,
}

impl SourceItem {
    pub fn new(index: usize, raw: &str) -> Self {
        Self {
            index,
            text: sanitize_and_format(raw).into(),
            open: false,
        }
    }

    pub fn label(&self) -> String {
        source_label(self.index)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the open/close state
    pub fn toggle(&mut self, cx: &mut Context<Self>) {
        self.open = !self.open;
        log::debug!("{} toggled open={}", self.label(), self.open);
        cx.notify();
    }

    /// Set the open state
    pub fn set_open(&mut self, open: bool, cx: &mut Context<Self>) {
        self.open = open;
        cx.notify();
    }
}

impl Render for SourceItem {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_open = self.open;
        let label = SharedString::from(self.label());
        let markdown_id = SharedString::from(format!("source-markdown-{}", self.index));

        Collapsible::new()
            .open(is_open)
            .w_full()
            .gap_2()
            // Header - label with toggle button
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .p_2()
                    .rounded(cx.theme().radius)
                    .bg(cx.theme().muted)
                    .border_1()
                    .border_color(cx.theme().border)
                    .child(
                        Icon::new(IconName::File)
                            .size(px(16.))
                            .text_color(cx.theme().accent),
                    )
                    .child(
                        div()
                            .flex_1()
                            .text_size(px(13.))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(cx.theme().foreground)
                            .child(label.clone()),
                    )
                    .child(
                        Button::new(SharedString::from(format!("source-toggle-{}", self.index)))
                            .icon(if is_open {
                                IconName::ChevronUp
                            } else {
                                IconName::ChevronDown
                            })
                            .ghost()
                            .xsmall()
                            .on_click(cx.listener(|this, _ev, _window, cx| {
                                this.toggle(cx);
                            })),
                    ),
            )
            // Content - sanitized excerpt rendered as markdown
            .content(
                div()
                    .w_full()
                    .p_3()
                    .rounded(cx.theme().radius)
                    .bg(cx.theme().secondary)
                    .border_1()
                    .border_color(cx.theme().border)
                    .child(
                        TextView::markdown(markdown_id, self.text.clone(), window, cx)
                            .text_size(px(13.))
                            .text_color(cx.theme().foreground)
                            .line_height(px(20.))
                            .selectable(true),
                    ),
            )
    }
}

/// Static closed entry for the stateless render path - use `ChatLineView`
/// for interactive toggling.
pub(crate) fn collapsed_entry(index: usize, cx: &App) -> impl IntoElement {
    h_flex()
        .items_center()
        .gap_2()
        .p_2()
        .rounded(cx.theme().radius)
        .bg(cx.theme().muted)
        .border_1()
        .border_color(cx.theme().border)
        .child(
            Icon::new(IconName::File)
                .size(px(16.))
                .text_color(cx.theme().accent),
        )
        .child(
            div()
                .flex_1()
                .text_size(px(13.))
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(cx.theme().foreground)
                .child(SharedString::from(source_label(index))),
        )
        .child(
            Icon::new(IconName::ChevronDown)
                .size(px(14.))
                .text_color(cx.theme().muted_foreground),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels_are_one_based() {
        assert_eq!(source_label(0), "Source 1");
        assert_eq!(source_label(4), "Source 5");
    }

    #[test]
    fn test_source_item_sanitizes_on_construction() {
        let item = SourceItem::new(0, "excerpt\r\nwith\u{0000} noise");
        assert_eq!(item.text.as_ref(), "excerpt\nwith noise");
        assert!(!item.is_open());
        assert_eq!(item.label(), "Source 1");
    }
}
