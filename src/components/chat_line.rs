use gpui::{
    AnyElement, App, AppContext, Context, ElementId, Empty, Entity, Hsla, InteractiveElement,
    IntoElement, ParentElement, Render, RenderOnce, SharedString, StatefulInteractiveElement,
    Styled, Window, div, prelude::FluentBuilder as _, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, h_flex, v_flex};
use serde::{Deserialize, Serialize};

use crate::components::source_list::{SourceItem, collapsed_entry};
use crate::text::{Segment, linkify_lines};
use crate::theme::{LinkStyle, assistant_label_color, user_label_color};

/// Who authored the message. Wire names match the external input shape
/// (`"user"` / `"assistant"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    #[default]
    Assistant,
}

impl MessageRole {
    /// Header label: "AI" for the assistant, "You" for everything else.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::Assistant => "AI",
            MessageRole::User => "You",
        }
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, MessageRole::Assistant)
    }
}

/// Input record for one chat message bubble. Owned by the caller and never
/// mutated by the component.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatLineData {
    pub role: MessageRole,
    /// Absent or empty content means the bubble renders nothing.
    #[serde(default)]
    pub content: Option<SharedString>,
    /// Source excerpts for the collapsible footer. `None` renders no
    /// footer; `Some(vec![])` renders the footer with zero entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SharedString>>,
}

impl ChatLineData {
    pub fn new(role: MessageRole) -> Self {
        Self {
            role,
            content: None,
            sources: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<SharedString>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_sources(mut self, sources: Vec<SharedString>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Add a single source excerpt
    pub fn add_source(mut self, source: impl Into<SharedString>) -> Self {
        self.sources.get_or_insert_with(Vec::new).push(source.into());
        self
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.content.as_ref().is_none_or(|c| c.is_empty())
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().map_or("", |v| v)
    }

    pub fn source_count(&self) -> usize {
        self.sources.as_ref().map_or(0, |s| s.len())
    }
}

/// Pure mapping from a detected URL to a link element:
/// `(url, visible_text, key) -> element`.
pub type LinkDecorator = Box<dyn Fn(&str, &str, usize) -> AnyElement>;

/// Chat message bubble component
#[derive(IntoElement)]
pub struct ChatLine {
    id: ElementId,
    data: ChatLineData,
    link_decorator: Option<LinkDecorator>,
    /// Pre-built interactive footer entries, injected by `ChatLineView`.
    /// When absent the footer renders static closed entries.
    source_slots: Option<Vec<AnyElement>>,
}

impl ChatLine {
    pub fn new(id: impl Into<ElementId>, data: ChatLineData) -> Self {
        Self {
            id: id.into(),
            data,
            link_decorator: None,
            source_slots: None,
        }
    }

    /// Replace the default themed link element with a custom one.
    pub fn link_decorator(
        mut self,
        decorator: impl Fn(&str, &str, usize) -> AnyElement + 'static,
    ) -> Self {
        self.link_decorator = Some(Box::new(decorator));
        self
    }

    pub(crate) fn source_slots(mut self, slots: Vec<AnyElement>) -> Self {
        self.source_slots = Some(slots);
        self
    }
}

impl RenderOnce for ChatLine {
    fn render(self, _: &mut Window, cx: &mut App) -> impl IntoElement {
        // Absent or empty content: no card at all.
        if self.data.is_empty() {
            return Empty.into_any_element();
        }

        let is_dark = cx.theme().mode.is_dark();
        let link_style = LinkStyle::for_mode(is_dark);
        let label_color = match self.data.role {
            MessageRole::Assistant => assistant_label_color(is_dark),
            _ => user_label_color(),
        };
        let foreground = cx.theme().foreground;

        let lines = linkify_lines(self.data.text());
        let body = render_body(self.id, lines, foreground, link_style, self.link_decorator);

        let source_count = self.data.source_count();
        let has_footer = self.data.sources.is_some();
        let source_slots = self.source_slots;

        v_flex()
            .gap_3()
            .w_full()
            .mb_2()
            .p_3()
            .rounded(cx.theme().radius)
            .bg(cx.theme().background)
            .border_1()
            .border_color(cx.theme().border)
            // Speaker icon and label
            .child(
                h_flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Icon::new(if self.data.role.is_assistant() {
                            IconName::Bot
                        } else {
                            IconName::User
                        })
                        .size(px(16.))
                        .text_color(label_color),
                    )
                    .child(
                        div()
                            .text_size(px(13.))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(label_color)
                            .child(self.data.role.label()),
                    ),
            )
            // Message body
            .child(div().pl_6().w_full().child(body))
            // Source footer - only when sources were supplied at all
            .when(has_footer, |this| {
                this.child(v_flex().gap_2().pl_6().w_full().children(match source_slots {
                    Some(slots) => slots,
                    None => (0..source_count)
                        .map(|index| collapsed_entry(index, cx).into_any_element())
                        .collect(),
                }))
            })
            .into_any_element()
    }
}

/// Line blocks with links resolved to elements. Line splitting happened in
/// `linkify_lines`; here each segment just becomes its element.
fn render_body(
    id: ElementId,
    lines: Vec<Vec<Segment>>,
    foreground: Hsla,
    link_style: LinkStyle,
    decorator: Option<LinkDecorator>,
) -> impl IntoElement {
    let mut link_key = 0usize;

    v_flex()
        .gap_1()
        .w_full()
        .children(lines.into_iter().map(|segments| {
            h_flex()
                .flex_wrap()
                .items_center()
                .min_h(px(22.))
                .children(segments.into_iter().map(|segment| match segment {
                    Segment::Text(text) => div()
                        .text_size(px(14.))
                        .text_color(foreground)
                        .line_height(px(22.))
                        .child(text)
                        .into_any_element(),
                    Segment::Link(url) => {
                        let key = link_key;
                        link_key += 1;
                        match &decorator {
                            Some(decorate) => decorate(&url, &url, key),
                            None => default_link_element(&id, url, key, link_style),
                        }
                    }
                }))
        }))
}

/// Themed clickable link chip; the visible text is exactly the matched URL.
/// Opens through the OS browser, isolated from this window.
fn default_link_element(id: &ElementId, url: String, key: usize, style: LinkStyle) -> AnyElement {
    let href = url.clone();

    div()
        .id(SharedString::from(format!("{}-link-{}", id, key)))
        .px(style.padding)
        .rounded(style.radius)
        .bg(style.background)
        .text_color(style.color)
        .text_size(px(14.))
        .line_height(px(22.))
        .cursor_pointer()
        .on_click(move |_ev, _window, cx| cx.open_url(&href))
        .child(url)
        .into_any_element()
}

/// A stateful wrapper for ChatLine that can be used as a GPUI view, with
/// independently toggling source entries.
pub struct ChatLineView {
    data: Entity<ChatLineData>,
    source_items: Vec<Entity<SourceItem>>,
}

impl ChatLineView {
    pub fn new(data: ChatLineData, _window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|cx| {
            let source_items = build_source_items(&data, cx);
            let data_entity = cx.new(|_| data);
            Self {
                data: data_entity,
                source_items,
            }
        })
    }

    /// Update the message data completely
    pub fn update_data(&mut self, data: ChatLineData, cx: &mut Context<Self>) {
        self.source_items = build_source_items(&data, cx);
        self.data.update(cx, |d, cx| {
            *d = data;
            cx.notify();
        });
        cx.notify();
    }

    /// Replace the message content, keeping role and sources
    pub fn set_content(&mut self, content: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.data.update(cx, |d, cx| {
            d.content = Some(content.into());
            cx.notify();
        });
        cx.notify();
    }

    /// Append a source excerpt and its footer entry
    pub fn add_source(&mut self, source: impl Into<SharedString>, cx: &mut Context<Self>) {
        let source = source.into();
        let index = self.source_items.len();
        let item = cx.new(|_| SourceItem::new(index, &source));
        self.source_items.push(item);

        self.data.update(cx, |d, cx| {
            d.sources.get_or_insert_with(Vec::new).push(source);
            cx.notify();
        });
        cx.notify();
    }

    /// Toggle source open state by index
    pub fn toggle_source(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(item) = self.source_items.get(index) {
            item.update(cx, |item, cx| {
                item.toggle(cx);
            });
        }
    }

    /// Set source open state by index
    pub fn set_source_open(&mut self, index: usize, open: bool, cx: &mut Context<Self>) {
        if let Some(item) = self.source_items.get(index) {
            item.update(cx, |item, cx| {
                item.set_open(open, cx);
            });
        }
    }

    pub fn get_text(&self, cx: &App) -> SharedString {
        self.data.read(cx).text().to_string().into()
    }

    pub fn role(&self, cx: &App) -> MessageRole {
        self.data.read(cx).role
    }

    pub fn source_count(&self) -> usize {
        self.source_items.len()
    }
}

fn build_source_items(data: &ChatLineData, cx: &mut Context<ChatLineView>) -> Vec<Entity<SourceItem>> {
    data.sources
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .enumerate()
        .map(|(index, raw)| cx.new(|_| SourceItem::new(index, raw)))
        .collect()
}

impl Render for ChatLineView {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let data = self.data.read(cx).clone();
        let slots: Vec<AnyElement> = self
            .source_items
            .iter()
            .map(|item| item.clone().into_any_element())
            .collect();

        ChatLine::new("chat-line", data).source_slots(slots)
    }
}
