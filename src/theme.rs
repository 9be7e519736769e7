use gpui::{Pixels, Rgba, px, rgb};

/// Inline style preset for auto-detected links: one pair of presets,
/// selected by theme mode. Static data, no global state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    pub color: Rgba,
    pub background: Rgba,
    pub padding: Pixels,
    pub radius: Pixels,
}

impl LinkStyle {
    pub fn light() -> Self {
        Self {
            color: rgb(0x006da3),
            background: rgb(0xabe3ff),
            padding: px(5.),
            radius: px(5.),
        }
    }

    pub fn dark() -> Self {
        Self {
            color: rgb(0x003e64),
            background: rgb(0xabe3ff),
            padding: px(5.),
            radius: px(5.),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }
}

/// Header label color for assistant messages, per theme mode.
pub fn assistant_label_color(is_dark: bool) -> Rgba {
    if is_dark { rgb(0x60a5fa) } else { rgb(0x3b82f6) }
}

/// Header label color for everything that isn't the assistant.
/// Fixed amber accent, same in both modes.
pub fn user_label_color() -> Rgba {
    rgb(0xf59e0b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_selects_preset() {
        assert_eq!(LinkStyle::for_mode(false), LinkStyle::light());
        assert_eq!(LinkStyle::for_mode(true), LinkStyle::dark());
    }

    #[test]
    fn test_light_and_dark_link_text_differ() {
        assert_ne!(LinkStyle::light().color, LinkStyle::dark().color);
    }

    #[test]
    fn test_assistant_label_varies_user_label_fixed() {
        assert_ne!(assistant_label_color(false), assistant_label_color(true));
        assert_eq!(user_label_color(), user_label_color());
    }
}
