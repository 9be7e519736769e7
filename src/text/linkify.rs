use std::sync::LazyLock;

use regex::Regex;

/// Matches `http://` or `https://` followed by one or more non-whitespace
/// characters. Anything that doesn't fit this shape is left as plain text.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s]+").unwrap());

/// One piece of a rendered line: either plain text or a detected URL.
///
/// The URL text is preserved byte-for-byte, so the visible label of a link
/// is always exactly the substring that matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Link(url) => url,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link(_))
    }
}

/// Split a single line into text and link segments.
///
/// Empty text runs between adjacent matches are dropped; an empty line
/// yields no segments at all (the caller still renders the line block).
pub fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in URL_RE.find_iter(line) {
        if m.start() > last {
            segments.push(Segment::Text(line[last..m.start()].to_string()));
        }
        segments.push(Segment::Link(m.as_str().to_string()));
        last = m.end();
    }
    if last < line.len() {
        segments.push(Segment::Text(line[last..].to_string()));
    }

    segments
}

/// Split `content` into line blocks, then linkify each line.
///
/// Line splitting happens first so the two transforms never interfere: a
/// URL in the middle of a line is linkified while the text around it keeps
/// its line. `k` newline characters always produce exactly `k + 1` blocks,
/// empty lines included.
pub fn linkify_lines(content: &str) -> Vec<Vec<Segment>> {
    content.split('\n').map(split_segments).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== split_segments tests ==============

    #[test]
    fn test_plain_text_single_segment() {
        let segments = split_segments("Hi there");
        assert_eq!(segments, vec![Segment::Text("Hi there".to_string())]);
    }

    #[test]
    fn test_url_in_middle_of_line() {
        let segments = split_segments("visit https://example.com now");
        assert_eq!(
            segments,
            vec![
                Segment::Text("visit ".to_string()),
                Segment::Link("https://example.com".to_string()),
                Segment::Text(" now".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_at_line_start_and_end() {
        let segments = split_segments("https://a.example end");
        assert_eq!(segments[0], Segment::Link("https://a.example".to_string()));

        let segments = split_segments("see http://b.example");
        assert_eq!(
            segments.last().unwrap(),
            &Segment::Link("http://b.example".to_string())
        );
    }

    #[test]
    fn test_multiple_urls_on_one_line() {
        let segments = split_segments("https://one.example and https://two.example");
        let links: Vec<&Segment> = segments.iter().filter(|s| s.is_link()).collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].as_str(), "https://one.example");
        assert_eq!(links[1].as_str(), "https://two.example");
    }

    #[test]
    fn test_link_text_round_trips_exactly() {
        let url = "https://example.com/path?q=1&x=%20#frag";
        let segments = split_segments(url);
        assert_eq!(segments, vec![Segment::Link(url.to_string())]);
    }

    #[test]
    fn test_malformed_urls_fail_open_as_text() {
        for input in ["htp://nope", "example.com", "https:// space", "ftp://x"] {
            let segments = split_segments(input);
            assert!(
                segments.iter().all(|s| !s.is_link()),
                "expected no link in {input:?}, got {segments:?}"
            );
        }
    }

    #[test]
    fn test_empty_line_has_no_segments() {
        assert!(split_segments("").is_empty());
    }

    // ============== linkify_lines tests ==============

    #[test]
    fn test_newline_count_gives_one_more_block() {
        assert_eq!(linkify_lines("single").len(), 1);
        assert_eq!(linkify_lines("a\nb").len(), 2);
        assert_eq!(linkify_lines("a\nb\nc\nd").len(), 4);
        // Trailing and doubled newlines still count as blocks.
        assert_eq!(linkify_lines("a\n").len(), 2);
        assert_eq!(linkify_lines("a\n\nb").len(), 3);
    }

    #[test]
    fn test_empty_content_is_single_empty_block() {
        let lines = linkify_lines("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_line_splitting_composes_with_linkify() {
        let lines = linkify_lines("Hello\nvisit https://example.com now");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![Segment::Text("Hello".to_string())]);
        assert_eq!(
            lines[1],
            vec![
                Segment::Text("visit ".to_string()),
                Segment::Link("https://example.com".to_string()),
                Segment::Text(" now".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_does_not_swallow_newline() {
        let lines = linkify_lines("https://example.com\nnext");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], vec![Segment::Link("https://example.com".to_string())]);
        assert_eq!(lines[1], vec![Segment::Text("next".to_string())]);
    }
}
