//! Hyperlink detection for message text.
//!
//! Anything matching `https?://` followed by non-whitespace is a link. No
//! further validation happens, so malformed-but-matching text is still
//! linkified.

use std::sync::OnceLock;

use ratatui::layout::{Position, Rect};
use regex::Regex;

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("url pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link { href: &'a str, text: &'a str },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Link { text, .. } => text,
        }
    }

    pub fn href(&self) -> Option<&'a str> {
        match self {
            Segment::Text(_) => None,
            Segment::Link { href, .. } => Some(href),
        }
    }
}

/// Split `text` into alternating plain and link segments, in order.
/// Empty plain segments are skipped.
pub fn split_links(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in url_pattern().find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::Text(&text[cursor..found.start()]));
        }
        segments.push(Segment::Link {
            href: found.as_str(),
            text: found.as_str(),
        });
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }
    segments
}

/// Screen area occupied by a rendered link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkHotspot {
    pub url: String,
    pub rect: Rect,
}

impl LinkHotspot {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.rect.contains(Position::new(column, row))
    }
}

/// Open a link in the system browser, detached from this process.
pub fn open_link(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_in_the_middle_yields_three_segments() {
        let segments = split_links("visit https://example.com now");
        assert_eq!(
            segments,
            vec![
                Segment::Text("visit "),
                Segment::Link {
                    href: "https://example.com",
                    text: "https://example.com"
                },
                Segment::Text(" now"),
            ]
        );
    }

    #[test]
    fn text_without_links_is_a_single_segment() {
        assert_eq!(
            split_links("no links here"),
            vec![Segment::Text("no links here")]
        );
        assert!(split_links("").is_empty());
    }

    #[test]
    fn links_at_edges_produce_no_empty_segments() {
        let segments = split_links("http://a.example and https://b.example");
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].href(), Some("http://a.example"));
        assert_eq!(segments[1], Segment::Text(" and "));
        assert_eq!(segments[2].href(), Some("https://b.example"));
    }

    #[test]
    fn trailing_punctuation_is_part_of_the_link() {
        let segments = split_links("see https://example.com/path?q=1, ok");
        assert_eq!(segments[1].href(), Some("https://example.com/path?q=1,"));
    }

    #[test]
    fn malformed_urls_are_still_linkified() {
        let segments = split_links("broken http://::not-a-url");
        assert_eq!(segments[1].href(), Some("http://::not-a-url"));
    }

    #[test]
    fn other_schemes_are_plain_text() {
        assert_eq!(
            split_links("ftp://example.com mailto:x@y.z"),
            vec![Segment::Text("ftp://example.com mailto:x@y.z")]
        );
    }

    #[test]
    fn hotspot_contains_covers_its_rect_only() {
        let hotspot = LinkHotspot {
            url: "https://example.com".to_string(),
            rect: Rect::new(4, 2, 10, 1),
        };
        assert!(hotspot.contains(4, 2));
        assert!(hotspot.contains(13, 2));
        assert!(!hotspot.contains(14, 2));
        assert!(!hotspot.contains(5, 3));
    }
}
