//! Transcript layout: wraps messages into chat bubbles and records where links
//! land so clicks can be mapped back to URLs.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::message::{Message, Sender};
use crate::ui::links::{split_links, Segment};
use crate::ui::theme::Theme;

const TAB_WIDTH: usize = 4;
/// Bubbles take at most this share of the pane width, in percent.
const BUBBLE_MAX_PERCENT: usize = 80;
/// Blank columns between the bubble edge and its text, per side.
const BUBBLE_PADDING: usize = 1;

/// A run of text inside a wrapped row. `href` is set for link text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowPiece {
    pub text: String,
    pub href: Option<String>,
}

pub fn row_width(row: &[RowPiece]) -> usize {
    row.iter().map(|piece| piece.text.width()).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'a> {
    Newline,
    Space(&'a str),
    Word(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            if let Some(space) = in_space.take() {
                tokens.push(make_token(&text[start..idx], space));
            }
            tokens.push(Token::Newline);
            start = idx + ch.len_utf8();
            continue;
        }
        let is_space = ch.is_whitespace();
        match in_space {
            Some(current) if current == is_space => {}
            Some(current) => {
                tokens.push(make_token(&text[start..idx], current));
                start = idx;
                in_space = Some(is_space);
            }
            None => {
                start = idx;
                in_space = Some(is_space);
            }
        }
    }
    if let Some(space) = in_space {
        tokens.push(make_token(&text[start..], space));
    }
    tokens
}

fn make_token(text: &str, space: bool) -> Token<'_> {
    if space {
        Token::Space(text)
    } else {
        Token::Word(text)
    }
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

struct RowBuilder {
    rows: Vec<Vec<RowPiece>>,
    current: Vec<RowPiece>,
    width: usize,
    max_width: usize,
    soft_wrapped: bool,
}

impl RowBuilder {
    fn new(max_width: usize) -> Self {
        Self {
            rows: Vec::new(),
            current: Vec::new(),
            width: 0,
            max_width: max_width.max(1),
            soft_wrapped: false,
        }
    }

    fn push_str(&mut self, text: &str, href: Option<&str>) {
        if text.is_empty() {
            return;
        }
        self.width += text.width();
        if let Some(last) = self.current.last_mut() {
            if last.href.as_deref() == href {
                last.text.push_str(text);
                return;
            }
        }
        self.current.push(RowPiece {
            text: text.to_string(),
            href: href.map(str::to_string),
        });
    }

    fn finish_row(&mut self, soft: bool) {
        while let Some(last) = self.current.last_mut() {
            if last.href.is_some() {
                break;
            }
            let trimmed_len = last.text.trim_end().len();
            last.text.truncate(trimmed_len);
            if last.text.is_empty() {
                self.current.pop();
            } else {
                break;
            }
        }
        self.rows.push(std::mem::take(&mut self.current));
        self.width = 0;
        self.soft_wrapped = soft;
    }

    fn push_space(&mut self, space: &str) {
        if self.soft_wrapped && self.current.is_empty() {
            return;
        }
        let expanded = space.replace('\t', &" ".repeat(TAB_WIDTH)).replace('\r', "");
        let w = expanded.width();
        if self.width + w > self.max_width {
            self.finish_row(true);
            return;
        }
        self.push_str(&expanded, None);
    }

    fn push_word(&mut self, word: &str, href: Option<&str>) {
        let w = word.width();
        if self.width + w <= self.max_width {
            self.push_str(word, href);
            return;
        }
        if w <= self.max_width {
            self.finish_row(true);
            self.push_str(word, href);
            return;
        }

        // Hard-break tokens wider than a whole row.
        if !self.current.is_empty() {
            self.finish_row(true);
        }
        let mut chunk_start = 0;
        let mut chunk_width = 0;
        for (idx, ch) in word.char_indices() {
            let cw = char_width(ch);
            if chunk_width + cw > self.max_width && idx > chunk_start {
                self.push_str(&word[chunk_start..idx], href);
                self.finish_row(true);
                chunk_start = idx;
                chunk_width = 0;
            }
            chunk_width += cw;
        }
        self.push_str(&word[chunk_start..], href);
    }

    fn finish(mut self) -> Vec<Vec<RowPiece>> {
        if !self.current.is_empty() || self.rows.is_empty() {
            self.finish_row(false);
        }
        self.rows
    }
}

/// Word-wrap link-aware segments into rows no wider than `max_width`.
///
/// Explicit newlines always start a new row. Whitespace at a soft wrap point
/// is dropped; words wider than a row are broken by character.
pub fn wrap_segments(segments: &[Segment<'_>], max_width: usize) -> Vec<Vec<RowPiece>> {
    let mut builder = RowBuilder::new(max_width);
    for segment in segments {
        let href = segment.href();
        for token in tokenize(segment.text()) {
            match token {
                Token::Newline => builder.finish_row(false),
                Token::Space(space) => builder.push_space(space),
                Token::Word(word) => builder.push_word(word, href),
            }
        }
    }
    builder.finish()
}

/// Position of a link inside a transcript line, in columns from the pane's
/// left edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRun {
    pub column: u16,
    pub width: u16,
    pub href: String,
}

#[derive(Clone, Debug, Default)]
pub struct TranscriptLine {
    pub line: Line<'static>,
    pub links: Vec<LinkRun>,
}

#[derive(Clone, Debug, Default)]
pub struct TranscriptLayout {
    pub lines: Vec<TranscriptLine>,
}

impl TranscriptLayout {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Largest scroll offset that still fills a pane of `height` rows.
    pub fn max_scroll(&self, height: u16) -> u16 {
        let total = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);
        total.saturating_sub(height)
    }
}

fn bubble_content_width(pane_width: usize) -> usize {
    let bubble = pane_width * BUBBLE_MAX_PERCENT / 100;
    bubble.saturating_sub(BUBBLE_PADDING * 2).max(1)
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn push_bubble(
    out: &mut Vec<TranscriptLine>,
    rows: Vec<Vec<RowPiece>>,
    align_right: bool,
    pane_width: usize,
    bubble: Style,
    theme: &Theme,
) {
    let content_width = rows.iter().map(|row| row_width(row)).max().unwrap_or(0);
    let bubble_width = content_width + BUBBLE_PADDING * 2;
    let indent = if align_right {
        pane_width.saturating_sub(bubble_width)
    } else {
        0
    };
    let padding = " ".repeat(BUBBLE_PADDING);

    for row in rows {
        let mut spans = Vec::with_capacity(row.len() + 4);
        let mut links = Vec::new();
        if indent > 0 {
            spans.push(Span::raw(" ".repeat(indent)));
        }
        spans.push(Span::styled(padding.clone(), bubble));

        let mut column = indent + BUBBLE_PADDING;
        let used = row_width(&row);
        for piece in row {
            let width = piece.text.width();
            match piece.href {
                Some(href) => {
                    links.push(LinkRun {
                        column: to_u16(column),
                        width: to_u16(width),
                        href,
                    });
                    spans.push(Span::styled(piece.text, theme.link_in(bubble)));
                }
                None => spans.push(Span::styled(piece.text, bubble)),
            }
            column += width;
        }

        let fill = content_width.saturating_sub(used) + BUBBLE_PADDING;
        spans.push(Span::styled(" ".repeat(fill), bubble));
        out.push(TranscriptLine {
            line: Line::from(spans),
            links,
        });
    }
}

/// Frames of the typing indicator animation.
pub const TYPING_FRAMES: usize = 3;

fn typing_line(frame: usize, theme: &Theme) -> TranscriptLine {
    let active = frame % TYPING_FRAMES;
    let mut spans = vec![Span::styled(" ", theme.typing_bubble)];
    for dot in 0..TYPING_FRAMES {
        let glyph = if dot == active { "●" } else { "•" };
        spans.push(Span::styled(glyph, theme.typing_dot));
        spans.push(Span::styled(" ", theme.typing_bubble));
    }
    TranscriptLine {
        line: Line::from(spans),
        links: Vec::new(),
    }
}

/// Lay out the whole conversation for a pane `width` columns wide.
///
/// User bubbles hug the right edge, bot bubbles the left; a blank line
/// follows every bubble. When `typing_frame` is set an indicator bubble is
/// appended after the last message.
pub fn layout_transcript(
    messages: &[Message],
    typing_frame: Option<usize>,
    theme: &Theme,
    width: u16,
) -> TranscriptLayout {
    let pane_width = usize::from(width);
    let content_width = bubble_content_width(pane_width);
    let mut lines = Vec::new();

    for message in messages {
        let segments = split_links(message.text());
        let rows = wrap_segments(&segments, content_width);
        let (align_right, bubble) = match message.sender() {
            Sender::User => (true, theme.user_bubble),
            Sender::Bot => (false, theme.bot_bubble),
        };
        push_bubble(&mut lines, rows, align_right, pane_width, bubble, theme);
        lines.push(TranscriptLine::default());
    }

    if let Some(frame) = typing_frame {
        lines.push(typing_line(frame, theme));
    }

    TranscriptLayout { lines }
}
