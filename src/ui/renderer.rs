use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::core::app::App;
use crate::core::constants::{
    APP_TAGLINE, APP_TITLE, EMPTY_STATE_DETAIL, EMPTY_STATE_HEADLINE,
};
use crate::ui::layout::layout_transcript;
use crate::ui::links::LinkHotspot;
use crate::ui::theme::Theme;

const HEADER_HEIGHT: u16 = 5;
const MAX_INPUT_LINES: u16 = 5;
const SEND_BUTTON_WIDTH: u16 = 10;
const CARD_MAX_WIDTH: u16 = 110;

/// Clickable geometry of the last frame plus the scroll bound it was drawn
/// with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub send_button: Rect,
    pub theme_toggle: Rect,
    pub links: Vec<LinkHotspot>,
    pub max_scroll: u16,
}

fn toggle_label(theme: &Theme) -> &'static str {
    if theme.appearance.is_dark() {
        " ☀ Light "
    } else {
        " ☾ Dark "
    }
}

fn centered_card(area: Rect) -> Rect {
    let width = area.width.min(CARD_MAX_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

pub fn ui(f: &mut Frame, app: &App) -> ViewState {
    let theme = &app.theme;
    let mut view = ViewState::default();

    f.render_widget(Block::default().style(theme.background), f.area());
    let card = centered_card(f.area());

    let input_lines = (app.textarea().lines().len() as u16).clamp(1, MAX_INPUT_LINES);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(input_lines + 2), // +2 for borders
        ])
        .split(card);

    view.theme_toggle = render_header(f, chunks[0], theme);
    let (links, max_scroll) = render_transcript(f, chunks[1], app);
    view.links = links;
    view.max_scroll = max_scroll;
    view.send_button = render_input(f, chunks[2], app);
    view
}

fn render_header(f: &mut Frame, area: Rect, theme: &Theme) -> Rect {
    let badge_line = Line::from(vec![
        Span::styled(" ⚡", theme.badge_zap),
        Span::styled(" AI-Powered ", theme.badge),
        Span::raw("  "),
        Span::styled(" 👥", theme.badge_users),
        Span::styled(" Collaborative ", theme.badge),
        Span::raw("  "),
        Span::styled(" 🌐", theme.badge_globe),
        Span::styled(" Web3 Ready ", theme.badge),
    ]);
    let lines = vec![
        Line::from(Span::styled(format!("📅 {APP_TITLE}"), theme.title)),
        Line::from(Span::styled(APP_TAGLINE, theme.tagline)),
        badge_line,
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.header_border)
            .style(theme.header),
    );
    f.render_widget(header, area);

    let label = toggle_label(theme);
    let width = (label.width() as u16).min(area.width.saturating_sub(2));
    let toggle = Rect::new(
        area.right().saturating_sub(width + 2),
        area.y,
        width,
        area.height.min(1),
    );
    f.render_widget(
        Paragraph::new(Span::styled(label, theme.toggle_button)).style(theme.header),
        toggle,
    );
    toggle
}

fn render_transcript(f: &mut Frame, area: Rect, app: &App) -> (Vec<LinkHotspot>, u16) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.pane_border)
        .style(theme.pane);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.messages.is_empty() {
        render_empty_state(f, inner, theme);
        if let Some(frame) = app.typing_frame() {
            let layout = layout_transcript(&[], Some(frame), theme, inner.width);
            let lines: Vec<Line<'static>> = layout.lines.into_iter().map(|l| l.line).collect();
            f.render_widget(Paragraph::new(lines), inner);
        }
        return (Vec::new(), 0);
    }

    let layout = layout_transcript(
        app.messages.as_slice(),
        app.typing_frame(),
        theme,
        inner.width,
    );
    let max_scroll = layout.max_scroll(inner.height);
    let offset = usize::from(app.scroll_offset(max_scroll));

    let mut hotspots = Vec::new();
    let mut visible = Vec::with_capacity(usize::from(inner.height));
    for (row, entry) in layout
        .lines
        .into_iter()
        .skip(offset)
        .take(usize::from(inner.height))
        .enumerate()
    {
        let y = inner.y + row as u16;
        for run in entry.links {
            let rect = Rect::new(inner.x + run.column, y, run.width, 1).intersection(inner);
            if !rect.is_empty() {
                hotspots.push(LinkHotspot {
                    url: run.href,
                    rect,
                });
            }
        }
        visible.push(entry.line);
    }

    f.render_widget(Paragraph::new(visible).style(theme.pane), inner);
    (hotspots, max_scroll)
}

fn render_empty_state(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("📅", theme.empty_icon)),
        Line::from(""),
        Line::from(Span::styled(EMPTY_STATE_HEADLINE, theme.empty_headline)),
        Line::from(Span::styled(EMPTY_STATE_DETAIL, theme.empty_detail)),
    ];
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let placeholder_area = Rect::new(
        area.x,
        area.y + top,
        area.width,
        area.height.saturating_sub(top),
    );
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        placeholder_area,
    );
}

fn render_input(f: &mut Frame, area: Rect, app: &App) -> Rect {
    let theme = &app.theme;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.input_border)
        .title(" Message ")
        .title_bottom(" Enter send · Shift+Enter newline · Ctrl+T theme · Esc quit ")
        .style(theme.input_text);
    let inner = block.inner(columns[0]);
    f.render_widget(block, columns[0]);
    f.render_widget(app.textarea(), inner);

    let button = Paragraph::new(Line::from("➤ Send"))
        .alignment(Alignment::Center)
        .style(theme.send_button)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.send_button),
        );
    f.render_widget(button, columns[1]);
    columns[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Sender;
    use crate::ui::appearance::Appearance;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> (Buffer, ViewState) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut view = ViewState::default();
        terminal
            .draw(|f| {
                view = ui(f, app);
            })
            .unwrap();
        (terminal.backend().buffer().clone(), view)
    }

    fn screen_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn empty_log_shows_welcome_placeholder() {
        let app = App::new(Appearance::Light);
        let (buffer, view) = draw(&app, 80, 24);
        let text = screen_text(&buffer);
        assert!(text.contains("Welcome to EventSync!"));
        assert!(text.contains("Type your fun event ideas here..."));
        assert!(text.contains("EventSync"));
        assert!(text.contains("Collaborative"));
        assert!(view.links.is_empty());
        assert_eq!(view.max_scroll, 0);
    }

    #[test]
    fn messages_replace_placeholder_and_register_links() {
        let mut app = App::new(Appearance::Light);
        app.messages.append(Sender::User, "ideas?");
        app.messages
            .append(Sender::Bot, "visit https://example.com now");
        let (buffer, view) = draw(&app, 80, 24);
        let text = screen_text(&buffer);

        assert!(!text.contains("Welcome to EventSync!"));
        assert!(text.contains("ideas?"));
        assert!(text.contains("visit https://example.com now"));
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].url, "https://example.com");
        assert_eq!(view.links[0].rect.width, 19);

        let rect = view.links[0].rect;
        let cell = &buffer[(rect.x, rect.y)];
        assert_eq!(cell.symbol(), "h");
        assert_eq!(cell.fg, app.theme.link.fg.unwrap());
    }

    #[test]
    fn typing_indicator_is_drawn_while_waiting() {
        let mut app = App::new(Appearance::Dark);
        app.set_input("hello");
        app.send_message().unwrap();
        let (buffer, _) = draw(&app, 80, 24);
        let text = screen_text(&buffer);
        assert!(text.contains("hello"));
        assert!(text.contains('●'));
    }

    #[test]
    fn toggle_and_send_buttons_are_reported() {
        let app = App::new(Appearance::Light);
        let (buffer, view) = draw(&app, 80, 24);
        assert!(!view.send_button.is_empty());
        assert!(!view.theme_toggle.is_empty());

        let text = screen_text(&buffer);
        assert!(text.contains("Send"));
        assert!(text.contains("Dark"));
    }

    #[test]
    fn rendered_styles_follow_the_active_theme() {
        let mut app = App::new(Appearance::Light);
        let (light, _) = draw(&app, 80, 24);
        let pane_cell: (u16, u16) = (40, 10);
        assert_eq!(light[pane_cell].bg, app.theme.pane.bg.unwrap());

        app.toggle_theme();
        let (dark, _) = draw(&app, 80, 24);
        assert_eq!(dark[pane_cell].bg, app.theme.pane.bg.unwrap());
        assert_ne!(light[pane_cell].bg, dark[pane_cell].bg);
        assert!(screen_text(&dark).contains("Light"));
    }

    #[test]
    fn long_transcripts_stick_to_the_bottom() {
        let mut app = App::new(Appearance::Light);
        for i in 0..30 {
            app.messages.append(Sender::Bot, &format!("reply number {i}"));
        }
        let (buffer, view) = draw(&app, 80, 24);
        let text = screen_text(&buffer);
        assert!(view.max_scroll > 0);
        assert!(text.contains("reply number 29"));
        assert!(!text.contains("reply number 0 "));
    }
}
