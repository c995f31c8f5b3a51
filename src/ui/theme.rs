use crate::ui::appearance::Appearance;
use ratatui::style::{Color, Modifier, Style};

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

// Indigo/purple ramp used by both palettes.
const INDIGO_50: Color = rgb(0xeef2ff);
const INDIGO_100: Color = rgb(0xe0e7ff);
const INDIGO_200: Color = rgb(0xc7d2fe);
const INDIGO_300: Color = rgb(0xa5b4fc);
const INDIGO_400: Color = rgb(0x818cf8);
const INDIGO_500: Color = rgb(0x6366f1);
const INDIGO_600: Color = rgb(0x4f46e5);
const INDIGO_700: Color = rgb(0x4338ca);
const INDIGO_800: Color = rgb(0x3730a3);
const INDIGO_900: Color = rgb(0x312e81);
const INDIGO_950: Color = rgb(0x1e1b4b);
const PURPLE_300: Color = rgb(0xd8b4fe);
const PURPLE_500: Color = rgb(0xa855f7);
const PURPLE_600: Color = rgb(0x9333ea);
const PURPLE_700: Color = rgb(0x7e22ce);
const PURPLE_800: Color = rgb(0x6b21a8);
const YELLOW_300: Color = rgb(0xfde047);
const YELLOW_500: Color = rgb(0xeab308);
const GREEN_300: Color = rgb(0x86efac);
const GREEN_500: Color = rgb(0x22c55e);
const BLUE_300: Color = rgb(0x93c5fd);
const BLUE_500: Color = rgb(0x3b82f6);
const WHITE: Color = rgb(0xffffff);

/// Complete style palette for one appearance. Every style the renderer uses
/// comes from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub appearance: Appearance,
    pub background: Style,

    // Header card
    pub header: Style,
    pub header_border: Style,
    pub title: Style,
    pub tagline: Style,
    pub badge: Style,
    pub badge_zap: Style,
    pub badge_users: Style,
    pub badge_globe: Style,
    pub toggle_button: Style,

    // Message pane
    pub pane: Style,
    pub pane_border: Style,
    pub empty_icon: Style,
    pub empty_headline: Style,
    pub empty_detail: Style,
    pub user_bubble: Style,
    pub bot_bubble: Style,
    pub link: Style,
    pub typing_bubble: Style,
    pub typing_dot: Style,

    // Input row
    pub input_text: Style,
    pub input_border: Style,
    pub input_placeholder: Style,
    pub input_cursor: Style,
    pub send_button: Style,
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Theme {
            appearance: Appearance::Light,
            background: Style::default().bg(INDIGO_100),

            header: Style::default().bg(INDIGO_300).fg(INDIGO_900),
            header_border: Style::default().fg(INDIGO_300),
            title: Style::default().fg(INDIGO_900).add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(INDIGO_700).add_modifier(Modifier::BOLD),
            badge: Style::default().bg(INDIGO_100).fg(INDIGO_700),
            badge_zap: Style::default().bg(INDIGO_100).fg(YELLOW_500),
            badge_users: Style::default().bg(INDIGO_100).fg(GREEN_500),
            badge_globe: Style::default().bg(INDIGO_100).fg(BLUE_500),
            toggle_button: Style::default().fg(INDIGO_700).add_modifier(Modifier::BOLD),

            pane: Style::default().bg(INDIGO_50).fg(INDIGO_900),
            pane_border: Style::default().fg(INDIGO_200),
            empty_icon: Style::default().fg(INDIGO_600),
            empty_headline: Style::default().fg(INDIGO_800).add_modifier(Modifier::BOLD),
            empty_detail: Style::default().fg(INDIGO_600),
            user_bubble: Style::default().bg(INDIGO_500).fg(WHITE),
            bot_bubble: Style::default().bg(INDIGO_100).fg(INDIGO_900),
            link: Style::default()
                .fg(BLUE_500)
                .add_modifier(Modifier::UNDERLINED),
            typing_bubble: Style::default().bg(INDIGO_100),
            typing_dot: Style::default().bg(INDIGO_100).fg(INDIGO_600),

            input_text: Style::default().bg(WHITE).fg(INDIGO_900),
            input_border: Style::default().fg(INDIGO_300),
            input_placeholder: Style::default().fg(INDIGO_500),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            send_button: Style::default()
                .bg(PURPLE_500)
                .fg(WHITE)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn dark() -> Self {
        Theme {
            appearance: Appearance::Dark,
            background: Style::default().bg(INDIGO_800),

            header: Style::default().bg(PURPLE_700).fg(WHITE),
            header_border: Style::default().fg(INDIGO_700),
            title: Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
            tagline: Style::default().fg(INDIGO_200).add_modifier(Modifier::BOLD),
            badge: Style::default().bg(INDIGO_800).fg(INDIGO_200),
            badge_zap: Style::default().bg(INDIGO_800).fg(YELLOW_300),
            badge_users: Style::default().bg(INDIGO_800).fg(GREEN_300),
            badge_globe: Style::default().bg(INDIGO_800).fg(BLUE_300),
            toggle_button: Style::default().fg(INDIGO_200).add_modifier(Modifier::BOLD),

            pane: Style::default().bg(INDIGO_950).fg(INDIGO_100),
            pane_border: Style::default().fg(INDIGO_700),
            empty_icon: Style::default().fg(INDIGO_400),
            empty_headline: Style::default().fg(INDIGO_200).add_modifier(Modifier::BOLD),
            empty_detail: Style::default().fg(INDIGO_300),
            user_bubble: Style::default().bg(PURPLE_600).fg(WHITE),
            bot_bubble: Style::default().bg(PURPLE_800).fg(INDIGO_100),
            link: Style::default()
                .fg(PURPLE_300)
                .add_modifier(Modifier::UNDERLINED),
            typing_bubble: Style::default().bg(PURPLE_800),
            typing_dot: Style::default().bg(PURPLE_800).fg(INDIGO_300),

            input_text: Style::default().bg(INDIGO_900).fg(INDIGO_100),
            input_border: Style::default().fg(INDIGO_700),
            input_placeholder: Style::default().fg(INDIGO_400),
            input_cursor: Style::default().add_modifier(Modifier::REVERSED),
            send_button: Style::default()
                .bg(PURPLE_600)
                .fg(WHITE)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Link style layered over a bubble so the bubble background survives.
    pub fn link_in(&self, bubble: Style) -> Style {
        bubble.patch(self.link)
    }
}
