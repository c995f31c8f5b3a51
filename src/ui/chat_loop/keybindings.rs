//! Terminal events to [`AppAction`]s.
//!
//! Pure mapping with no access to state, so the whole table is testable
//! without a terminal.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_textarea::Input;

use crate::core::app::AppAction;

pub const WHEEL_SCROLL_LINES: u16 = 3;
pub const PAGE_SCROLL_LINES: u16 = 10;

pub fn action_for_key(key: KeyEvent) -> Option<AppAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            Some(AppAction::InsertNewline)
        }
        KeyCode::Enter => Some(AppAction::SubmitMessage),
        KeyCode::Char('c') if ctrl => Some(AppAction::Quit),
        KeyCode::Char('t') if ctrl => Some(AppAction::ToggleTheme),
        // Ctrl+J arrives in place of Shift+Enter on terminals without
        // keyboard enhancement.
        KeyCode::Char('j') if ctrl => Some(AppAction::InsertNewline),
        KeyCode::Esc => Some(AppAction::Quit),
        KeyCode::Up if ctrl => Some(AppAction::ScrollUp(1)),
        KeyCode::Down if ctrl => Some(AppAction::ScrollDown(1)),
        KeyCode::Up => Some(AppAction::LineUp),
        KeyCode::Down => Some(AppAction::LineDown),
        KeyCode::PageUp => Some(AppAction::ScrollUp(PAGE_SCROLL_LINES)),
        KeyCode::PageDown => Some(AppAction::ScrollDown(PAGE_SCROLL_LINES)),
        KeyCode::End if ctrl => Some(AppAction::ScrollToBottom),
        _ => Some(AppAction::EditInput(Input::from(key))),
    }
}

pub fn action_for_mouse(mouse: MouseEvent) -> Option<AppAction> {
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(AppAction::ScrollUp(WHEEL_SCROLL_LINES)),
        MouseEventKind::ScrollDown => Some(AppAction::ScrollDown(WHEEL_SCROLL_LINES)),
        MouseEventKind::Down(MouseButton::Left) => Some(AppAction::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
