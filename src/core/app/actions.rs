use tui_textarea::{CursorMove, Input};

use super::App;
use crate::core::chat_client::TurnRequest;

/// Everything the user can ask the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SubmitMessage,
    InsertNewline,
    EditInput(Input),
    PasteText(String),
    ToggleTheme,
    /// Arrow keys: move the cursor inside multi-line input, otherwise
    /// scroll the transcript by one row.
    LineUp,
    LineDown,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToBottom,
    Click { column: u16, row: u16 },
    Quit,
}

/// Side effects the event loop must carry out after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    SendTurn(TurnRequest),
    OpenLink(String),
}

pub fn apply_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::SubmitMessage => app.send_message().map(AppCommand::SendTurn),
        AppAction::InsertNewline => {
            app.apply_textarea_edit(|ta| ta.insert_newline());
            None
        }
        AppAction::EditInput(input) => {
            app.apply_textarea_edit(|ta| {
                ta.input(input);
            });
            None
        }
        AppAction::PasteText(text) => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            app.apply_textarea_edit(|ta| {
                ta.insert_str(normalized);
            });
            None
        }
        AppAction::ToggleTheme => {
            app.toggle_theme();
            None
        }
        AppAction::LineUp => {
            if app.input_is_multiline() {
                app.apply_textarea_edit(|ta| ta.move_cursor(CursorMove::Up));
            } else {
                app.scroll_up(1);
            }
            None
        }
        AppAction::LineDown => {
            if app.input_is_multiline() {
                app.apply_textarea_edit(|ta| ta.move_cursor(CursorMove::Down));
            } else {
                app.scroll_down(1);
            }
            None
        }
        AppAction::ScrollUp(lines) => {
            app.scroll_up(lines);
            None
        }
        AppAction::ScrollDown(lines) => {
            app.scroll_down(lines);
            None
        }
        AppAction::ScrollToBottom => {
            app.scroll_to_bottom();
            None
        }
        AppAction::Click { column, row } => handle_click(app, column, row),
        AppAction::Quit => {
            app.request_exit();
            None
        }
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) -> Option<AppCommand> {
    let position = ratatui::layout::Position::new(column, row);
    if app.view.send_button.contains(position) {
        return app.send_message().map(AppCommand::SendTurn);
    }
    if app.view.theme_toggle.contains(position) {
        app.toggle_theme();
        return None;
    }
    app.view
        .links
        .iter()
        .find(|hotspot| hotspot.contains(column, row))
        .map(|hotspot| AppCommand::OpenLink(hotspot.url.clone()))
}
