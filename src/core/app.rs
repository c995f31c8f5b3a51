//! Application state and the chat controller.
//!
//! [`App`] owns the message log, the input box, the typing flag, the active
//! theme and scroll position. It never touches the network: sending produces
//! a [`TurnRequest`] that the event loop hands to the chat service, and the
//! service's [`TurnCompletion`] is fed back through [`App::complete_turn`].

pub mod actions;


use std::time::{Duration, Instant};

use ratatui::style::Style;
use tracing::{debug, error};
use tui_textarea::TextArea;

use crate::core::chat_client::{TurnCompletion, TurnRequest};
use crate::core::constants::{FALLBACK_REPLY, INPUT_PLACEHOLDER};
use crate::core::message::{MessageLog, Sender};
use crate::ui::appearance::Appearance;
use crate::ui::renderer::ViewState;
use crate::ui::theme::Theme;

pub use actions::{apply_action, AppAction, AppCommand};

const TYPING_FRAME_INTERVAL: Duration = Duration::from_millis(300);

/// Transcript scroll position. While `follow` is set the pane sticks to the
/// newest message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub follow: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }
}

pub struct App {
    pub messages: MessageLog,
    pub is_typing: bool,
    pub appearance: Appearance,
    pub theme: Theme,
    pub scroll: ScrollState,
    /// Geometry of the last drawn frame, used to resolve mouse clicks.
    pub view: ViewState,
    textarea: TextArea<'static>,
    next_turn_id: u64,
    typing_started: Instant,
    exit_requested: bool,
}

impl App {
    pub fn new(appearance: Appearance) -> Self {
        let mut app = App {
            messages: MessageLog::new(),
            is_typing: false,
            appearance,
            theme: Theme::for_appearance(appearance),
            scroll: ScrollState::default(),
            view: ViewState::default(),
            textarea: TextArea::default(),
            next_turn_id: 1,
            typing_started: Instant::now(),
            exit_requested: false,
        };
        app.configure_textarea();
        app
    }

    fn configure_textarea(&mut self) {
        self.textarea.set_style(self.theme.input_text);
        self.textarea.set_cursor_style(self.theme.input_cursor);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        self.textarea
            .set_placeholder_style(self.theme.input_placeholder);
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Current input exactly as typed, lines joined with `\n`.
    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn input_is_multiline(&self) -> bool {
        self.textarea.lines().len() > 1
    }

    pub fn input_cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn set_input(&mut self, text: &str) {
        self.textarea = TextArea::from(text.split('\n').map(str::to_string));
        self.textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.configure_textarea();
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
    }

    /// Start a turn from the current input.
    ///
    /// Whitespace-only input is ignored entirely. Otherwise the user message
    /// is logged (unless filtering empties it), the input is cleared, the
    /// typing flag is raised, and the raw input is returned for sending.
    pub fn send_message(&mut self) -> Option<TurnRequest> {
        let input = self.input_text();
        if input.trim().is_empty() {
            return None;
        }

        self.push_message(Sender::User, &input);
        self.clear_input();
        self.is_typing = true;
        self.typing_started = Instant::now();

        let turn_id = self.next_turn_id;
        self.next_turn_id += 1;
        debug!(turn_id, "chat turn started");
        Some(TurnRequest {
            turn_id,
            message: input,
        })
    }

    /// Record the outcome of a turn. Any failure becomes the fixed apology.
    pub fn complete_turn(&mut self, completion: TurnCompletion) {
        let TurnCompletion { turn_id, result } = completion;
        match result {
            Ok(reply) => {
                if !self.push_message(Sender::Bot, &reply) {
                    debug!(turn_id, "reply was empty after filtering");
                }
            }
            Err(err) => {
                error!(turn_id, error = %err, "Error sending message");
                self.push_message(Sender::Bot, FALLBACK_REPLY);
            }
        }
        self.is_typing = false;
    }

    fn push_message(&mut self, sender: Sender, raw: &str) -> bool {
        let appended = self.messages.append(sender, raw);
        if appended {
            self.scroll_to_bottom();
        }
        appended
    }

    pub fn toggle_theme(&mut self) {
        self.appearance.toggle();
        self.theme = Theme::for_appearance(self.appearance);
        self.configure_textarea();
    }

    /// Animation frame for the typing indicator, or `None` when idle.
    pub fn typing_frame(&self) -> Option<usize> {
        if !self.is_typing {
            return None;
        }
        let elapsed = self.typing_started.elapsed().as_millis();
        Some((elapsed / TYPING_FRAME_INTERVAL.as_millis()) as usize)
    }

    /// Offset to draw with, given the largest offset the current frame allows.
    pub fn scroll_offset(&self, max_offset: u16) -> u16 {
        if self.scroll.follow {
            max_offset
        } else {
            self.scroll.offset.min(max_offset)
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let max = self.view.max_scroll;
        if max == 0 {
            return;
        }
        let current = self.scroll_offset(max);
        self.scroll.offset = current.saturating_sub(lines);
        self.scroll.follow = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.view.max_scroll;
        let current = self.scroll_offset(max);
        self.scroll.offset = current.saturating_add(lines).min(max);
        if self.scroll.offset >= max {
            self.scroll.follow = true;
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.follow = true;
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}
