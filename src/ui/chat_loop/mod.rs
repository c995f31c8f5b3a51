//! The interactive chat session.
//!
//! One task reads terminal events, spawned turns report back on a second
//! channel, and a periodic tick keeps the typing indicator animating. The
//! loop owns [`App`] outright, so every mutation happens here in arrival
//! order.

pub mod keybindings;
pub mod lifecycle;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::core::app::{apply_action, App, AppAction, AppCommand};
use crate::core::chat_client::{ChatBackend, ChatTurnService, HttpChatBackend, TurnCompletion};
use crate::ui::appearance::Appearance;
use crate::ui::links::open_link;
use crate::ui::renderer::{ui, ViewState};

use keybindings::{action_for_key, action_for_mouse};
use lifecycle::{restore_terminal, setup_terminal};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(
    base_url: Option<String>,
    appearance: Appearance,
) -> Result<(), Box<dyn Error>> {
    if base_url.is_none() {
        warn!("no chat backend configured; every message will get the fallback reply");
    }
    let backend: Arc<dyn ChatBackend> = Arc::new(HttpChatBackend::new(base_url));
    let (service, mut completions) = ChatTurnService::new(backend);
    let mut app = App::new(appearance);

    let mut terminal = setup_terminal()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let event_reader_handle = spawn_event_reader(event_tx);
    info!("chat session started");

    let result = drive(
        &mut terminal,
        &mut app,
        &service,
        &mut event_rx,
        &mut completions,
    )
    .await;

    event_reader_handle.abort();
    service.shutdown();
    restore_terminal(&mut terminal)?;
    info!(messages = app.messages.len(), "chat session ended");
    result
}

async fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &ChatTurnService,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    completions: &mut mpsc::UnboundedReceiver<TurnCompletion>,
) -> Result<(), Box<dyn Error>> {
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let mut view = ViewState::default();
        terminal.draw(|f| view = ui(f, app))?;
        app.view = view;

        if app.exit_requested() {
            return Ok(());
        }

        tokio::select! {
            Some(event) = event_rx.recv() => handle_ui_event(app, service, event),
            Some(completion) = completions.recv() => app.complete_turn(completion),
            _ = tick.tick() => {}
        }
    }
}

fn action_for_event(event: Event) -> Option<AppAction> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse),
        Event::Paste(text) => Some(AppAction::PasteText(text)),
        _ => None,
    }
}

fn handle_ui_event(app: &mut App, service: &ChatTurnService, event: UiEvent) {
    let UiEvent::Crossterm(event) = event;
    let Some(action) = action_for_event(event) else {
        return;
    };
    if let Some(command) = apply_action(app, action) {
        execute_command(service, command);
    }
}

fn execute_command(service: &ChatTurnService, command: AppCommand) {
    match command {
        AppCommand::SendTurn(request) => {
            debug!(turn_id = request.turn_id, "dispatching chat turn");
            service.spawn_turn(request);
        }
        AppCommand::OpenLink(url) => {
            if let Err(err) = open_link(&url) {
                warn!(%url, error = %err, "failed to open link");
            }
        }
    }
}
