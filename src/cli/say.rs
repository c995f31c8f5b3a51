//! TUI-less "say" command

use std::error::Error;
use std::io::{self, Write};

use crate::core::app::App;
use crate::core::chat_client::{run_turn, ChatBackend, HttpChatBackend};
use crate::ui::appearance::Appearance;

pub async fn run_say(prompt: Vec<String>, base_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        eprintln!("Usage: eventsync say <prompt>");
        std::process::exit(1);
    }

    let backend = HttpChatBackend::new(base_url);
    let mut stdout = io::stdout();
    let delivered = say_once(&backend, &prompt, &mut stdout).await?;
    stdout.flush()?;
    if !delivered {
        std::process::exit(1);
    }
    Ok(())
}

/// Run one turn through the same controller the TUI uses and print whatever
/// the bot appended. Returns whether the backend actually answered.
pub async fn say_once<W: Write>(
    backend: &dyn ChatBackend,
    prompt: &str,
    out: &mut W,
) -> io::Result<bool> {
    let mut app = App::new(Appearance::default());
    app.set_input(prompt);
    let Some(request) = app.send_message() else {
        return Ok(false);
    };
    let logged = app.messages.len();

    let completion = run_turn(backend, request).await;
    let delivered = completion.result.is_ok();
    app.complete_turn(completion);

    if app.messages.len() > logged {
        if let Some(reply) = app.messages.last() {
            writeln!(out, "{}", reply.text())?;
        }
    }
    Ok(delivered)
}
