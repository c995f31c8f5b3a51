//! EventSync is a terminal chat client for a remote event management assistant.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the message log, the tag filter, the chat backend, and the
//!   controller that turns user input into chat turns.
//! - [`ui`] renders the terminal interface, holds the light/dark theme store,
//!   and runs the interactive event loop.
//! - [`api`] defines the request/response payloads of the `/chat` endpoint.
//! - [`cli`] parses arguments and dispatches into chat, one-shot, and
//!   configuration commands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
