//! Shared constants used across the application

/// Bot message appended when a turn fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

/// Environment variable that supplies the chat backend base URL.
pub const BASE_URL_ENV_VAR: &str = "EVENTSYNC_API_BASE_URL";

pub const APP_TITLE: &str = "EventSync";
pub const APP_TAGLINE: &str = "Your Fun & Professional Event Management Buddy!";
pub const EMPTY_STATE_HEADLINE: &str = "Welcome to EventSync!";
pub const EMPTY_STATE_DETAIL: &str = "Let's make your events awesome together! 🎉";
pub const INPUT_PLACEHOLDER: &str = "Type your fun event ideas here...";
