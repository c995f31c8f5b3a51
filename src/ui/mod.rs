//! Terminal UI layer for the chat widget.
//!
//! - [`chat_loop`]: terminal setup, input dispatch and the async turn plumbing.
//! - [`renderer`] and [`layout`]: frame composition and transcript wrapping.
//! - [`theme`] and [`appearance`]: the light/dark palettes.
//! - [`links`]: URL detection and click targets inside messages.
//!
//! State and chat semantics live in [`crate::core`]; this layer only draws
//! that state and translates terminal events into actions.

pub mod appearance;
pub mod chat_loop;
pub mod layout;
pub mod links;
pub mod renderer;
pub mod theme;
