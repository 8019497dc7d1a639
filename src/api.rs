//! HTTP API for the chatbot
//!
//! Stateless: every request carries the conversation state it continues.

mod handlers;
mod types;

pub use handlers::create_router;

use crate::dispatch::Flow;

/// Application state shared across handlers
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Flow for routes that don't name one
    pub default_flow: Flow,
}

impl AppState {
    pub fn new(default_flow: Flow) -> Self {
        Self { default_flow }
    }
}
