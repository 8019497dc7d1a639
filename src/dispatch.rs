//! Conversation dispatcher
//!
//! Pure `(state, message) -> reply` routing over two flows: the typography
//! guide and the palette wizard. Holds no state between calls.

mod classify;
mod error;
pub mod intent;
mod render;
pub mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use state::{ConversationState, DispatchResult, Flow, Step, UnknownFlow};
pub use transition::{transition, DispatchContext};
