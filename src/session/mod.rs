//! Client chat session
//!
//! The UI state behind the chat panel as a pure state machine: events go
//! in, the next state and at most one `/api/ai` request come out.

mod history;
mod state;

pub use history::{ChatHistory, ChatMessage, MAX_CHAT_HISTORY, Sender};
pub use state::{
    AiRequestBody, ChatEvent, ChatMode, Effect, SUMMARY_DESCRIPTION_CHARS, SessionState,
    summary_request,
};
