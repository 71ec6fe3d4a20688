//! Game transcript: the chat history of one session.

pub mod entry;
pub mod log;

pub use entry::{Entry, Speaker};
pub use log::Transcript;
