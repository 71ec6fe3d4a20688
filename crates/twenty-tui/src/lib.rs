//! Terminal UI for the Twenty guessing game.
//!
//! A ratatui chat interface over [`twenty_core::Session`]: a settings
//! sidebar, a scrolling transcript, clickable actions, and either a text
//! input (you guess) or yes/no answering (I guess).

pub mod app;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod views;
