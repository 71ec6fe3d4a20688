//! Transcript storage and export.

use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// The append-only history of one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// All entries in order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries recorded at or after index `from`.
    pub fn since(&self, from: usize) -> &[Entry] {
        self.entries.get(from..).unwrap_or(&[])
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Twenty Questions Transcript\n\n");
        for entry in &self.entries {
            match entry {
                Entry::Outcome { won, message, .. } => {
                    let heading = if *won { "Win" } else { "Lose" };
                    out.push_str(&format!("## {heading}\n\n{message}\n\n"));
                }
                Entry::Hint { number, text, .. } => {
                    out.push_str(&format!("> *Hint {number}*: {text}\n\n"));
                }
                Entry::FinalGuess { name, .. } => {
                    out.push_str(&format!("**{}**: My final guess is **{name}**!\n\n", entry.speaker()));
                }
                _ => {
                    out.push_str(&format!("**{}**: {}\n\n", entry.speaker(), entry.text()));
                }
            }
        }
        out
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Twenty Questions Transcript\n===========================\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {}: {}\n",
                entry.timestamp().format("%H:%M:%S"),
                entry.speaker(),
                entry.text()
            ));
        }
        out
    }
}
