//! Prompt construction.

use twenty_core::Character;

/// System message sent ahead of every question.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// The secret's attributes in readable form, e.g. `"male, super strength"`.
pub fn attributes(secret: &Character) -> String {
    secret
        .traits
        .iter()
        .map(|t| t.name().replace('-', " "))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The user message asking about `secret`.
pub fn question_prompt(secret: &Character, question: &str) -> String {
    format!(
        "I have a character named {name}. The character's key attributes are: {attrs}. \
         Based on these attributes, please answer the following question with only 'Yes' \
         or 'No'. If the answer is 'No', also provide a brief, simple reason. \
         Question: '{question}'",
        name = secret.name,
        attrs = attributes(secret),
        question = question.trim(),
    )
}
