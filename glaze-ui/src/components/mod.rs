//! Shared view components

pub mod prompt_input;
pub mod text_input;

pub use prompt_input::{split_prompt, PromptInput, PromptValue, PROMPT_GROUP};
pub use text_input::TextInput;
