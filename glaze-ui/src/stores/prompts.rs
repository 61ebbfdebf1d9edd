//! Saved prompt library

use serde::{Deserialize, Serialize};

/// Free-text prompts the user has saved for reuse
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptLibrary {
    pub prompts: Vec<String>,
}

impl PromptLibrary {
    /// Append a prompt. Duplicates are allowed.
    pub fn save(&mut self, prompt: impl Into<String>) {
        self.prompts.push(prompt.into());
    }

    /// Remove the first prompt that matches exactly; absent prompts are a
    /// no-op.
    pub fn remove(&mut self, prompt: &str) {
        if let Some(idx) = self.prompts.iter().position(|it| it == prompt) {
            self.prompts.remove(idx);
        }
    }
}
