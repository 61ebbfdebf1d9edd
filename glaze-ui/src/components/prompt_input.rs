//! Prompt entry form
//!
//! Free-text prompt and negative prompt fields with a token-count hint, a
//! picker for previously saved prompts, and a save button. The widget owns no
//! session state beyond the picker's open signal; every edit is reported
//! through `on_change` and the consumer decides how to merge it.

use dioxus::prelude::*;

use crate::components::text_input::TextInput;

/// Upstream prompt encoder chunk size; token counts are grouped by it
pub const PROMPT_GROUP: usize = 75;

/// Combined change payload for the two prompt fields.
///
/// Picking a saved prompt emits `negative_prompt: None`. A consumer applying
/// a shallow merge keeps its previous negative prompt in that case; any other
/// consumer should treat `None` as "unchanged", not "cleared".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PromptValue {
    pub prompt: String,
    pub negative_prompt: Option<String>,
}

/// Split a prompt on commas, then whitespace, dropping empty tokens.
pub fn split_prompt(prompt: &str) -> Vec<&str> {
    prompt
        .split(',')
        .flat_map(|phrase| phrase.split(' '))
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Hint line shown under the prompt field.
fn token_summary(prompt: &str) -> String {
    let tokens = split_prompt(prompt).len();
    let groups = tokens.div_ceil(PROMPT_GROUP);
    format!("{tokens} tokens, {groups} groups")
}

/// Prompt and negative prompt entry with saved-prompt picker
#[component]
pub fn PromptInput(
    prompt: String,
    negative_prompt: String,
    /// Previously saved prompts shown in the picker menu
    #[props(default)]
    prompts: Vec<String>,
    on_change: EventHandler<PromptValue>,
    on_save: EventHandler<String>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    let helper = token_summary(&prompt);
    let negative_for_edit = negative_prompt.clone();
    let prompt_for_edit = prompt.clone();
    let prompt_for_save = prompt.clone();

    rsx! {
        div { class: "flex flex-col gap-3",
            div { class: "flex items-end gap-2",
                button {
                    class: "shrink-0 mb-1 px-2.5 py-1.5 text-sm rounded-lg border border-neutral-600 text-neutral-300 hover:border-neutral-500 hover:text-white transition-colors",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "Load"
                }
                TextInput {
                    value: prompt.clone(),
                    label: "Prompt",
                    helper: helper,
                    on_input: move |value: String| {
                        on_change.call(PromptValue {
                            prompt: value,
                            negative_prompt: Some(negative_for_edit.clone()),
                        });
                    },
                }
                button {
                    class: "shrink-0 mb-1 px-2.5 py-1.5 text-sm rounded-lg border border-neutral-600 text-neutral-300 hover:border-neutral-500 hover:text-white transition-colors",
                    onclick: move |_| on_save.call(prompt_for_save.clone()),
                    "Save"
                }
            }
            if menu_open() {
                div { class: "flex flex-col bg-neutral-900 rounded-lg border border-white/5 p-1",
                    for saved in prompts.clone() {
                        SavedPromptItem {
                            text: saved,
                            on_pick: move |picked: String| {
                                on_change.call(PromptValue {
                                    prompt: picked,
                                    negative_prompt: None,
                                });
                                menu_open.set(false);
                            },
                        }
                    }
                }
            }
            TextInput {
                value: negative_prompt.clone(),
                label: "Negative prompt",
                on_input: move |value: String| {
                    on_change.call(PromptValue {
                        prompt: prompt_for_edit.clone(),
                        negative_prompt: Some(value),
                    });
                },
            }
        }
    }
}

/// One entry in the saved-prompt picker
#[component]
fn SavedPromptItem(text: String, on_pick: EventHandler<String>) -> Element {
    let text_for_pick = text.clone();

    rsx! {
        button {
            class: "w-full text-left px-2.5 py-1.5 text-xs rounded text-neutral-200 hover:bg-neutral-700 hover:text-white transition-colors",
            onclick: move |_| on_pick.call(text_for_pick.clone()),
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_prompt_breaks_on_commas_then_spaces() {
        assert_eq!(
            split_prompt("a cat, sitting, on a chair"),
            vec!["a", "cat", "sitting", "on", "a", "chair"]
        );
    }

    #[test]
    fn split_prompt_drops_empty_tokens() {
        assert_eq!(split_prompt(""), Vec::<&str>::new());
        assert_eq!(split_prompt(" , ,  "), Vec::<&str>::new());
        assert_eq!(split_prompt("one,,  two"), vec!["one", "two"]);
    }

    #[test]
    fn token_summary_groups_by_chunk_size() {
        assert_eq!(token_summary(""), "0 tokens, 0 groups");
        assert_eq!(token_summary("a cat, sitting, on a chair"), "6 tokens, 1 groups");

        let long = vec!["word"; 76].join(" ");
        assert_eq!(token_summary(&long), "76 tokens, 2 groups");
    }
}
