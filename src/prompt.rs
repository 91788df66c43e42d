//! User input and interaction handling.
//! The `Prompter` trait is the seam between the pipeline and the terminal:
//! given an ordered question list it returns a key → answer mapping.

use crate::error::{Error, Result};
use dialoguer::{Input, Select};
use indexmap::IndexMap;

/// A single question presented to the user.
#[derive(Debug, Clone)]
pub struct Question {
    /// Key the answer is stored under
    pub key: String,
    /// Prompt message shown to the user
    pub help: String,
    /// Default value, used when the user submits an empty answer
    pub default: Option<String>,
    /// Fixed set of allowed choices; empty means free text
    pub choices: Vec<String>,
}

impl Question {
    pub fn text(key: &str, help: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            help: help.to_string(),
            default: default.map(String::from),
            choices: Vec::new(),
        }
    }

    pub fn select(key: &str, help: &str, default: Option<&str>, choices: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            help: help.to_string(),
            default: default.map(String::from),
            choices: choices.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Trait for answer collection.
pub trait Prompter {
    /// Asks every question in order and returns the answer mapping.
    /// Blocks until all questions are answered.
    fn ask(&self, questions: &[Question]) -> Result<IndexMap<String, String>>;
}

/// Dialoguer-based interactive prompter.
pub struct DialoguerPrompter {}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

fn prompt_selection(question: &Question) -> Result<String> {
    let default_index = question
        .default
        .as_ref()
        .and_then(|d| question.choices.iter().position(|choice| choice == d))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(&question.help)
        .default(default_index)
        .items(&question.choices)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    Ok(question.choices[selection].clone())
}

fn prompt_text(question: &Question) -> Result<String> {
    let input = Input::new()
        .with_prompt(&question.help)
        .default(question.default.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    Ok(input)
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, questions: &[Question]) -> Result<IndexMap<String, String>> {
        let mut answers = IndexMap::new();

        for question in questions {
            let value = if question.choices.is_empty() {
                prompt_text(question)?
            } else {
                prompt_selection(question)?
            };
            answers.insert(question.key.clone(), value);
        }

        Ok(answers)
    }
}
