//! Interactive prompting.
//!
//! Commands ask for missing values through [`Prompter`] so they can be
//! driven without a terminal in tests.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask for a line of text.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask to pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;
}

/// Terminal prompts through dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .wrap_err_with(|| format!("Failed to read '{}'", prompt))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .wrap_err("Failed to get confirmation")
    }

    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .wrap_err_with(|| format!("Failed to get selection for '{}'", prompt))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// A recorded answer.
    #[derive(Debug, Clone)]
    pub enum Answer {
        Text(String),
        Yes,
        No,
        Pick(usize),
    }

    /// Replays answers in order and records the prompts it was shown.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                prompts: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Result<Answer> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| eyre::eyre!("unexpected prompt '{}'", prompt))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&mut self, prompt: &str) -> Result<String> {
            match self.next(prompt)? {
                Answer::Text(text) => Ok(text),
                other => eyre::bail!("expected text for '{}', got {:?}", prompt, other),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
            match self.next(prompt)? {
                Answer::Yes => Ok(true),
                Answer::No => Ok(false),
                other => eyre::bail!("expected yes/no for '{}', got {:?}", prompt, other),
            }
        }

        fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
            match self.next(prompt)? {
                Answer::Pick(index) if index < items.len() => Ok(index),
                other => eyre::bail!("invalid selection for '{}': {:?}", prompt, other),
            }
        }
    }
}
