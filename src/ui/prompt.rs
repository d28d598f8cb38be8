//! Interactive input.
//!
//! The session only talks to the [`Prompter`] trait: pick one item of a menu,
//! read a line of text, answer yes/no. Typed validation (dates, times, row
//! numbers...) lives in the caller, which re-asks until the answer parses.

use crate::errors::AppResult;
use crate::ui::messages::error;
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[String]) -> AppResult<usize>;

    /// One non-empty line of text.
    fn input(&mut self, prompt: &str) -> AppResult<String>;

    fn confirm(&mut self, prompt: &str) -> AppResult<bool>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, prompt: &str, items: &[String]) -> AppResult<usize> {
        (**self).select(prompt, items)
    }

    fn input(&mut self, prompt: &str) -> AppResult<String> {
        (**self).input(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        (**self).confirm(prompt)
    }
}

/// Ask until `parse` accepts the answer, printing each rejection.
pub fn ask_parsed<P, T, F>(prompter: &mut P, prompt: &str, parse: F) -> AppResult<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> AppResult<T>,
{
    loop {
        let answer = prompter.input(prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => error(e),
        }
    }
}

/// Prompter backed by the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> AppResult<usize> {
        let choice = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str) -> AppResult<String> {
        let answer: String = Input::new().with_prompt(prompt).interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        let answer = Confirm::new().with_prompt(prompt).default(false).interact()?;
        Ok(answer)
    }
}
