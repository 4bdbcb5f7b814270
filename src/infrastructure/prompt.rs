//! Interactive prompts for titles and template choices

use crate::error::{JekyllError, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// An entry offered in a single-choice selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: String,
}

/// User input collaborator. `None` means the user cancelled.
pub trait Prompter {
    /// Ask for free text
    fn input_text(&self, prompt: &str, placeholder: &str) -> Result<Option<String>>;

    /// Ask the user to choose one of `items`, returning its index
    fn pick_one(&self, placeholder: &str, items: &[PickItem]) -> Result<Option<usize>>;
}

/// Prompts on a terminal: questions go to `output`, answers come from `input`
pub struct TerminalPrompter<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompter reading stdin and writing to stderr, keeping stdout for results
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Read one line; EOF counts as cancellation
    fn read_answer(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|e| JekyllError::Prompt(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&self, text: &str) -> Result<()> {
        let mut out = self.output.borrow_mut();
        write!(out, "{}", text)
            .and_then(|_| out.flush())
            .map_err(|e| JekyllError::Prompt(format!("Failed to write prompt: {}", e)))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input_text(&self, prompt: &str, placeholder: &str) -> Result<Option<String>> {
        self.say(&format!("{} ({}): ", prompt, placeholder))?;
        Ok(self.read_answer()?.filter(|answer| !answer.trim().is_empty()))
    }

    fn pick_one(&self, placeholder: &str, items: &[PickItem]) -> Result<Option<usize>> {
        let mut menu = String::new();
        for (i, item) in items.iter().enumerate() {
            menu.push_str(&format!("  {}) {}  {}\n", i + 1, item.label, item.description));
        }
        menu.push_str(&format!("{} [1-{}, empty to cancel]: ", placeholder, items.len()));
        self.say(&menu)?;

        let answer = match self.read_answer()? {
            Some(answer) if !answer.trim().is_empty() => answer,
            _ => return Ok(None),
        };

        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(Some(n - 1)),
            _ => Err(JekyllError::Prompt(format!(
                "Invalid selection '{}': expected a number between 1 and {}",
                answer.trim(),
                items.len()
            ))),
        }
    }
}
