//! rustyline helper: completion, highlighting and hints for slash commands.

use std::borrow::Cow::{self, Borrowed, Owned};

use advisor_core::product::Category;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMANDS;

const CATEGORY_COMMAND: &str = "/category ";

#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    categories: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|(name, _, _)| name.to_string()).collect(),
            categories: Category::all()
                .into_iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }

    /// Candidates for the word being typed, with the offset it starts at.
    fn candidates(&self, line: &str) -> (usize, Vec<&str>) {
        if let Some(partial) = line.strip_prefix(CATEGORY_COMMAND) {
            let matches = self
                .categories
                .iter()
                .filter(|c| c.starts_with(partial))
                .map(String::as_str)
                .collect();
            return (CATEGORY_COMMAND.len(), matches);
        }
        if line.starts_with('/') && !line.contains(' ') {
            let matches = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(String::as_str)
                .collect();
            return (0, matches);
        }
        (0, Vec::new())
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(&line[..pos]);
        let pairs = matches
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, matches) = self.candidates(line);
        let typed = &line[start..];
        matches
            .into_iter()
            .find(|candidate| candidate.len() > typed.len())
            .map(|candidate| candidate[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}
