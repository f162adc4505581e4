//! REPL command parsing.

use advisor_core::product::Category;
use thiserror::Error;

/// Slash commands with their argument hint and help text.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("/category", "<name>", "List the products of a category"),
    ("/toggle", "<id>", "Select or deselect a product"),
    ("/select", "<id>", "Same as /toggle"),
    ("/remove", "<id>", "Remove a selected product"),
    ("/clear", "", "Clear the selection"),
    ("/selected", "", "Show the selected products"),
    ("/generate", "", "Generate a routine from the selection"),
    ("/details", "<id>", "Show a product's description"),
    ("/lang", "", "Switch between English and Arabic"),
    ("/history", "", "Show the conversation so far"),
    ("/help", "", "Show this help"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/category` without a name lists the categories
    Category(Option<Category>),
    Toggle(u32),
    Remove(u32),
    Clear,
    Selected,
    Generate,
    Details(u32),
    Lang,
    History,
    Help,
    Quit,
    /// Anything that is not a command is a chat message
    Chat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0} needs a product id")]
    MissingId(&'static str),
    #[error("'{0}' is not a product id")]
    InvalidId(String),
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Unknown command '{0}'. Type /help for the list of commands")]
    UnknownCommand(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line == "quit" || line == "exit" {
        return Ok(Some(Command::Quit));
    }
    if !line.starts_with('/') {
        return Ok(Some(Command::Chat(line.to_string())));
    }

    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (line, ""),
    };

    let command = match name {
        "/category" => {
            if arg.is_empty() {
                Command::Category(None)
            } else {
                let category = Category::parse(arg)
                    .ok_or_else(|| CommandError::UnknownCategory(arg.to_string()))?;
                Command::Category(Some(category))
            }
        }
        "/toggle" | "/select" => Command::Toggle(parse_id("/toggle", arg)?),
        "/remove" => Command::Remove(parse_id("/remove", arg)?),
        "/details" => Command::Details(parse_id("/details", arg)?),
        "/clear" => Command::Clear,
        "/selected" => Command::Selected,
        "/generate" => Command::Generate,
        "/lang" => Command::Lang,
        "/history" => Command::History,
        "/help" => Command::Help,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_id(command: &'static str, arg: &str) -> Result<u32, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_chat() {
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(
            parse("  what is retinol? "),
            Ok(Some(Command::Chat("what is retinol?".to_string())))
        );
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_commands_with_ids() {
        assert_eq!(parse("/toggle 4"), Ok(Some(Command::Toggle(4))));
        assert_eq!(parse("/select 4"), Ok(Some(Command::Toggle(4))));
        assert_eq!(parse("/remove  12 "), Ok(Some(Command::Remove(12))));
        assert_eq!(parse("/details 1"), Ok(Some(Command::Details(1))));
        assert_eq!(parse("/toggle"), Err(CommandError::MissingId("/toggle")));
        assert_eq!(
            parse("/remove abc"),
            Err(CommandError::InvalidId("abc".to_string()))
        );
    }

    #[test]
    fn test_category_names_with_spaces() {
        assert_eq!(
            parse("/category men's grooming"),
            Ok(Some(Command::Category(Some(Category::MensGrooming))))
        );
        assert_eq!(
            parse("/category hair-color"),
            Ok(Some(Command::Category(Some(Category::HairColor))))
        );
        assert_eq!(parse("/category"), Ok(Some(Command::Category(None))));
        assert_eq!(
            parse("/category shoes"),
            Err(CommandError::UnknownCategory("shoes".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("/dance"),
            Err(CommandError::UnknownCommand("/dance".to_string()))
        );
    }

    #[test]
    fn test_every_listed_command_parses() {
        for (name, arg_hint, _) in COMMANDS {
            let line = if arg_hint.is_empty() {
                name.to_string()
            } else if *name == "/category" {
                format!("{} cleanser", name)
            } else {
                format!("{} 1", name)
            };
            assert!(parse(&line).is_ok(), "{} failed to parse", line);
        }
    }
}
