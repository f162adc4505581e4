//! Terminal rendering of advisor output.

use advisor_application::{CatalogEntry, SelectionPanel};
use advisor_core::conversation::{BotReply, ChatMessage, ConversationTurn, Sender};
use advisor_core::language::Language;
use advisor_core::product::{Category, Product};
use advisor_core::routine::Routine;
use colored::Colorize;

use crate::commands::COMMANDS;

pub fn message(message: &ChatMessage) -> String {
    match message {
        ChatMessage::Text {
            sender: Sender::Advisor,
            body,
        } => body
            .lines()
            .map(|line| line.bright_blue().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        ChatMessage::Text {
            sender: Sender::User,
            body,
        } => format!("> {}", body).green().to_string(),
        ChatMessage::Routine(routine) => self::routine(routine),
    }
}

pub fn routine(routine: &Routine) -> String {
    let mut out = Vec::new();
    out.push(format!("✨ {}", routine.title).bright_magenta().bold().to_string());
    out.push(routine.intro.clone());

    for section in &routine.sections {
        out.push(String::new());
        out.push(section.title.bright_yellow().bold().to_string());
        for (i, step) in section.steps.iter().enumerate() {
            out.push(format!("  {}. {}", i + 1, step));
        }
    }

    out.push(String::new());
    out.push(
        routine
            .language
            .text()
            .tips_heading
            .bright_yellow()
            .bold()
            .to_string(),
    );
    for tip in &routine.tips {
        out.push(format!("  {}", tip));
    }
    out.join("\n")
}

pub fn categories(language: Language) -> String {
    let mut out = vec![language.text().category_prompt.bright_black().to_string()];
    for category in Category::all() {
        out.push(format!(
            "  {:<16} {}",
            category.as_str(),
            language.category_label(category).bright_black()
        ));
    }
    out.join("\n")
}

pub fn catalog(category: Category, entries: &[CatalogEntry<'_>], language: Language) -> String {
    let heading = language.category_label(category).bright_magenta().bold().to_string();
    if entries.is_empty() {
        return format!("{}\n{}", heading, language.text().empty_category.bright_black());
    }

    let mut out = vec![heading];
    for entry in entries {
        let marker = if entry.selected {
            "[x]".bright_green().to_string()
        } else {
            "[ ]".to_string()
        };
        out.push(format!(
            "  {} {:>3}  {} {}",
            marker,
            entry.product.id,
            entry.product.name,
            format!("({})", entry.product.brand).bright_black()
        ));
    }
    out.join("\n")
}

pub fn panel(panel: &SelectionPanel, language: Language) -> String {
    let text = language.text();
    if let Some(label) = panel.empty_label {
        return label.bright_black().to_string();
    }

    let mut out: Vec<String> = panel
        .items
        .iter()
        .map(|item| format!("  {:>3}  {} - {}", item.id, item.name, item.brand))
        .collect();

    let mut controls = Vec::new();
    if panel.generate_enabled {
        controls.push(format!("/generate: {}", text.generate_label));
    }
    if panel.show_clear_all {
        controls.push(format!("/clear: {}", text.clear_all_label));
    }
    out.push(controls.join("   ").bright_black().to_string());
    out.join("\n")
}

pub fn details(product: &Product, language: Language) -> String {
    format!(
        "{}\n{}\n{} · {}\n{}",
        language.text().show_details_label.bright_magenta(),
        product.name.bold(),
        product.brand,
        language.category_label(product.category),
        product.description
    )
}

pub fn history(turns: &[ConversationTurn]) -> String {
    if turns.is_empty() {
        return "No conversation yet.".bright_black().to_string();
    }

    turns
        .iter()
        .map(|turn| {
            let reply = match &turn.reply {
                BotReply::Text(text) => text.clone(),
                BotReply::Routine(routine) => format!("[{}]", routine.title),
            };
            format!(
                "{} {}\n{}",
                turn.timestamp.format("%H:%M:%S").to_string().bright_black(),
                format!("> {}", turn.user).green(),
                reply.bright_blue()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Command reference. The `/lang` line names the language it switches to.
pub fn help(language: Language) -> String {
    let mut out = vec!["Commands:".bright_magenta().bold().to_string()];
    for (name, arg, description) in COMMANDS {
        let usage = if arg.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, arg)
        };
        let description = if *name == "/lang" {
            format!("{} ({})", description, language.toggle_label())
        } else {
            description.to_string()
        };
        out.push(format!("  {:<20} {}", usage.bright_cyan(), description));
    }
    out.push(format!("  {:<20} {}", "quit".bright_cyan(), "Leave the advisor"));
    out.push("Anything else is sent to the advisor as a chat message.".bright_black().to_string());
    out.join("\n")
}
