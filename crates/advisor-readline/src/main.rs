mod cli;
mod commands;
mod helper;
mod logging;
mod render;

use std::sync::Arc;

use advisor_application::{AdvisorSession, GenerateOutcome, Persisted, ReplyPacer};
use advisor_core::conversation::ChatMessage;
use advisor_core::error::AdvisorError;
use advisor_core::state::StateStore;
use advisor_infrastructure::{
    AdvisorPaths, CatalogSource, FileCatalogRepository, TomlKeyValueStore, load_config,
};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::Cli;
use crate::commands::Command;
use crate::helper::CliHelper;

/// Entry point of the `advisor` REPL.
///
/// Resolves configuration and paths, restores the session, then reads lines
/// until `quit`. Advisor replies go through a [`ReplyPacer`] into a channel
/// drained by a printer task.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Configuration =====
    let base_paths = AdvisorPaths::new(None);
    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => base_paths.config_file()?,
    };
    let config = load_config(&config_path)?;

    let paths = base_paths.with_data_dir(cli.data_dir.clone().or(config.data_dir.clone()));
    let _log_guard = logging::init(&paths.logs_dir()?)?;
    info!(config = %config_path.display(), "Starting advisor");

    let pacing = if cli.no_pacing {
        advisor_core::config::PacingConfig::immediate()
    } else {
        config.pacing
    };

    // ===== Session =====
    let catalog_repository =
        FileCatalogRepository::new(CatalogSource::from_path(cli.catalog.or(config.catalog_path)));
    let kv = TomlKeyValueStore::new(paths.storage_file()?);
    let mut session =
        AdvisorSession::restore(&catalog_repository, StateStore::new(Arc::new(kv)), pacing)
            .context("Failed to load the product catalog")?;

    // ===== Output =====
    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<ChatMessage>();
    let printer = tokio::spawn(async move {
        while let Some(message) = message_rx.recv().await {
            println!("{}", render::message(&message));
            println!();
        }
    });
    let mut pacer = ReplyPacer::new(message_tx);

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Beauty Advisor ===".bright_magenta().bold());
    println!("{}", session.welcome().bright_blue());
    println!("{}", "Type /help for commands, or 'quit' to exit.".bright_black());
    println!();
    if !session.selection().is_empty() {
        println!("{}", render::panel(&session.selection_panel(), session.language()));
        println!();
    }

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let command = match commands::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };
                let _ = rl.add_history_entry(line.trim());

                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                handle(command, &mut session, &mut pacer).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Deliver anything still scheduled, then let the printer drain.
    pacer.flush().await;
    drop(pacer);
    let _ = printer.await;

    info!("Advisor stopped");
    Ok(())
}

async fn handle(command: Command, session: &mut AdvisorSession, pacer: &mut ReplyPacer) {
    let language = session.language();
    match command {
        Command::Chat(text) => {
            if let Some(script) = session.submit_message(&text) {
                pacer.schedule(script).await;
            }
        }
        Command::Category(None) => println!("{}", render::categories(language)),
        Command::Category(Some(category)) => {
            let entries = session.products_in(category);
            println!("{}", render::catalog(category, &entries, language));
        }
        Command::Toggle(id) => match session.toggle_product(id) {
            Ok(outcome) => {
                let (change, product) = &outcome.value;
                println!("{}", format!("{:?}: {}", change, product.name).green());
                report_save_error(&outcome);
                println!("{}", render::panel(&session.selection_panel(), language));
            }
            Err(e) => report_error(&e),
        },
        Command::Remove(id) => match session.remove_product(id) {
            Ok(outcome) => {
                println!("{}", format!("Removed: {}", outcome.value.name).green());
                report_save_error(&outcome);
                println!("{}", render::panel(&session.selection_panel(), language));
            }
            Err(e) => report_error(&e),
        },
        Command::Clear => {
            if !session.selection_panel().show_clear_all {
                println!(
                    "{}",
                    "Clear All is available when more than one product is selected. Use /remove <id>."
                        .yellow()
                );
                return;
            }
            let outcome = session.clear_selection();
            report_save_error(&outcome);
            println!("{}", render::panel(&session.selection_panel(), language));
        }
        Command::Selected => println!("{}", render::panel(&session.selection_panel(), language)),
        Command::Generate => match session.generate_routine() {
            GenerateOutcome::Rejected(message) => println!("{}", message.yellow()),
            GenerateOutcome::Scheduled(script) => {
                println!("{}", format!("> {}", language.text().generate_label).green());
                pacer.schedule(script).await;
            }
        },
        Command::Details(id) => match session.product(id) {
            Ok(product) => println!("{}", render::details(product, language)),
            Err(e) => report_error(&e),
        },
        Command::Lang => {
            let outcome = session.toggle_language();
            report_save_error(&outcome);
            pacer.schedule(outcome.value).await;
        }
        Command::History => println!("{}", render::history(session.history())),
        Command::Help => println!("{}", render::help(language)),
        Command::Quit => {}
    }
}

fn report_error(error: &AdvisorError) {
    println!("{}", error.to_string().red());
}

fn report_save_error<T>(outcome: &Persisted<T>) {
    if let Some(e) = &outcome.save_error {
        println!("{}", format!("Could not save your changes: {}", e).red());
    }
}
