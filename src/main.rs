//! Word Filter CLI
//!
//! Interactive command-line shell over the constraint engine.

mod command;
mod config;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_filter::{ConstraintEngine, Dictionary};

use crate::command::Command;
use crate::config::Config;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Results are listed automatically after a change only up to this many
const AUTO_LIST_LIMIT: usize = 60;
const RESULT_COLUMNS: usize = 3;

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_filters(engine: &ConstraintEngine) {
    let entries = engine.current_constraints();
    if entries.is_empty() {
        println!("No filters.");
        return;
    }

    println!("{:<12} {:<14} Pos", "Type", "Value");
    println!("{}", "-".repeat(32));
    for entry in &entries {
        println!("{}", command::format_entry(entry));
    }
}

fn print_words(words: &[String]) {
    println!("Words: {}", words.len());
    for row in words.chunks(RESULT_COLUMNS) {
        let line: Vec<String> = row.iter().map(|w| format!("{:<10}", w)).collect();
        println!("  {}", line.join("").trim_end());
    }
}

fn print_state(engine: &ConstraintEngine) {
    println!();
    print_filters(engine);
    println!();
    let results = engine.current_results();
    if results.len() <= AUTO_LIST_LIMIT {
        print_words(results);
    } else {
        println!("Words: {} (type 'words' to list them)", results.len());
    }
    println!();
}

fn run_interactive(mut engine: ConstraintEngine) -> Result<()> {
    print_banner();
    println!("Loaded {} words.", engine.dictionary().len());
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parsed = match command::parse(&line) {
            Some(parsed) => parsed,
            None => continue,
        };

        match parsed {
            Command::Help => print_help(),
            Command::Quit => {
                println!("Goodbye!");
                break;
            }
            Command::Filters => print_filters(&engine),
            Command::Words => print_words(engine.current_results()),
            Command::Clear => {
                engine.clear();
                print_state(&engine);
            }
            Command::Undo => match engine.undo() {
                Ok(()) => print_state(&engine),
                Err(e) => println!("Cannot undo: {}", e),
            },
            Command::Add {
                kind,
                letter,
                position,
            } => match engine.add_constraint(kind, letter, position) {
                Ok(()) => print_state(&engine),
                Err(e) => println!("Invalid filter: {}", e),
            },
            Command::Usage(usage) => println!("{}", usage),
            Command::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if config.show_help {
        println!("{}", USAGE_TEXT);
        return Ok(());
    }

    info!("Starting word-filter v{}", env!("CARGO_PKG_VERSION"));

    let dictionary = Dictionary::from_path(&config.dictionary_path)
        .context("the word list is required to start")?;

    run_interactive(ConstraintEngine::new(dictionary))
}
