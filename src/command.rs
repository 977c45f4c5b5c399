//! Parsing of shell input lines.

use word_filter::{ConstraintEntry, ConstraintKind};

const ADD_USAGE: &str = "Usage: add <kind> [position] <letter>";

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Quit,
    Filters,
    Words,
    Clear,
    Undo,
    /// Green and yellow carry a position; the engine validates both values.
    Add {
        kind: ConstraintKind,
        letter: &'a str,
        position: Option<&'a str>,
    },
    /// Recognized command with the wrong arguments
    Usage(String),
    Unknown(String),
}

/// Parse a line; `None` for a blank line.
///
/// Tile commands read `<letter>` for gray and "contains", and
/// `<position> <letter>` for green and yellow.
pub fn parse(line: &str) -> Option<Command<'_>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (&first, args) = parts.split_first()?;

    let command = match first.to_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "filters" | "f" | "list" => Command::Filters,
        "words" | "w" | "results" => Command::Words,
        "clear" | "reset" => Command::Clear,
        "undo" | "u" => Command::Undo,
        "add" => match args.split_first() {
            Some((kind, rest)) => match kind.parse::<ConstraintKind>() {
                Ok(kind) => tile(kind, rest).unwrap_or_else(|| Command::Usage(ADD_USAGE.to_string())),
                Err(e) => Command::Usage(format!("Invalid filter: {}", e)),
            },
            None => Command::Usage(ADD_USAGE.to_string()),
        },
        name => match name.parse::<ConstraintKind>() {
            Ok(kind) => tile(kind, args).unwrap_or_else(|| Command::Usage(tile_usage(name, kind))),
            Err(_) => Command::Unknown(first.to_string()),
        },
    };

    Some(command)
}

fn tile<'a>(kind: ConstraintKind, args: &[&'a str]) -> Option<Command<'a>> {
    match (kind.needs_position(), args) {
        (true, &[position, letter]) => Some(Command::Add {
            kind,
            letter,
            position: Some(position),
        }),
        (false, &[letter]) => Some(Command::Add {
            kind,
            letter,
            position: None,
        }),
        _ => None,
    }
}

fn tile_usage(name: &str, kind: ConstraintKind) -> String {
    if kind.needs_position() {
        format!("Usage: {} <position> <letter>", name)
    } else {
        format!("Usage: {} <letter>", name)
    }
}

/// A row of the filter listing, without trailing padding.
pub fn format_entry(entry: &ConstraintEntry) -> String {
    let position = entry.position.map(|p| p.to_string()).unwrap_or_default();
    format!("{:<12} {:<14} {}", entry.kind.label(), entry.value, position)
        .trim_end()
        .to_string()
}
