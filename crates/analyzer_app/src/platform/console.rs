use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;

use analyzer_core::Msg;
use engine_logging::{engine_info, engine_warn};

use super::app::AppEvent;
use super::picker::pick_file;

pub const USAGE: &str = "Commands: open <path> | analyze | retry | reset | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Open(PathBuf),
    Analyze,
    Retry,
    Reset,
    Help,
    Quit,
}

/// Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Result<ConsoleCommand, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "open" if rest.is_empty() => return Some(Err("open needs a file path".to_string())),
        "open" => ConsoleCommand::Open(PathBuf::from(rest)),
        "analyze" => ConsoleCommand::Analyze,
        "retry" => ConsoleCommand::Retry,
        "reset" => ConsoleCommand::Reset,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Some(Err(format!("unknown command {other:?}"))),
    };
    Some(Ok(command))
}

/// Reads commands until `quit` or end of input and forwards them as events.
pub fn read_commands(input: impl BufRead, events: mpsc::Sender<AppEvent>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                engine_warn!("Failed to read console input: {}", err);
                break;
            }
        };
        let event = match parse_command(&line) {
            None => continue,
            Some(Err(message)) => {
                eprintln!("{message}\n{USAGE}");
                continue;
            }
            Some(Ok(ConsoleCommand::Help)) => {
                println!("{USAGE}");
                continue;
            }
            Some(Ok(ConsoleCommand::Quit)) => break,
            Some(Ok(ConsoleCommand::Open(path))) => match pick_file(&path) {
                Ok(file) => {
                    engine_info!("Picked {:?} as {}", path, file.mime_type);
                    AppEvent::Msg(Msg::FileOffered(file))
                }
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            },
            Some(Ok(ConsoleCommand::Analyze)) => AppEvent::Msg(Msg::AnalyzeClicked),
            Some(Ok(ConsoleCommand::Retry)) => AppEvent::Msg(Msg::RetryClicked),
            Some(Ok(ConsoleCommand::Reset)) => AppEvent::Msg(Msg::ResetClicked),
        };
        if events.send(event).is_err() {
            return;
        }
    }
    let _ = events.send(AppEvent::Quit);
}
