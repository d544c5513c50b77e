//! Stdin command feed.
//!
//! One command per line. A JSON object carrying a `"command"` string is
//! relayed as a free-text order; the literal `clear` drops the current
//! strategy; any other non-empty line is treated as a raw strategy
//! payload and handed to the engine unparsed (the engine validates and
//! discards malformed payloads itself).

use std::io::BufRead;
use std::sync::mpsc;

use commander_core::commands::ArenaCommand;

/// Spawn the stdin reader thread and return the receiving end of the
/// command channel. The thread exits when stdin closes; the game loop
/// keeps running on a disconnected channel.
pub fn spawn_stdin_feed() -> mpsc::Receiver<ArenaCommand> {
    let (tx, rx) = mpsc::channel::<ArenaCommand>();

    std::thread::Builder::new()
        .name("commander-stdin-feed".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        log::warn!("stdin read failed: {err}");
                        break;
                    }
                };
                let Some(command) = classify_line(&line) else {
                    continue;
                };
                if tx.send(command).is_err() {
                    break;
                }
            }
            log::info!("stdin feed closed");
        })
        .expect("failed to spawn stdin feed thread");

    rx
}

/// Turn one input line into a command, or `None` for blank lines.
fn classify_line(line: &str) -> Option<ArenaCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line == "clear" {
        return Some(ArenaCommand::ClearStrategy);
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(line) {
        if let Some(text) = value.get("command").and_then(|v| v.as_str()) {
            return Some(ArenaCommand::IssueCommand {
                text: text.to_string(),
            });
        }
    }
    Some(ArenaCommand::UpdateStrategy {
        payload: line.to_string(),
    })
}
