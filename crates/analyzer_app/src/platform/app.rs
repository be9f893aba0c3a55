use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use analyzer_core::{update, AppState, Msg};
use anyhow::Context;
use engine_logging::engine_info;

use super::console::{read_commands, USAGE};
use super::effects::EffectRunner;
use super::{config, logging, render};

/// Everything the dispatch loop reacts to, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Msg(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(Path::new(logging::LOG_FILENAME));

    let config = config::load(Path::new(".")).context("loading configuration")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(&config.transport_settings(), event_tx.clone())
        .context("starting analysis engine")?;

    thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || read_commands(io::stdin().lock(), event_tx))
        .context("spawning console reader")?;

    println!("Smart Document Analyzer ({})", config.base_url);
    println!("{USAGE}");

    let mut state = AppState::new();
    print_view(&state);

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Msg(msg) => msg,
            AppEvent::Quit => break,
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            print_view(&state);
        }
    }

    engine_info!("Console closed; exiting");
    Ok(())
}

fn print_view(state: &AppState) {
    println!();
    for line in render::render(&state.view()) {
        println!("{line}");
    }
}
