//! Frakking Toaster -- an infection board game agent.
//!
//! Reads a single command from stdin and writes its response to stdout:
//! `identify` answers with the agent name, `move` answers with
//! `srcX:srcY:dstX:dstY:` or `pass`. Anything else gets no response. The
//! process handles exactly one command and always exits with status 0.

use std::io::{self, BufRead, Write};

use toaster::engine::{Engine, EngineConfig};
use toaster::protocol::parser::{parse_command, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut lines = stdin.lock().lines();
    let engine = Engine::new(EngineConfig::from_env());

    let command = match lines.next() {
        Some(Ok(line)) => parse_command(&line),
        Some(Err(e)) => {
            log::debug!("failed to read command: {}", e);
            return;
        }
        None => return,
    };

    let result = match command {
        Command::Identify => engine.handle_identify(&mut out),
        Command::Move => engine.handle_move(&mut lines, &mut out),
        Command::Unknown(other) => {
            log::debug!("unknown command: '{}'", other);
            Ok(())
        }
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        log::error!("failed to write response: {}", e);
    }
}
