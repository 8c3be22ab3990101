use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use voicepick_assistant::speech::listen_and_respond;
use voicepick_assistant::{
    Interpreter, LineCapture, ResponseSink, SpeechCapture, TracingSpeechSink, WriterSink,
};
use voicepick_auth::{Authenticator, JsonFileCredentialStore};
use voicepick_cli::shell::HELP;
use voicepick_cli::{AppConfig, Shell, ShellAction};
use voicepick_inventory::load_csv_or_empty;

const NO_TRANSCRIPTS: &str = "Voice input is not configured (start with --transcripts <PATH>).";

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    voicepick_observability::init_with(config.log_format);

    let table = load_csv_or_empty(&config.inventory)
        .with_context(|| format!("failed to load inventory from {}", config.inventory.display()))?;
    let store = JsonFileCredentialStore::open(&config.users)
        .with_context(|| format!("failed to open credential store {}", config.users.display()))?;

    let mut capture: Option<Box<dyn SpeechCapture>> = match &config.transcripts {
        Some(path) => {
            let feed = File::open(path)
                .with_context(|| format!("failed to open transcript feed {}", path.display()))?;
            Some(Box::new(LineCapture::new(BufReader::new(feed))))
        }
        None => None,
    };

    tracing::info!(
        inventory = %config.inventory.display(),
        records = table.len(),
        users = %config.users.display(),
        voice = capture.is_some(),
        "voicepick ready"
    );

    let mut shell = Shell::new(
        Interpreter::new(Arc::new(table)),
        Authenticator::with_cost(store, config.bcrypt_cost),
    );
    let mut display = WriterSink::new(io::stdout());
    let mut speech = TracingSpeechSink::new();

    display.deliver(HELP)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        match shell.handle_line(&line) {
            ShellAction::Reply(text) => {
                display.deliver(&text)?;
                if config.speak {
                    if let Err(err) = speech.deliver(&text) {
                        tracing::warn!(error = %err, "speech output failed");
                    }
                }
            }
            ShellAction::Listen => match capture.as_deref_mut() {
                Some(capture) => {
                    let ctx = shell.context();
                    if config.speak {
                        listen_and_respond(capture, shell.interpreter(), &ctx, &mut [&mut display, &mut speech]);
                    } else {
                        listen_and_respond(capture, shell.interpreter(), &ctx, &mut [&mut display]);
                    }
                }
                None => display.deliver(NO_TRANSCRIPTS)?,
            },
            ShellAction::Nothing => {}
            ShellAction::Quit => break,
        }
    }

    Ok(())
}
