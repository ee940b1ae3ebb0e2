use anyhow::{Context, Result};
use clap::Parser;
use diarist::cli::Cli;
use diarist::config::Config;
use diarist::event::SessionEvent;
use diarist::hypothesis::RawHypothesis;
use diarist::recognizer::RecognizerMessage;
use diarist::session::Session;
use log::warn;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut session = Session::start(config);
    let completion = session.completion();
    let events = session.events();
    let input = session.recognizer_input();

    let quiet = cli.quiet;
    let printer = std::thread::spawn(move || {
        for event in events.iter() {
            render_event(&event, quiet);
        }
    });

    let reader: Box<dyn AsyncRead + Unpin> = match &cli.input {
        Some(path) => Box::new(
            tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdin()),
    };

    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match classify(&line) {
            Ok(message) => {
                if input.send(message).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!("skipping malformed hypothesis line: {}", e),
        }
    }

    drop(input);
    session.stop().await?;
    if printer.join().is_err() {
        eprintln!("diarist: event printer thread panicked");
    }

    if let Some(completion) = completion {
        if let Ok(outcome) = completion.await
            && !cli.quiet
        {
            eprintln!("{} {:?}", "session completed:".dimmed(), outcome);
        }
    }

    Ok(())
}

/// Classify one raw line as a partial or final hypothesis.
///
/// Mirrors the upstream engine's convention: a record with a "text" field
/// is final, anything else well-formed is a partial.
fn classify(line: &str) -> diarist::Result<RecognizerMessage> {
    let hypothesis = RawHypothesis::parse(line)?;
    if hypothesis.text.is_some() {
        Ok(RecognizerMessage::Final(line.to_string()))
    } else {
        Ok(RecognizerMessage::Partial(line.to_string()))
    }
}

fn render_event(event: &SessionEvent, quiet: bool) {
    match event {
        SessionEvent::Status { .. } if quiet => {}
        _ => match event.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("diarist: failed to render event: {}", e),
        },
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)?,
            None => Config::default(),
        },
    };

    if let Some(threshold) = cli.threshold {
        config.diarization.similarity_threshold = threshold;
    }

    Ok(config)
}
