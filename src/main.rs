//! `morse` command-line interface.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rust_morse_player::audio::{open_default_sink, ToneSequencer};
use rust_morse_player::config::{AppConfig, AudioConfig, LoadOutcome};
use rust_morse_player::console::{render_progress, Menu, VERSION};
use rust_morse_player::logging::{init_logging, LogFormat, LogLevel};
use rust_morse_player::{MorseError, TableRegistry, Timing};

/// Convert text to Morse code and back, and play it as audio
#[derive(Debug, Parser)]
#[command(name = "morse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Symbol table to use
    #[arg(long, global = true)]
    variant: Option<String>,

    /// Tone frequency in Hz
    #[arg(short, long, global = true, value_parser = parse_number)]
    frequency: Option<f64>,

    /// Unit (dot) length in milliseconds
    #[arg(short, long, global = true, value_parser = parse_number, conflicts_with = "wpm")]
    unit_ms: Option<f64>,

    /// Speed in words per minute (PARIS)
    #[arg(short, long, global = true)]
    wpm: Option<u32>,

    /// Output sample rate in Hz
    #[arg(long, global = true)]
    sample_rate: Option<u32>,

    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Log format (text or json)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert text to Morse code
    Encode {
        text: String,

        /// Play the result
        #[arg(short, long)]
        play: bool,

        /// Show a progress bar while playing
        #[arg(long)]
        progress: bool,
    },

    /// Convert Morse code to text
    Decode {
        morse: String,

        /// Play the Morse input
        #[arg(short, long)]
        play: bool,

        /// Show a progress bar while playing
        #[arg(long)]
        progress: bool,
    },

    /// Play Morse code as audio
    Play {
        morse: String,

        /// Show a progress bar while playing
        #[arg(long)]
        progress: bool,
    },

    /// List available symbol tables
    Variants,

    /// Interactive menu (default)
    Menu {
        /// Show a progress bar while playing
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_format);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<MorseError>() {
                Some(morse) => eprintln!("{} {morse}", morse.code()),
                None => eprintln!("error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(version = VERSION, "starting");

    let (mut app, outcome) =
        AppConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    if let LoadOutcome::Loaded { path } = &outcome {
        tracing::info!(%path, "configuration loaded");
    }

    if let Some(variant) = cli.variant {
        app.variant = variant;
    }
    if let Some(rate) = cli.sample_rate {
        app.audio.sample_rate = rate;
    }
    let unit_ms = match cli.wpm {
        Some(wpm) => Some(Timing::from_wpm(wpm)?.unit_ms()),
        None => cli.unit_ms,
    };
    app.audio = app.audio.with_overrides(cli.frequency, unit_ms)?;

    let registry = TableRegistry::with_builtins();
    let codec = registry.codec(&app.variant)?;

    match cli.command.unwrap_or(Commands::Menu { progress: false }) {
        Commands::Encode { text, play, progress } => {
            let morse = codec.encode(&text)?;
            println!("{morse}");
            if play && !morse.is_empty() {
                play_morse(&app.audio, &morse, progress)?;
            }
        }
        Commands::Decode { morse, play, progress } => {
            let text = codec.decode(&morse)?;
            println!("{text}");
            if play {
                play_morse(&app.audio, &morse, progress)?;
            }
        }
        Commands::Play { morse, progress } => {
            play_morse(&app.audio, &morse, progress)?;
        }
        Commands::Variants => {
            for name in registry.names() {
                let marker = if name == app.variant { "*" } else { " " };
                println!("{marker} {name}");
            }
        }
        Commands::Menu { progress } => {
            let sequencer = ToneSequencer::open(&app.audio, None, None, open_default_sink)
                .context("failed to open audio output")?;
            let mut menu = Menu::new(codec, sequencer).with_progress(progress);
            menu.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn play_morse(audio: &AudioConfig, morse: &str, progress: bool) -> Result<()> {
    let mut sequencer = ToneSequencer::open(audio, None, None, open_default_sink)
        .context("failed to open audio output")?;

    if progress {
        sequencer.play_with_progress(morse, |p| eprint!("\r{}", render_progress(&p)))?;
        eprintln!();
    } else {
        sequencer.play(morse)?;
    }
    Ok(())
}

/// Numeric option parser: text that is not a finite number is a type mismatch.
fn parse_number(s: &str) -> Result<f64, MorseError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MorseError::type_mismatch(format!("expected a number, got '{s}'")))
}
