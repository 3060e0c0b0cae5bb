//! Terminal front-end: every line read from stdin is a sequence of key
//! presses, and the display is printed after each line.

use anyhow::{Context, Result};
use calcpad::{map_key, tail, Calculator, Config, Mode};
use clap::Parser;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Keypad calculator reading key names from stdin.
///
/// Words are key names (`Enter`, `Backspace`, `Escape`, `sin`, `pi`, ...);
/// other words are typed one character at a time. `:standard` and
/// `:scientific` switch the keypad mode.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Keypad mode at startup (standard or scientific)
    #[arg(short, long)]
    mode: Option<Mode>,
    /// Decimal places kept in results
    #[arg(short, long)]
    precision: Option<usize>,
    /// Number of characters of the display
    #[arg(short, long)]
    width: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(?config, "starting calculator");
    run(config, io::stdin().lock(), io::stdout().lock())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(width) = args.width {
        config.display_width = width;
    }
    config.validate().context("invalid command line options")?;
    Ok(config)
}

fn run<R: BufRead, W: Write>(config: Config, input: R, mut output: W) -> Result<()> {
    let width = config.display_width;
    let screen = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&screen);
    let mut calc = Calculator::new(config).with_renderer(move |text: &str| {
        let mut screen = sink.borrow_mut();
        screen.clear();
        screen.push_str(text);
    });

    for line in input.lines() {
        let line = line.context("reading standard input")?;
        for word in line.split_whitespace() {
            press_word(&mut calc, word);
        }
        writeln!(output, "{}", tail(&screen.borrow(), width)).context("writing the display")?;
    }
    Ok(())
}

fn press_word(calc: &mut Calculator, word: &str) {
    match word {
        ":standard" => return calc.set_mode(Mode::Standard),
        ":scientific" => return calc.set_mode(Mode::Scientific),
        _ => {}
    }
    if let Some(input) = map_key(word, calc.mode()) {
        calc.handle(input);
        return;
    }
    let mut buf = [0; 4];
    for c in word.chars() {
        match map_key(c.encode_utf8(&mut buf), calc.mode()) {
            Some(input) => calc.handle(input),
            None => debug!(key = %c, "ignoring unmapped key"),
        }
    }
}
