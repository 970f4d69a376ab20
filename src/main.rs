use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use simplecalc::calculator::{CalcResult, calculate, copy_to_clipboard, looks_like_expression};
use simplecalc::config::{Config, OutputFormat};
use simplecalc::keypad::{Key, Screen, Session};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Copy successful results to the clipboard
    #[arg(long, global = true)]
    copy: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an arithmetic expression
    Eval {
        /// The expression to evaluate; multiple words are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Replay keypad button presses and print the screen
    Keys {
        /// Button labels such as `7`, `+`, `+/-`, `C`, `<` or `=`
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<Key>,

        /// Print the screen after every key instead of only the last
        #[arg(long)]
        trace: bool,
    },
    /// Evaluate expressions read line by line from stdin
    Repl,
}

/// Resolved output settings shared by all subcommands.
struct Output {
    format: OutputFormat,
    copy: bool,
}

impl Output {
    fn result(&self, result: &CalcResult) -> Result<()> {
        match self.format {
            OutputFormat::Text => println!("{}", result.display()),
            OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
        }
        if self.copy && result.is_success() {
            copy_to_clipboard(result.display())?;
            info!(result = result.display(), "copied result to clipboard");
        }
        Ok(())
    }

    fn screen(&self, key: Option<Key>, screen: &Screen) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                if let Some(key) = key {
                    println!("[{key}]");
                }
                println!("{}", screen.expression);
                println!("{}", screen.result);
            }
            OutputFormat::Json => {
                let value = json!({
                    "key": key.map(|k| k.to_string()),
                    "screen": screen,
                });
                println!("{value}");
            }
        }
        Ok(())
    }
}

fn init_logging(default_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_keys(output: &Output, keys: &[Key], trace: bool) -> Result<()> {
    let mut session = Session::new();
    for &key in keys {
        session.press(key);
        if trace {
            output.screen(Some(key), &session.screen())?;
        }
    }
    if !trace {
        output.screen(None, &session.screen())?;
    }

    if output.copy && matches!(keys.last(), Some(Key::Equals)) && !session.screen().is_error {
        copy_to_clipboard(session.expression())?;
        info!(result = session.expression(), "copied result to clipboard");
    }
    Ok(())
}

fn run_repl(output: &Output) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        if !looks_like_expression(&line) {
            debug!(input = %line, "input does not look like an expression");
        }
        output.result(&calculate(line.trim()))?;
        io::stdout().flush()?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    init_logging(&config.log_level, cli.verbose);
    debug!(?config, "loaded configuration");

    let output = Output {
        format: if cli.json { OutputFormat::Json } else { config.output },
        copy: cli.copy || config.copy_result,
    };

    match cli.command {
        Commands::Eval { expression } => {
            let result = calculate(&expression.join(" "));
            output.result(&result)?;
            if !result.is_success() {
                warn!(expression = result.expression(), "invalid expression");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Keys { keys, trace } => run_keys(&output, &keys, trace)?,
        Commands::Repl => run_repl(&output)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
