extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;
use dzen::lang::Error;
use dzen::mach::{Context, Runtime, Settings};
use linefeed::{Interface, ReadResult, Signal};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod node;
use node::NodeEvaluator;

#[derive(Parser, Debug)]
#[command(
    name = "dzen",
    version,
    about = "Resolve recurring date phrases to the next matching date"
)]
struct Cli {
    /// Reference date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS [default: now]
    #[arg(short = 'n', long = "now", value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Run f{:: ... ::} code blocks with Node.js
    #[arg(long = "allow-unsafe")]
    allow_unsafe: bool,

    /// Node.js executable used for code blocks
    #[arg(long = "node", value_name = "PROGRAM", default_value = "node")]
    node: String,

    /// Print each parsed query before its date
    #[arg(long = "ast")]
    ast: bool,

    /// Resolve TEXT instead of reading a file
    #[arg(short = 'e', long = "eval", value_name = "TEXT", conflicts_with = "file")]
    eval: Option<String>,

    /// File of queries to resolve, interactive when absent
    file: Option<PathBuf>,
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    if let Ok(now) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(now);
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("invalid date {}", s)),
        Err(e) => Err(format!("invalid date {}: {}", s, e)),
    }
}

pub fn main() {
    let cli = Cli::parse();
    let runtime = Runtime::new(context(&cli));
    let source = match (&cli.eval, &cli.file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(error) => {
                eprintln!("{}: {}", path.display(), error);
                std::process::exit(1);
            }
        },
        (None, None) => None,
    };
    let success = match source {
        Some(source) => batch(&runtime, &source, cli.ast),
        None => {
            let interrupted = Arc::new(AtomicBool::new(false));
            let int_moved = interrupted.clone();
            if let Err(error) = ctrlc::set_handler(move || {
                int_moved.store(true, Ordering::SeqCst);
            }) {
                eprintln!("Error setting Ctrl-C handler: {}", error);
            }
            match main_loop(&runtime, cli.ast, interrupted) {
                Ok(()) => true,
                Err(error) => {
                    eprintln!("{}", error);
                    false
                }
            }
        }
    };
    if !success {
        std::process::exit(1);
    }
}

fn context(cli: &Cli) -> Context {
    let context = match cli.now {
        Some(now) => Context::new(now),
        None => Context::default(),
    };
    if !cli.allow_unsafe {
        return context;
    }
    context
        .with_settings(Settings {
            allow_unsafe_code_execution: true,
        })
        .with_evaluator(NodeEvaluator::new(&cli.node))
}

/// One printable line per query, or the error that stopped it.
fn resolve(runtime: &Runtime, source: &str, ast: bool) -> Vec<Result<String, Error>> {
    let resolved = match runtime.resolve_block(source) {
        Ok(resolved) => resolved,
        Err(error) => return vec![Err(error)],
    };
    let mut lines = vec![];
    for pair in resolved {
        match pair {
            Ok((query, date)) => {
                if ast {
                    lines.push(Ok(query.to_string()));
                }
                lines.push(date.map(|date| date.format("%Y-%m-%d").to_string()));
            }
            Err(error) => lines.push(Err(error)),
        }
    }
    lines
}

fn batch(runtime: &Runtime, source: &str, ast: bool) -> bool {
    let mut success = true;
    for line in resolve(runtime, source, ast) {
        match line {
            Ok(line) => println!("{}", line),
            Err(error) => {
                success = false;
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
        }
    }
    success
}

fn main_loop(runtime: &Runtime, ast: bool, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let command = Interface::new("dzen")?;
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        let lines = resolve(runtime, &string, ast);
        command.add_history_unique(string);
        // A slow code block may have been interrupted.
        if interrupted.swap(false, Ordering::SeqCst) {
            command.write_fmt(format_args!("{}\n", Style::new().bold().paint("Interrupted")))?;
            continue;
        }
        for line in lines {
            match line {
                Ok(line) => command.write_fmt(format_args!("{}\n", line))?,
                Err(error) => command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?,
            }
        }
    }
    Ok(())
}

