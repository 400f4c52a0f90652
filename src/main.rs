use std::path::PathBuf;

use argtext::context::Context;
use argtext::CommandLine;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing::Level;

/// Tokenize argument text and query typed values from it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Argument text to tokenize. Ignored when --file is given.
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,
    /// Read the argument text from a file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Key to look up, e.g. -Port
    #[arg(long, allow_hyphen_values = true)]
    key: Option<String>,
    /// Type to convert the value to
    #[arg(long, value_enum, default_value_t = Kind::String)]
    kind: Kind,
    /// Value returned when the key is missing or does not convert
    #[arg(long, allow_hyphen_values = true)]
    default: Option<String>,
    /// Print the token sequence
    #[arg(long)]
    tokens: bool,
    /// Answer every query with its default
    #[arg(long)]
    disabled: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    String,
    Int,
    Float,
    Bool,
}

#[derive(Serialize)]
struct Report<'a> {
    key: &'a str,
    present: bool,
    value: Value,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = Context::from_env();
    if args.disabled {
        ctx.enabled = false;
    }
    let mut cmd = CommandLine::new(ctx);

    // Load argument text.
    if let Some(path) = args.file.as_ref() {
        if let Err(e) = cmd.load_file(path) {
            eprintln!("Cannot read {}: {e}", path.display());
            std::process::exit(1);
        }
    } else {
        cmd.init(args.text.clone().unwrap_or_default());
    }

    if args.tokens {
        print_json(&cmd.tokens());
    }

    let Some(key) = args.key.as_deref() else {
        return;
    };
    let default = args.default.as_deref().unwrap_or("");
    let value = match args.kind {
        Kind::String => Value::from(cmd.get_string(key, default)),
        Kind::Int => {
            let d = parse_default(default, 0_i64);
            Value::from(cmd.get_int(key, d))
        }
        Kind::Float => {
            let d = parse_default(default, 0.0_f64);
            Value::from(cmd.get_float(key, d))
        }
        Kind::Bool => {
            let d = parse_default(default, false);
            Value::from(cmd.get_bool(key, d))
        }
    };

    print_json(&Report {
        key,
        present: cmd.has_key(key),
        value,
    });
}

fn parse_default<T: std::str::FromStr>(raw: &str, fallback: T) -> T {
    if raw.is_empty() {
        return fallback;
    }
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Invalid --default {raw:?}");
            std::process::exit(2);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Cannot encode output: {e}");
            std::process::exit(1);
        }
    }
}
