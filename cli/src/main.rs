use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use yard::Token;

use config::{ColorChoice, Config, Emit, OutputFormat};
use display::DisplayUserFacing;

mod config;
mod display;
mod json;

#[derive(Parser)]
#[command(name = "yard", version, about)]
struct Args {
    /// The output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
    /// What to print for each expression
    #[arg(short, long, global = true, value_enum)]
    emit: Option<Emit>,
    /// When to use colored output
    #[arg(long, global = true, value_enum)]
    color: Option<ColorChoice>,
    /// Fixed number of decimals for printed values
    #[arg(long, global = true)]
    precision: Option<usize>,
    /// Config file, defaults to `<config dir>/yard/config.toml`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    /// An expression that will be evaluated
    #[arg(last = true)]
    expression: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate every non-blank line of a file
    #[command(visible_alias = "r")]
    Run { path: PathBuf },
    /// Tokenize and convert every non-blank line of a file, without evaluating
    #[command(visible_alias = "c")]
    Check { path: PathBuf },
    /// Start an interactive repl
    #[command(visible_alias = "i")]
    Interactive,
}

struct Settings {
    format: OutputFormat,
    emit: Emit,
    precision: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Eval,
    Check,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Value(f64),
    Tokens(Vec<Token>),
    Postfix(Vec<Token>),
    Checked,
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("YARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<bool> {
    let config = Config::load(args.config.as_deref())?;
    args.color.unwrap_or(config.color).apply();

    let settings = Settings {
        format: args.format.unwrap_or(config.format),
        emit: args.emit.unwrap_or(config.emit),
        precision: args.precision.or(config.precision),
    };

    if args.command.is_some() && !args.expression.is_empty() {
        Args::command()
            .error(
                clap::error::ErrorKind::ArgumentConflict,
                "An expression can't be combined with a command",
            )
            .exit();
    }

    match args.command {
        Some(Command::Run { path }) => process_file(&settings, &path, Mode::Eval),
        Some(Command::Check { path }) => process_file(&settings, &path, Mode::Check),
        Some(Command::Interactive) => repl(&settings),
        None if args.expression.is_empty() => Args::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "Missing an expression or a command",
            )
            .exit(),
        None => {
            let input = args.expression.join(" ");
            Ok(process(&settings, &input, None, Mode::Eval))
        }
    }
}

fn repl(settings: &Settings) -> anyhow::Result<bool> {
    if settings.format == OutputFormat::Pretty {
        println!("{}", "Started interactive repl".blue().bold());
    }

    let mut output = io::stdout();
    let input = io::stdin();
    let mut buf = String::new();
    loop {
        buf.clear();

        if settings.format == OutputFormat::Pretty {
            print!("{}", " >> ".blue().bold());
            let _ = output.flush();
        }
        let read = input.read_line(&mut buf).context("Error reading line")?;
        if read == 0 {
            break;
        }

        match buf.trim() {
            "exit" => break,
            "clear" => {
                print!("\x1b[1;1H\x1B[2J");
                let _ = output.flush();
            }
            "" => (),
            line => {
                process(settings, line, None, Mode::Eval);
            }
        }
    }

    Ok(true)
}

fn process_file(settings: &Settings, path: &Path, mode: Mode) -> anyhow::Result<bool> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading file: {}", path.display()))?;
    tracing::info!(path = %path.display(), ?mode, "processing file");

    let mut success = true;
    for (i, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        success &= process(settings, line, Some(i + 1), mode);
    }

    Ok(success)
}

/// Runs `input` through the pipeline and prints the outcome, returns whether it succeeded.
fn process(settings: &Settings, input: &str, line: Option<usize>, mode: Mode) -> bool {
    let result = match (mode, settings.emit) {
        (Mode::Check, _) => postfix(input).map(|_| Output::Checked),
        (Mode::Eval, Emit::Value) => yard::calculate(input).map(Output::Value),
        (Mode::Eval, Emit::Tokens) => yard::tokenize(input).map(Output::Tokens),
        (Mode::Eval, Emit::Postfix) => postfix(input).map(Output::Postfix),
    };

    match settings.format {
        OutputFormat::Pretty => print_pretty(settings, input, line, &result),
        OutputFormat::Json => match serde_json::to_string(&json::Report::new(line, &result)) {
            Ok(s) => println!("{s}"),
            Err(e) => tracing::error!("Error serializing report: {e}"),
        },
    }

    result.is_ok()
}

fn postfix(input: &str) -> yard::Result<Vec<Token>> {
    let tokens = yard::tokenize(input)?;
    yard::to_postfix(&tokens)
}

fn print_pretty(
    settings: &Settings,
    input: &str,
    line: Option<usize>,
    result: &yard::Result<Output>,
) {
    match result {
        Ok(Output::Value(v)) => println!("{}", format_val(*v, settings.precision)),
        Ok(Output::Tokens(t) | Output::Postfix(t)) => {
            let mut buf = String::new();
            let _ = yard::fmt_tokens(&mut buf, t);
            println!("{buf}");
        }
        Ok(Output::Checked) => (),
        Err(e) => println!("{}\n", e.display(input).first_line(line.unwrap_or(1))),
    }
}

fn format_val(val: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{val:.p$}"),
        None => format!("{val}"),
    }
}
