//! letter: parse Letter programs from the command line.
//!
//! Usage:
//!   letter [options] [file...]
//!
//! Prints each input as a JSON AST, an s-expression, formatted source or a
//! token list. Inputs are parsed in parallel; output keeps argument order.

mod render;

use clap::{ArgAction, Parser as ClapParser};
use letter_options::{find_config, parse_config_file, ConfigError, LetterConfig, OutputFormat, ResolvedOptions};
use miette::{IntoDiagnostic, Report, WrapErr};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "letter", about = "Parse Letter programs into ASTs, s-expressions or formatted source", version)]
struct Cli {
    /// Letter files to parse. `-` reads standard input.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Parse SOURCE instead of files.
    #[arg(short = 'e', long = "eval", value_name = "SOURCE", conflicts_with = "files")]
    eval: Option<String>,

    /// Output format: ast, sexp, source or tokens.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Indentation width for `source` output.
    #[arg(long = "indent", value_name = "WIDTH")]
    indent_width: Option<usize>,

    /// Path to letter.json.
    #[arg(short = 'p', long = "project", value_name = "CONFIG")]
    project: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config values given as flags.
    fn overrides(&self) -> LetterConfig {
        LetterConfig {
            output: self.format,
            pretty: self.compact.then_some(false),
            indent_width: self.indent_width,
            files: None,
        }
    }
}

/// One thing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Inline(_) => "<eval>".to_string(),
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> std::io::Result<String> {
        match self {
            Input::Inline(source) => Ok(source.clone()),
            Input::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            }
            Input::File(path) => std::fs::read_to_string(path),
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    process::exit(run(&cli));
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: &Cli) -> i32 {
    let start = Instant::now();

    let (config, base_dir) = match load_config(cli) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{:?}", Report::new(err));
            return 2;
        }
    };
    let options = config.merged_with(cli.overrides()).resolve(base_dir.as_deref());
    debug!(?options, "resolved options");

    let inputs = collect_inputs(cli, &options);
    if inputs.is_empty() {
        print_error("no input files; pass FILE, -e SOURCE or list files in letter.json");
        return 2;
    }

    let outcomes: Vec<miette::Result<String>> = inputs.par_iter().map(|input| process_input(input, &options)).collect();

    let mut failed = 0usize;
    for outcome in outcomes {
        match outcome {
            Ok(text) => print!("{}", text),
            Err(report) => {
                failed += 1;
                eprintln!("{:?}", report);
            }
        }
    }

    let elapsed = start.elapsed();
    info!(inputs = inputs.len(), failed, elapsed_ms = elapsed.as_millis() as u64, "done");

    if failed > 0 {
        let summary = format!("Found {} error{}.", failed, if failed == 1 { "" } else { "s" });
        if is_terminal() {
            eprintln!("{}{}{}", RED, summary, RESET);
        } else {
            eprintln!("{}", summary);
        }
        return 1;
    }

    if is_terminal() && inputs.len() > 1 {
        eprintln!("{}Parsed {} inputs in {:.2}s.{}", GRAY, inputs.len(), elapsed.as_secs_f64(), RESET);
    }
    0
}

/// Load the config named by `-p`, or the nearest `letter.json` above the
/// working directory. Returns the config and the directory it came from.
fn load_config(cli: &Cli) -> Result<(LetterConfig, Option<PathBuf>), ConfigError> {
    let path = match &cli.project {
        Some(project) if project.is_dir() => Some(project.join(letter_options::CONFIG_FILE_NAME)),
        Some(project) => Some(project.clone()),
        None => std::env::current_dir().ok().and_then(find_config),
    };

    match path {
        Some(path) => {
            let config = parse_config_file(&path)?;
            let base_dir = path.parent().map(Path::to_path_buf);
            Ok((config, base_dir))
        }
        None => Ok((LetterConfig::default(), None)),
    }
}

fn collect_inputs(cli: &Cli, options: &ResolvedOptions) -> Vec<Input> {
    if let Some(source) = &cli.eval {
        return vec![Input::Inline(source.clone())];
    }
    if !cli.files.is_empty() {
        return cli
            .files
            .iter()
            .map(|file| if file == "-" { Input::Stdin } else { Input::File(PathBuf::from(file)) })
            .collect();
    }
    options.files.iter().cloned().map(Input::File).collect()
}

fn process_input(input: &Input, options: &ResolvedOptions) -> miette::Result<String> {
    let name = input.name();
    let source = input
        .read()
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read '{}'", name))?;
    debug!(input = %name, bytes = source.len(), "parsing");
    render::render(&name, &source, options)
}

fn print_error(msg: &str) {
    if is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
