//! `PenLine` CLI: run drawing commands and write SVG.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use penline_core::command::GRAMMAR;
use penline_core::error::Severity;
use penline_core::script::{check_commands, check_script, run_commands, run_script, ScriptReport};
use penline_core::Interpreter;
use penline_graphics::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use penline_graphics::Canvas;
use penline_svg::{render_with_options, RenderOptions};

#[derive(Parser)]
#[command(version, about = "Run PenLine drawing commands and write SVG")]
struct Cli {
    /// Script file with one command per line (reads stdin if omitted)
    file: Option<PathBuf>,

    /// Run a command instead of reading a file; may be repeated. Each value
    /// is exactly one command line
    #[arg(short = 'e', long = "eval", value_name = "COMMAND", conflicts_with = "file")]
    eval: Vec<String>,

    /// Only validate the commands; draw nothing and write no SVG
    #[arg(long)]
    check: bool,

    /// Output SVG file [default: <script name>.svg or drawing.svg]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Decimal places for SVG coordinates
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Width of outlines in the SVG
    #[arg(long, default_value_t = 1.0)]
    stroke_width: f64,

    /// Print every command form and exit
    #[arg(long)]
    grammar: bool,

    /// Log more (-v debug, -vv trace); otherwise `RUST_LOG` or warnings only
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.grammar {
        for sig in &GRAMMAR {
            println!("{}", sig.usage());
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(report) if report.has_errors() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<ScriptReport, CliError> {
    // `-e` values are taken one command each; a script is split into lines.
    let source = if cli.eval.is_empty() {
        Some(read_source(cli)?)
    } else {
        None
    };
    let commands = cli.eval.iter().map(String::as_str);

    if cli.check {
        let report = match source {
            Some(ref source) => check_script(source),
            None => check_commands(commands),
        };
        print_diagnostics(&report);
        if !report.has_errors() {
            println!("{} commands ok", report.accepted);
        }
        return Ok(report);
    }

    let mut interp = Interpreter::new(Canvas::new(cli.width, cli.height));
    let report = match source {
        Some(ref source) => run_script(&mut interp, source),
        None => run_commands(&mut interp, commands),
    };
    print_diagnostics(&report);

    write_output(cli, interp.surface())?;
    Ok(report)
}

fn read_source(cli: &Cli) -> Result<String, CliError> {
    if let Some(ref file) = cli.file {
        tracing::debug!(path = %file.display(), "reading script");
        return fs::read_to_string(file).map_err(|source| CliError::Read {
            path: file.clone(),
            source,
        });
    }
    tracing::debug!("reading script from standard input");
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(CliError::Stdin)?;
    Ok(source)
}

fn print_diagnostics(report: &ScriptReport) {
    for diag in &report.diagnostics {
        match diag.error.severity {
            Severity::Info => println!("{diag}"),
            Severity::Error => eprintln!("Error: {diag}"),
        }
    }
}

/// Where the SVG goes when `-o` is not given.
fn output_path(cli: &Cli) -> PathBuf {
    if let Some(ref output) = cli.output {
        return output.clone();
    }
    let stem = cli
        .file
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("drawing");
    PathBuf::from(format!("{stem}.svg"))
}

fn write_output(cli: &Cli, canvas: &Canvas) -> Result<(), CliError> {
    let opts = RenderOptions {
        precision: cli.precision,
        stroke_width: cli.stroke_width,
        ..RenderOptions::default()
    };
    let svg = render_with_options(canvas, &opts).to_string();

    let path = output_path(cli);
    tracing::debug!(path = %path.display(), bytes = svg.len(), "writing svg");
    fs::write(&path, svg).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}
