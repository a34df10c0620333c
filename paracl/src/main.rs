//! ParaCL Interpreter CLI

use clap::{Parser, Subcommand};
use paracl::{Diagnostic, SourceText};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

#[derive(Parser)]
#[command(name = "paracl", version, about = "ParaCL Interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a ParaCL program, reading `?` from stdin
    Run {
        /// Source file to run
        file: PathBuf,
        /// Report errors with labelled source snippets
        #[arg(long)]
        pretty: bool,
    },
    /// Parse and dump AST as JSON (debug)
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
    /// Tokenize and dump tokens (debug)
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
    /// Render the AST as a Graphviz digraph
    Dot {
        /// Source file to render
        file: PathBuf,
        /// Output path, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

static TRACING_INIT: Once = Once::new();

/// Enable with `RUST_LOG=paracl=debug` or `RUST_LOG=paracl=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let (file, pretty) = match &cli.command {
        Command::Run { file, pretty } => (file.clone(), *pretty),
        Command::Parse { file } | Command::Tokens { file } | Command::Dot { file, .. } => {
            (file.clone(), false)
        }
    };

    let source = match SourceText::read(&file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Command::Run { .. } => run_file(&source),
        Command::Parse { .. } => parse_file(&source),
        Command::Tokens { .. } => tokenize_file(&source),
        Command::Dot { output, .. } => dot_file(&source, output.as_deref()),
    };

    if let Err(e) = result {
        match e.downcast_ref::<Diagnostic>() {
            Some(diag) if pretty => {
                let filename = file.display().to_string();
                if paracl::error::report_pretty(&filename, &source, diag).is_err() {
                    eprintln!("{}", diag.render(&source));
                }
            }
            Some(diag) => eprintln!("{}", diag.render(&source)),
            None => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn run_file(source: &SourceText) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    paracl::run_source(source, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn parse_file(source: &SourceText) -> Result<(), Box<dyn std::error::Error>> {
    let program = paracl::parse_source(source)?;
    println!("{}", serde_json::to_string_pretty(&program)?);
    Ok(())
}

fn tokenize_file(source: &SourceText) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = paracl::lexer::tokenize(source)?;
    for (tok, loc) in &tokens {
        println!("{tok:?} @ {loc}");
    }
    Ok(())
}

fn dot_file(source: &SourceText, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let program = paracl::parse_source(source)?;
    let dot = paracl::dot::to_dot(&program.arena, program.root);
    match output {
        Some(path) => std::fs::write(path, dot)?,
        None => std::io::stdout().write_all(dot.as_bytes())?,
    }
    Ok(())
}
