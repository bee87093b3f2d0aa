use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facts::output::{self, FactAnswer, MatchedText};
use facts::utils::AppConfig;
use facts::{FactsError, Library, QueryEngine};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "facts")]
#[command(about = "Serve random facts by keyword")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory of fact files
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Config file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log skipped files and load details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Random fact for an exact keyword
    Get {
        /// Keyword to look up (case-insensitive)
        keyword: String,
    },
    /// Random fact for the first keyword found in a text
    Find {
        /// Free text to search
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
    /// List all keyword sets
    List,
    /// Show load statistics
    Stats,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status 1 for a query with no answer, 2 for any other failure
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<FactsError>() {
            Some(err) if err.is_query_error() => {
                eprintln!("{}", err);
                ExitCode::from(1)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::from(2)
            }
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let app_config = AppConfig::load(cli.config.as_deref())?;
    let dir = app_config.resolve_facts_dir(cli.dir);
    let library = Library::load_with_config(&dir, app_config.library)
        .with_context(|| format!("Failed to load facts from {}", dir.display()))?;
    let color = !cli.no_color;

    match cli.command {
        Commands::Get { keyword } => {
            let mut engine = QueryEngine::new(&library);
            let fact = engine.get_fact(&keyword)?;
            let keywords = library
                .match_keyword(&keyword)
                .context("matched keyword set disappeared")?;
            let answer = FactAnswer {
                keywords,
                fact,
                matched: None,
            };
            emit(&answer, cli.json, color)?;
        }
        Commands::Find { text } => {
            let text = text.join(" ");
            let mut engine = QueryEngine::new(&library);
            let fact = engine.find_fact(&text)?;
            let (keywords, (start, end)) = library
                .locate_text(&text)
                .context("matched keyword set disappeared")?;
            let answer = FactAnswer {
                keywords,
                fact,
                matched: Some(MatchedText {
                    text: &text,
                    start,
                    end,
                }),
            };
            emit(&answer, cli.json, color)?;
        }
        Commands::List => {
            let summaries = output::keyword_summaries(&library);
            if cli.json {
                output::print_json(&summaries)?;
            } else {
                output::print_keyword_sets(&summaries, color)?;
            }
        }
        Commands::Stats => {
            let stats = library.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&library, &stats)?;
            }
        }
    }

    Ok(())
}

fn emit(answer: &FactAnswer<'_>, json: bool, color: bool) -> Result<()> {
    if json {
        output::print_json(answer)?;
    } else {
        output::print_answer(answer, color)?;
    }
    Ok(())
}
