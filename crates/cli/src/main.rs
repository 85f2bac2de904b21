mod echo;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use lexiscore_core::{
    Analyzer, AnalyzerConfig, DEFAULT_CONTENT_SELECTOR, FetchConfig, HttpSource, LexiconPaths, LexiconStore,
    ReportFormat, RowEvent, StopwordMode, read_input,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score a batch of web articles for sentiment and readability
#[derive(Parser, Debug)]
#[command(name = "lexiscore")]
#[command(author = "Lexiscore Contributors")]
#[command(version)]
#[command(about = "Score web articles for sentiment and readability", long_about = None)]
struct Args {
    /// CSV file with URL_ID and URL columns
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<PathBuf>,

    /// Report file
    #[arg(short, long, default_value = "Output.csv", value_name = "FILE")]
    output: PathBuf,

    /// Report format (csv, json); inferred from the output extension when omitted
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<ReportFormat>,

    /// Directory holding StopWords/ and MasterDictionary/
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory receiving one <URL_ID>.txt per processed article
    #[arg(long, default_value = "text_files", value_name = "DIR")]
    text_dir: PathBuf,

    /// Do not write per-article text files
    #[arg(long)]
    no_text_files: bool,

    /// Keep stopwords in the token sequence
    #[arg(long)]
    keep_stopwords: bool,

    /// Skip lemmatization of tokens
    #[arg(long)]
    no_lemmatize: bool,

    /// CSS selector of the article body container
    #[arg(long, default_value = DEFAULT_CONTENT_SELECTOR, value_name = "SELECTOR")]
    content_selector: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn report_format(&self) -> ReportFormat {
        self.format
            .or_else(|| ReportFormat::from_path(&self.output))
            .unwrap_or_default()
    }

    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut builder = AnalyzerConfig::builder().lemmatize(!self.no_lemmatize);
        if self.keep_stopwords {
            builder = builder.stopword_mode(StopwordMode::Passthrough);
        }
        if !self.no_text_files {
            builder = builder.text_dir(&self.text_dir);
        }
        builder.build()
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig {
            timeout: self.timeout,
            content_selector: self.content_selector.clone(),
            ..Default::default()
        };
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "lexiscore_core=debug,lexiscore=debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let input = args.input.as_deref().context("INPUT is required")?;

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if args.verbose {
        echo::print_step(1, 4, "Loading lexicons");
    }

    let paths = LexiconPaths::discover(args.data_dir.as_deref());
    let lexicons = LexiconStore::load(&paths).context("Failed to load lexicons")?;

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Stopwords:".dimmed(),
            lexicons.stopwords().len().to_string().bright_white()
        );
        eprintln!(
            "  {} {} / {}\n",
            "Positive / negative:".dimmed(),
            lexicons.positive().len().to_string().bright_white(),
            lexicons.negative().len().to_string().bright_white()
        );
        echo::print_step(2, 4, &format!("Reading input {}", input.display().bright_white()));
    }

    let rows = read_input(input).with_context(|| format!("Failed to read input: {}", input.display()))?;
    let total = rows.len();

    if args.verbose {
        eprintln!("  {} {}\n", "Rows:".dimmed(), total.to_string().bright_white());
        echo::print_step(3, 4, &format!("Processing {} articles", total));
    }

    let source = HttpSource::new(args.fetch_config()).context("Failed to build HTTP client")?;
    let analyzer = Analyzer::with_config(lexicons, args.analyzer_config());

    let started = Instant::now();
    let verbose = args.verbose;
    let outcome = analyzer
        .run_with_progress(&source, &rows, |event| {
            if !verbose {
                return;
            }
            match event {
                RowEvent::Processed { index, record } => echo::print_record(index + 1, total, record),
                RowEvent::Skipped { index, failure } => echo::print_skipped(index + 1, total, failure),
            }
        })
        .await;
    let elapsed = started.elapsed();

    let format = args.report_format();
    if args.verbose {
        eprintln!();
        echo::print_step(4, 4, &format!("Writing {:?} report", format));
    }

    outcome
        .report
        .write(&args.output, format)
        .with_context(|| format!("Failed to write report: {}", args.output.display()))?;

    echo::print_summary(&outcome, total, elapsed);
    echo::print_success(&format!("Report written to {}", args.output.display().bright_white()));
    if let Some(dir) = &analyzer.config().text_dir {
        echo::print_info(&format!("Text files in {}", dir.display()));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "lexiscore", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            echo::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
