use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use rusty_robots::console::{JsonReport, RulesPrinter};
use encoding_rs::Encoding;
use rusty_robots::robots::{ParserConfig, ValueCase, encoding_for_label};
use rusty_robots::source::{DEFAULT_USER_AGENT, LoaderConfig, MultiLoader, SourceLocation};
use std::io::stdout;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    /// Site URLs whose /robots.txt should be fetched
    #[arg(long, value_name = "URL")]
    url: Vec<Url>,

    /// Local robots.txt files
    #[arg(long, value_name = "PATH")]
    file: Vec<PathBuf>,

    /// Only show the rules for this agent
    #[arg(long)]
    agent: Option<String>,

    /// User-Agent header sent when fetching
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Keep the original case of directive values
    #[arg(long)]
    preserve_case: bool,

    /// Print the normalized text instead of the rules; with JSON, add it to each report
    #[arg(long)]
    raw: bool,

    /// Decode input with this encoding (e.g. windows-1251) instead of detecting it
    #[arg(long, value_name = "LABEL", value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn parse_encoding(label: &str) -> Result<&'static Encoding, String> {
    encoding_for_label(label).ok_or_else(|| format!("unknown encoding '{}'", label))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rusty_robots=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn main_impl(args: &CommandLineArgs) -> anyhow::Result<()> {
    if args.url.is_empty() && args.file.is_empty() {
        anyhow::bail!("Nothing to parse, pass --url or --file");
    }

    let value_case = if args.preserve_case {
        ValueCase::Preserve
    } else {
        ValueCase::Lowercase
    };
    let loader_config = LoaderConfig::new(args.user_agent.clone(), ParserConfig::new(value_case).with_encoding(args.encoding));

    // Set up a shutdown signal handler
    let shutdown_notify = Arc::new(tokio::sync::Notify::new());
    {
        let shutdown_notify = Arc::clone(&shutdown_notify);
        ctrlc::set_handler(move || {
            eprintln!("Received Ctrl+C, shutting down...");
            shutdown_notify.notify_waiters();
        })?;
    }

    let mut multi_loader = MultiLoader::new(shutdown_notify, loader_config);
    for url in &args.url {
        multi_loader.add_location(SourceLocation::Url(url.clone()));
    }
    for path in &args.file {
        multi_loader.add_location(SourceLocation::Path(path.clone()));
    }
    let results = multi_loader.run().await?;

    let agent = args.agent.as_deref();
    let styled = stdout().is_tty();
    let mut printer = RulesPrinter::new(stdout(), styled);
    let mut json_reports = Vec::new();
    let mut failures = 0;
    for result in &results {
        let source = result.location.to_string();
        match &result.robots {
            Ok(robots) => match args.format {
                OutputFormat::Text if args.raw => printer.print_raw(&source, robots)?,
                OutputFormat::Text => printer.print(&source, robots, agent)?,
                OutputFormat::Json => {
                    let mut report = JsonReport::new(&source, robots, agent);
                    if args.raw {
                        report = report.with_raw_content(robots);
                    }
                    json_reports.push(serde_json::to_value(report)?)
                }
            },
            Err(e) => {
                failures += 1;
                eprintln!("Error: {}: {}", source, e);
            }
        }
    }

    if let OutputFormat::Json = args.format {
        serde_json::to_writer_pretty(stdout(), &json_reports)?;
        println!();
    }

    if failures > 0 {
        anyhow::bail!("{} of {} sources could not be loaded", failures, results.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();
    init_tracing();

    if let Err(e) = main_impl(&args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
