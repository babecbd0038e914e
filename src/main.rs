//! Wordlist Forge - targeted password wordlist generation
//!
//! Command-line front end: collects the biographical fields, checks caller
//! preconditions, and prints generation or analysis reports.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use wordlist_forge::{
    analysis::{analyze, ZxcvbnOracle},
    types::{GenerationConfig, GenerationRequest},
    wordlist::WordlistGenerator,
    ForgeError,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordlist-forge",
    version,
    about = "Targeted password wordlist generator and strength analyzer"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a wordlist from a name, date, and pet name
    Generate(GenerateArgs),
    /// Analyze the strength of a password
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Target name
    #[arg(long, default_value = "")]
    name: String,
    /// Date in YYYY-MM-DD format
    #[arg(long, default_value = "")]
    date: String,
    /// Pet name
    #[arg(long, default_value = "")]
    pet: String,
    /// Years back to append (5-50)
    #[arg(long, value_name = "YEARS")]
    years: Option<String>,
    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Password to analyze; prompted for when omitted
    password: Option<String>,
    /// Context hints such as name, date, pet (comma or space separated)
    #[arg(long, default_value = "")]
    context: String,
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        match err.downcast_ref::<ForgeError>() {
            Some(e) => eprintln!("{}", e.user_message()),
            None => eprintln!("❌ Error: {:#}", err),
        }
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GenerationConfig::from_env()?;

    match cli.command {
        Some(Command::Generate(args)) => run_generate(args, &config),
        Some(Command::Analyze(args)) => run_analyze(args),
        None => run_interactive(&config),
    }
}

/// Generate workflow for the `generate` subcommand
fn run_generate(args: GenerateArgs, config: &GenerationConfig) -> anyhow::Result<()> {
    let year_window = resolve_year_window(args.years.as_deref(), config)?;
    let output = args.output.unwrap_or_else(|| config.output.clone());
    let request = GenerationRequest::new(&args.name, &args.date, &args.pet, year_window, output);

    generate_wordlist(&request, config, args.json)
}

/// Analyze workflow for the `analyze` subcommand
fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    analyze_password(&password, &args.context, args.json)
}

/// Interactive workflow when no subcommand is given
fn run_interactive(config: &GenerationConfig) -> anyhow::Result<()> {
    println!("🔐 Wordlist Forge - password analysis & wordlist generation");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    let choice = Select::new(
        "What would you like to do?",
        vec!["Wordlist Generation", "Password Analysis"],
    )
    .prompt()
    .context("failed to read selection")?;

    if choice == "Password Analysis" {
        let password = prompt_password()?;
        let context = Text::new("User Inputs (Context - optional):")
            .with_help_message("e.g., name, date, pet")
            .prompt()
            .context("failed to read context")?;
        return analyze_password(&password, &context, false);
    }

    let name = Text::new("Target Name:").prompt().context("failed to read name")?;
    let date = Text::new("Date (YYYY-MM-DD):")
        .with_help_message("leave empty to skip")
        .prompt()
        .context("failed to read date")?;
    let pet = Text::new("Pet Name:").prompt().context("failed to read pet name")?;

    let default_window = config.year_window.to_string();
    let years = Text::new("Years Back to Append:")
        .with_default(&default_window)
        .with_help_message("e.g., 10 means last 10 years")
        .prompt()
        .context("failed to read year range")?;
    let year_window = resolve_year_window(Some(&years), config)?;

    let default_output = config.output.to_string_lossy().to_string();
    let output = Text::new("Output File:")
        .with_default(&default_output)
        .prompt()
        .context("failed to read output path")?;

    let request = GenerationRequest::new(&name, &date, &pet, year_window, output.trim());
    generate_wordlist(&request, config, false)
}

/// Parse the year window from user text, falling back to the configured default
fn resolve_year_window(text: Option<&str>, config: &GenerationConfig) -> wordlist_forge::Result<u32> {
    match text {
        Some(text) => config.parse_year_window(text),
        None => {
            config.check_year_window(config.year_window)?;
            Ok(config.year_window)
        }
    }
}

fn generate_wordlist(
    request: &GenerationRequest,
    config: &GenerationConfig,
    json: bool,
) -> anyhow::Result<()> {
    request.ensure_has_input()?;

    let generator = WordlistGenerator::with_config(config.clone());
    let summary = generator.generate(request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.report());
    }
    Ok(())
}

fn analyze_password(password: &str, context: &str, json: bool) -> anyhow::Result<()> {
    let report = analyze(&ZxcvbnOracle::new(), password, context)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}

fn prompt_password() -> anyhow::Result<String> {
    Password::new("Enter Password:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("failed to read password")
}
