use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use amani_catalog::{Campaign, CatalogError, ContentStore, RecordKind, Searchable, Session, Tip};
use command::{
    BrowseOutput, CategoriesOutput, CommandAction, CommandRequest, CommandResponse, KindFilter,
    SearchOutput, SearchPayload, SubmitOutput, SubmitPayload, ValidateOutput,
};

mod command;
mod config;

#[derive(Parser)]
#[command(name = "amani")]
#[command(about = "Community content search for the Amani Connect platform", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,

    /// Load the content store from a JSON file instead of the built-in samples
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Config file path (default: ./amani.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search tips, campaigns, and sessions
    Search(SearchArgs),

    /// List the category filter options
    Categories(CategoriesArgs),

    /// Show every catalog with engagement counts
    Browse(BrowseArgs),

    /// Validate a submission draft and log it
    Submit(SubmitArgs),

    /// Check catalog invariants (unique ids, parseable dates)
    Validate(ValidateArgs),

    /// Execute a raw JSON command request
    Command(CommandArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Search query (matched against titles, text, and tags)
    query: String,

    /// Category constraint ("all" means unconstrained)
    #[arg(long, short = 'c', default_value = "all")]
    category: String,

    /// Restrict the search to one record kind
    #[arg(long, short = 'k', value_enum, default_value_t = KindFlag::All)]
    kind: KindFlag,

    /// Maximum number of results per catalog
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CategoriesArgs {
    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BrowseArgs {
    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SubmitArgs {
    /// Record kind: tip, campaign, session
    #[arg(long, short = 'k')]
    kind: String,

    /// Inline JSON draft (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    data: Option<String>,

    /// Path to a file containing the JSON draft
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ValidateArgs {
    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CommandArgs {
    /// Inline JSON payload (mutually exclusive with --file)
    #[arg(long, conflicts_with = "file")]
    json: Option<String>,

    /// Path to file containing JSON payload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Pretty-print JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum KindFlag {
    All,
    Tips,
    Campaigns,
    Sessions,
}

impl KindFlag {
    const fn as_domain(self) -> KindFilter {
        match self {
            KindFlag::All => KindFilter::All,
            KindFlag::Tips => KindFilter::Tips,
            KindFlag::Campaigns => KindFilter::Campaigns,
            KindFlag::Sessions => KindFilter::Sessions,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean
    // for JSON parsing).
    let json_output = match &cli.command {
        Commands::Search(args) => args.json,
        Commands::Categories(args) => args.json,
        Commands::Browse(args) => args.json,
        Commands::Submit(args) => args.json,
        Commands::Validate(args) => args.json,
        Commands::Command(_) => true,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = config::CliConfig::load(cli.config.as_deref())?;
    let store_path = cli.store.as_deref().or(config.store.as_deref());
    let store = load_store(store_path)?;

    match cli.command {
        Commands::Search(args) => run_search(args, &store, &config),
        Commands::Categories(args) => run_categories(args, &store),
        Commands::Browse(args) => run_browse(args, &store),
        Commands::Submit(args) => run_submit(args, &store),
        Commands::Validate(args) => run_validate(args, &store),
        Commands::Command(args) => run_command(args, &store),
    }
}

fn load_store(path: Option<&Path>) -> Result<ContentStore> {
    match path {
        Some(path) => ContentStore::from_json_file(path)
            .with_context(|| format!("Failed to load content store {}", path.display())),
        None => Ok(ContentStore::sample()),
    }
}

fn run_search(args: SearchArgs, store: &ContentStore, config: &config::CliConfig) -> Result<()> {
    let payload = SearchPayload {
        query: args.query.clone(),
        category: args.category.clone(),
        kind: args.kind.as_domain(),
        limit: args.limit.or(config.default_limit),
    };
    let request = CommandRequest {
        action: CommandAction::Search,
        payload: serde_json::to_value(payload)?,
    };

    let response = command::execute(request, store);
    if args.json {
        return print_json(&response, true);
    }
    if response.is_error() {
        fail(&response);
    }

    let output: SearchOutput =
        serde_json::from_value(response.data).context("Invalid search output")?;
    eprintln!(
        "Found {} results for '{}' (category: {})",
        output.total, output.query, output.category
    );
    eprintln!();
    render_tips(&output.tips);
    render_campaigns(&output.campaigns);
    render_sessions(&output.sessions);
    Ok(())
}

fn run_categories(args: CategoriesArgs, store: &ContentStore) -> Result<()> {
    let request = CommandRequest {
        action: CommandAction::Categories,
        payload: serde_json::Value::Null,
    };

    let response = command::execute(request, store);
    if args.json {
        return print_json(&response, true);
    }
    if response.is_error() {
        fail(&response);
    }

    let output: CategoriesOutput =
        serde_json::from_value(response.data).context("Invalid categories output")?;
    for category in &output.categories {
        println!("{category}");
    }
    Ok(())
}

fn run_browse(args: BrowseArgs, store: &ContentStore) -> Result<()> {
    let request = CommandRequest {
        action: CommandAction::Browse,
        payload: serde_json::Value::Null,
    };

    let response = command::execute(request, store);
    if args.json {
        return print_json(&response, true);
    }
    if response.is_error() {
        fail(&response);
    }

    let output: BrowseOutput =
        serde_json::from_value(response.data).context("Invalid browse output")?;
    eprintln!("{} records", output.total);
    eprintln!();
    render_tips(&output.tips);
    render_campaigns(&output.campaigns);
    render_sessions(&output.sessions);
    Ok(())
}

fn run_submit(args: SubmitArgs, store: &ContentStore) -> Result<()> {
    let kind = RecordKind::from_name(&args.kind)
        .ok_or_else(|| CatalogError::UnknownKind(args.kind.clone()))?;
    let raw = read_draft(&args)?;
    let data: serde_json::Value = serde_json::from_str(&raw).context("Invalid JSON draft")?;

    let payload = SubmitPayload { kind, data };
    let request = CommandRequest {
        action: CommandAction::Submit,
        payload: serde_json::to_value(payload)?,
    };

    let response = command::execute(request, store);
    if args.json {
        return print_json(&response, true);
    }
    if response.is_error() {
        fail(&response);
    }

    let output: SubmitOutput =
        serde_json::from_value(response.data).context("Invalid submit output")?;
    eprintln!("Accepted {} submission '{}'", output.kind, output.title);
    Ok(())
}

fn run_validate(args: ValidateArgs, store: &ContentStore) -> Result<()> {
    let request = CommandRequest {
        action: CommandAction::Validate,
        payload: serde_json::Value::Null,
    };

    let response = command::execute(request, store);
    if args.json {
        return print_json(&response, true);
    }
    if response.is_error() {
        fail(&response);
    }

    let output: ValidateOutput =
        serde_json::from_value(response.data).context("Invalid validate output")?;
    eprintln!(
        "Store OK: {} tips, {} campaigns, {} sessions, {} categories",
        output.tips, output.campaigns, output.sessions, output.categories
    );
    Ok(())
}

fn run_command(args: CommandArgs, store: &ContentStore) -> Result<()> {
    let raw = read_payload(&args)?;
    let request: CommandRequest =
        serde_json::from_str(&raw).context("Invalid JSON passed to --json/--file")?;

    let response = command::execute(request, store);
    print_json(&response, args.pretty)
}

fn read_payload(args: &CommandArgs) -> Result<String> {
    if let Some(raw) = &args.json {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read JSON from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Command request is empty. Provide --json, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}

fn read_draft(args: &SubmitArgs) -> Result<String> {
    if let Some(raw) = &args.data {
        return Ok(raw.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read draft from {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read draft from stdin")?;

    if buffer.trim().is_empty() {
        anyhow::bail!("Submission draft is empty. Provide --data, --file, or pipe JSON via stdin.");
    }

    Ok(buffer)
}

fn print_json(response: &CommandResponse, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{output}");

    if response.is_error() {
        std::process::exit(1);
    }
    Ok(())
}

fn fail(response: &CommandResponse) -> ! {
    eprintln!(
        "Error: {}",
        response.message.as_deref().unwrap_or("Unknown error")
    );
    std::process::exit(1);
}

fn engagement_line<T: Searchable>(record: &T) -> String {
    let engagement = record.engagement();
    format!(
        "{} views, {} {}",
        engagement.views, engagement.secondary, engagement.secondary_label
    )
}

fn render_tips(tips: &[Tip]) {
    if tips.is_empty() {
        return;
    }
    println!("Safety Tips ({})", tips.len());
    for tip in tips {
        println!("  {} [{}]", tip.title, tip.category);
        println!("    {}", tip.content);
        println!(
            "    tags: {} | {} | {}",
            tip.tags.join(", "),
            engagement_line(tip),
            tip.author
        );
    }
    println!();
}

fn render_campaigns(campaigns: &[Campaign]) {
    if campaigns.is_empty() {
        return;
    }
    println!("Campaigns ({})", campaigns.len());
    for campaign in campaigns {
        println!("  {} [{}]", campaign.title, campaign.campaign_type);
        println!("    {}", campaign.description);
        println!(
            "    {} to {} | {} | {}",
            campaign.start_date,
            campaign.end_date,
            engagement_line(campaign),
            campaign.author
        );
    }
    println!();
}

fn render_sessions(sessions: &[Session]) {
    if sessions.is_empty() {
        return;
    }
    println!("Live Sessions ({})", sessions.len());
    for session in sessions {
        println!("  {} [{}]", session.title, session.topic);
        println!("    {}", session.description);
        println!(
            "    {} at {} ({}) | {} | {}",
            session.scheduled_date,
            session.scheduled_time,
            session.duration,
            engagement_line(session),
            session.facilitator
        );
    }
    println!();
}
