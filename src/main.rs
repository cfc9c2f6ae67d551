use clap::{Args, Parser, Subcommand};
use fieldseek::{input, render};
use fieldseek_core::config::Config;
use fieldseek_core::{extract_fields, search, ExtractOptions, SearchOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldseek", about = "Rank JSON records against a keyword query")]
struct Cli {
    /// Write debug logs to /tmp/fieldseek-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/fieldseek/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank records by how well their text fields match QUERY.
    Search(SearchArgs),
    /// Print the labeled text fragments extracted from each record.
    Fields(InputArgs),
}

#[derive(Args)]
struct InputArgs {
    /// JSON array, single JSON value or JSON Lines file; `-` or absent reads stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip string arrays.
    #[arg(long)]
    no_collections: bool,

    /// Skip fields of nested objects.
    #[arg(long)]
    no_nested: bool,
}

impl InputArgs {
    fn extract_options(&self, base: ExtractOptions) -> ExtractOptions {
        ExtractOptions {
            include_collections: base.include_collections && !self.no_collections,
            include_nested: base.include_nested && !self.no_nested,
        }
    }
}

#[derive(Args)]
struct SearchArgs {
    /// Query words; several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    #[command(flatten)]
    input: InputArgs,

    /// Match case exactly.
    #[arg(short = 'c', long, overrides_with = "ignore_case")]
    case_sensitive: bool,

    /// Fold case even when the config asks for exact matching.
    #[arg(long, overrides_with = "case_sensitive")]
    ignore_case: bool,

    /// Maximum number of records to print.
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Print a JSON report instead of text.
    #[arg(long)]
    json: bool,

    /// Remove padding before punctuation in matched text.
    #[arg(long)]
    tidy: bool,
}

impl SearchArgs {
    /// The flag given last wins; without either flag the config decides.
    fn case_sensitive(&self, configured: bool) -> bool {
        if self.case_sensitive {
            true
        } else if self.ignore_case {
            false
        } else {
            configured
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fieldseek-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fieldseek debug log started, tail -f /tmp/fieldseek-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };

    match cli.command {
        Command::Search(args) => run_search(args, &config),
        Command::Fields(args) => run_fields(args, &config),
    }
}

fn run_search(args: SearchArgs, config: &Config) -> anyhow::Result<()> {
    let mut options = SearchOptions::from(&config.search);
    options.case_sensitive = args.case_sensitive(options.case_sensitive);
    if let Some(max_results) = args.max_results {
        options.max_results = max_results;
    }
    options.extract = args.input.extract_options(options.extract);

    let records = input::load_records(args.input.input.as_deref())?;
    let query = args.query.join(" ");
    let result = search(&query, &records, &options)?;

    if args.json {
        println!("{}", render::render_json(&query, &result)?);
    } else {
        let mut render_options = render::RenderOptions::from(&config.output);
        render_options.tidy |= args.tidy;
        print!("{}", render::render_text(&result, &render_options));
    }
    Ok(())
}

fn run_fields(args: InputArgs, config: &Config) -> anyhow::Result<()> {
    let defaults = SearchOptions::from(&config.search).extract;
    let options = args.extract_options(defaults);
    let records = input::load_records(args.input.as_deref())?;
    for (index, record) in records.iter().enumerate() {
        print!("{}", render::render_fragments(index, &extract_fields(record, options)));
    }
    Ok(())
}
