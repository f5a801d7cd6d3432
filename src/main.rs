//! Tsundoku CLI application entry point
//!
//! This is the main executable for the tsundoku reading-list tracker. It
//! provides a command-line interface for maintaining a persistent list of
//! books to read and for adding new ones from a bibliographic catalog.
//!
//! # Usage
//!
//! ```bash
//! # Show the reading list (default command)
//! tsundoku
//! tsundoku list
//!
//! # Search the catalog and pick a result to add
//! tsundoku search --title "React"
//! tsundoku search --author "Matsumoto" --max 5
//!
//! # Add result 2 of a search without prompting
//! tsundoku search --title "Rust" --pick 2
//!
//! # Edit the memo of book 3
//! tsundoku memo 3 "recommended by Aya"
//!
//! # Remove book 3
//! tsundoku remove 3 --yes
//!
//! # Quiet mode (tab-separated output, no prompts)
//! tsundoku -q list
//! ```
//!
//! # Configuration
//!
//! Stored in the user's config directory
//! (`~/.config/tsundoku/config.toml` on Linux); see `tsundoku config path`.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tsundoku::{
    TsundokuError,
    catalog::{GoogleBooksClient, SearchSession},
    cli::{Cli, Commands},
    commands,
    config::TsundokuConfig,
    store::Library,
};

type Result<T> = std::result::Result<T, TsundokuError>;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Log to stderr, `RUST_LOG` controls the filter, warnings by default
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = TsundokuConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config(cmd) = &command {
        return commands::run_config(cmd, &config);
    }

    let mut library = Library::open(config.slot_path()?)?;

    match command {
        Commands::List => {
            commands::run_list(&library, quiet);
            Ok(())
        }
        Commands::Search(args) => {
            let client = GoogleBooksClient::with_endpoint(config.catalog_endpoint())?;
            let max_results = args.max.unwrap_or(config.max_results);
            let mut session = SearchSession::new(client, max_results);

            commands::run_search(&mut library, &mut session, &args, quiet).await
        }
        Commands::Memo(args) => commands::run_memo(&mut library, &args, quiet),
        Commands::Remove(args) => commands::run_remove(&mut library, &args, quiet),
        // Handled before the library is opened.
        Commands::Config(_) => Ok(()),
    }
}
