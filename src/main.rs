mod analysis;
mod api;
mod config;
mod dataset;
mod display;
mod error;
mod icons;
mod session;

use analysis::champions::{champion_set, resolve_champion};
use analysis::views::{ChampionView, SortKey};
use api::client::CatalogClient;
use clap::Parser;
use config::Config;
use dataset::ingest::ingest_paths;
use display::output::{
    display_champion_list, display_champion_view, display_info, display_success, display_warning,
};
use icons::catalog::Catalogs;
use indicatif::ProgressBar;
use session::Session;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Arena Lens")]
#[command(about = "Explore Arena item and augment statistics per champion", long_about = None)]
struct Args {
    /// CSV files; the name decides the dataset (prismatic, legendary, augment, voucher)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Champion to show (exact name, or any part of it)
    #[arg(short, long)]
    champion: Option<String>,

    /// Minimum sample size per row (default: 10)
    #[arg(short = 'n', long, default_value = "10")]
    min_n: u32,

    /// Sort rows by win rate or by number of games
    #[arg(short, long, value_enum, default_value_t = SortKey::WinRate)]
    sort: SortKey,

    /// Rows shown per table, 0 for all (default: 15)
    #[arg(short, long, default_value = "15")]
    top: usize,

    /// Skip downloading icon catalogs
    #[arg(long)]
    offline: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("arena_lens=debug,info")
    } else {
        EnvFilter::new("arena_lens=info,warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(args);
}

fn run(args: Args) {
    let session = Arc::new(Session::new());

    // Icons load in the background while the files are read.
    let catalog_loader = if args.offline {
        display_info("Offline mode: icons will show as placeholders");
        None
    } else {
        Some(spawn_catalog_load(Arc::clone(&session)))
    };

    display_info(&format!("Reading {} file(s)...", args.files.len()));
    let pb = ProgressBar::new(args.files.len() as u64);
    let token = session.begin_ingest();
    let datasets = ingest_paths(&args.files, |_| pb.inc(1));
    pb.finish_and_clear();
    if datasets.is_empty() {
        display_warning("No rows loaded: name files after their dataset (prismatic, legendary, augment, voucher)");
    }
    session.commit_datasets(token, datasets);

    if let Some(loader) = catalog_loader {
        if loader.join().is_err() {
            tracing::warn!("Icon catalog loader stopped unexpectedly");
        }
    }

    let datasets = session.datasets();
    let catalogs = session.catalogs();
    let champions = champion_set(&datasets);
    display_success(&format!(
        "Loaded {} prismatic, {} legendary, {} augment and {} voucher rows for {} champions",
        datasets.prismatic.len(),
        datasets.legendary.len(),
        datasets.augment.len(),
        datasets.voucher.len(),
        champions.len()
    ));

    let Some(query) = args.champion.as_deref() else {
        display_champion_list(&champions);
        return;
    };

    let selected = resolve_champion(query, &champions);
    if selected.is_none() {
        display_warning(&format!("No champion matches \"{}\"", query));
        return;
    }

    let view = ChampionView::build(&datasets, selected, args.min_n, args.sort);
    display_champion_view(&view, &catalogs, args.sort, args.top);
}

fn spawn_catalog_load(session: Arc<Session>) -> JoinHandle<()> {
    let token = session.begin_catalog_load();

    thread::spawn(move || {
        session.finish_catalog_load(token, load_catalogs());
    })
}

fn load_catalogs() -> Result<Catalogs, error::AppError> {
    let config = Config::from_env()?;
    tracing::info!("Fetching icon catalogs from {}", config.asset_base.root());
    CatalogClient::new(config).fetch_catalogs()
}
