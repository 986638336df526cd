pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod mapper;
pub mod models;
pub mod services;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use clients::MovieCatalog;
use clients::tmdb::TmdbClient;
pub use config::Config;
use db::Store;
use services::{CachedMovieService, DefaultDetailService, DefaultHomeService, MovieService};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if matches!(cli.command, Commands::Init) {
        return cli::cmd_init();
    }

    config.validate()?;

    // Composition root: one store, one catalog client and one repository per
    // process, shared by reference with the use cases. No globals.
    let store = Arc::new(Store::new(&config.general.database_path).await?);
    let catalog: Arc<dyn MovieCatalog> = Arc::new(TmdbClient::new(&config.tmdb)?);
    let movies: Arc<dyn MovieService> = Arc::new(CachedMovieService::new(store, catalog));

    let home = DefaultHomeService::new(Arc::clone(&movies));
    let detail = DefaultDetailService::new(movies);

    match cli.command {
        Commands::Popular => cli::cmd_popular(&home, &config).await,
        Commands::Upcoming => cli::cmd_upcoming(&home, &config).await,
        Commands::Home => cli::cmd_home(&home, &config).await,
        Commands::Detail { id } => cli::cmd_detail(&detail, &config, &id).await,
        Commands::Videos { id } => cli::cmd_videos(&detail, &id).await,
        Commands::Search { query } => cli::cmd_search(&home, &config, &query.join(" ")).await,
        Commands::Init => unreachable!("handled before the service stack is built"),
    }
}
