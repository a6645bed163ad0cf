use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::signal;
use tracing_subscriber::EnvFilter;

use etymo_client::RemoteProvider;
use etymo_config::Config;
use etymo_core::QueryController;
use etymo_core::provider::DatasetProvider;
use etymo_core::view;
use etymo_dataset::MemoryProvider;

mod controller;
mod events;
mod io;
mod profile;
mod state;
mod ui;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "etymo", about = "Word-root dictionary lookup")]
struct Cli {
    /// Query a remote backend instead of loading the local dataset
    #[arg(long, value_name = "URL")]
    remote: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP backend over the local dataset
    Serve,
    /// One-shot lookup, print the rendered result
    Lookup { word: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = profile::load_config();
    if let Some(url) = cli.remote {
        config.remote_url = Some(url);
    }

    match cli.command {
        Some(Command::Serve) => run_serve(config).await,
        Some(Command::Lookup { word }) => run_lookup(config, &word).await,
        None => run_interactive(config).await,
    }
}

fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn DatasetProvider>> {
    match &config.remote_url {
        Some(url) => {
            tracing::info!("using remote backend at {}", url);
            Ok(Arc::new(RemoteProvider::new(url.clone())))
        }
        None => {
            let provider = MemoryProvider::load(&config.data).context("loading dataset")?;
            Ok(Arc::new(provider))
        }
    }
}

async fn run_serve(config: Config) -> anyhow::Result<()> {
    let provider = MemoryProvider::load(&config.data).context("loading dataset")?;
    let state = Arc::new(etymo_server::ServerState {
        provider: Arc::new(provider),
        suggest_limit: config.lookup.suggest_limit,
        example_limit: config.lookup.example_limit,
    });

    etymo_server::serve(&config.server.bind_addr(), state)
        .await
        .context("HTTP server failed")
}

async fn run_lookup(config: Config, word: &str) -> anyhow::Result<()> {
    let provider = build_provider(&config)?;
    let example_limit = config.lookup.example_limit;

    let mut controller = QueryController::new(provider);
    let Some((word, _)) = controller.begin(word) else {
        anyhow::bail!("empty word");
    };

    let mut regions = controller.resolve(&word).await;
    let parts = controller.affix_parts();
    if !parts.is_empty() {
        for part in parts {
            let examples = controller.fetch_examples(&part, example_limit).await;
            view::append_example_section(&mut regions, &part, &examples);
        }
        view::finish_example_sections(&mut regions);
    }

    ui::print_regions(&regions);
    Ok(())
}

async fn run_interactive(config: Config) -> anyhow::Result<()> {
    let provider = build_provider(&config)?;
    let state = Arc::new(AppState::new(config));

    let app = AppController::new(state, provider);
    let mut tasks = app.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    app.shutdown();
    tasks.shutdown().await;
    Ok(())
}
