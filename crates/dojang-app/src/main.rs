use std::sync::Arc;

use clap::Parser;
use dojang_config::Config;
use dojang_core::query;
use dojang_lang_korean::GlossaryLoader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod audio;
mod controller;
mod debounce;
mod events;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use crate::audio::TracingSink;
use crate::controller::AppController;
use crate::state::AppState;

/// Interactive Taekwondo terminology dictionary
#[derive(Parser)]
#[command(name = "dojang", version, about)]
struct Cli {
    /// Extra glossary files merged over the embedded one
    #[arg(long = "glossary")]
    glossaries: Vec<String>,

    /// One-shot: print terms matching this search text and exit
    #[arg(long)]
    query: Option<String>,

    /// One-shot: restrict matches to this category (exact name)
    #[arg(long)]
    category: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::new();
    config
        .glossary
        .additional_paths
        .extend(cli.glossaries.iter().cloned());

    let index = if config.glossary.enabled {
        GlossaryLoader::load_with_additional(&config.glossary.additional_paths)?
    } else {
        tracing::warn!("glossary loading disabled, using embedded data only");
        GlossaryLoader::load_embedded()?
    };

    // One-shot mode: filter once, print, exit
    if cli.query.is_some() || cli.category.is_some() {
        let search_text = cli.query.unwrap_or_default();
        let category = cli
            .category
            .unwrap_or_else(|| query::ALL_CATEGORIES.to_string());

        let hits = query::filter(index.terms(), &search_text, &category);
        let rows = events::search::to_rows(&hits);
        println!(
            "{}",
            dojang_ui::render::render_results(&rows, config.ui.table_width)
        );
        return Ok(());
    }

    let state = Arc::new(AppState::new(config, index));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(Arc::new(TracingSink));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished, shutting down"),
                Some(Ok(Err(e))) => tracing::error!("task exited with error: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tasks.shutdown().await;

    Ok(())
}
