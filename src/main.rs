use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use shop_recs::{
    api::{create_router, AppState},
    client::HttpRecommendationService,
    config::Config,
    services::{providers::GroqProvider, Catalog},
    ui::{view, RecommendationController, SubmitOutcome},
};

/// shop-recs - AI product recommendations
#[derive(Parser)]
#[command(name = "shop-recs")]
#[command(about = "Browse a product catalog and ask for AI recommendations", long_about = None)]
struct Cli {
    /// Recommendation service base address (overrides API_BASE_URL)
    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recommendation backend
    Serve,

    /// Interactive client: each line typed is submitted as preferences
    Browse,

    /// Submit one set of preferences and print the result
    Recommend {
        /// Free-text preferences, e.g. "a phone under $500"
        preferences: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(base) = cli.api_base_url {
        config.api_base_url = base;
    }

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Browse => browse(config).await,
        Commands::Recommend { preferences } => recommend_once(config, preferences).await,
    }
}

async fn serve(config: Config) -> Result<()> {
    let api_key = config
        .groq_api_key
        .clone()
        .ok_or_else(|| anyhow!("GROQ_API_KEY not set in environment"))?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => Catalog::demo(),
    };

    let provider = GroqProvider::new(api_key, config.groq_api_url.clone(), config.groq_model.clone())
        .context("Failed to build Groq HTTP client")?;
    let state = AppState::new(catalog, Arc::new(provider));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(addr = %addr, model = %config.groq_model, "Server running");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn controller(config: &Config) -> RecommendationController {
    let service = HttpRecommendationService::new(config.api_base_url.clone());
    RecommendationController::new(Arc::new(service))
}

async fn browse(config: Config) -> Result<()> {
    let controller = controller(&config);
    controller.load_catalog().await;
    print!("{}", view::render(&controller.snapshot().await));
    println!();
    println!("Type your preferences (e.g. \"I want a phone under $500\"), Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if controller.enter_preferences(line).await == SubmitOutcome::Skipped {
            continue;
        }
        println!();
        print!("{}", view::render(&controller.snapshot().await));
    }

    Ok(())
}

async fn recommend_once(config: Config, preferences: String) -> Result<()> {
    let controller = controller(&config);
    controller.load_catalog().await;
    controller.set_preferences(preferences).await;
    controller.submit().await;
    print!("{}", view::render(&controller.snapshot().await));
    Ok(())
}
