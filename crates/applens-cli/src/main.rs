//! applens command line interface.
//!
//! Presentation collaborator for the review pipeline: takes an app id,
//! wires the Play Store client, sentiment model, and plotters renderer
//! together, and prints the four fields of the resulting
//! [`PipelineResult`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use applens_analysis::{run_analysis, SentimentModel};
use applens_core::PipelineResult;
use applens_render::PlottersRenderer;
use applens_scraper::PlayStoreClient;

#[derive(Debug, Parser)]
#[command(name = "applens")]
#[command(about = "Google Play review sentiment and topic analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch all reviews for an app and produce sentiment/topic summaries.
    Analyze {
        /// Play Store application id, e.g. `com.example.app`.
        app_id: String,

        /// Print the result as JSON instead of plain text.
        #[arg(long)]
        json: bool,

        /// Override the configured artifact output directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = applens_core::load_app_config()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            app_id,
            json,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            tracing::info!(app_id = %app_id, output_dir = %output_dir.display(), "starting analysis");
            let client = PlayStoreClient::from_config(&config)?;
            // Loaded once and reused by reference for the whole process.
            let model = SentimentModel::load();
            let renderer = PlottersRenderer::new();

            let result = run_analysis(&client, &model, &renderer, &output_dir, &app_id).await;
            present(&result, json)?;
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn present(result: &PipelineResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("status: {}", result.status);
    match &result.sentiment_chart {
        Some(path) => println!("sentiment chart: {}", path.display()),
        None => println!("sentiment chart: (none)"),
    }
    if result.word_clouds.is_empty() {
        println!("word clouds: (none)");
    } else {
        println!("word clouds:");
        for path in &result.word_clouds {
            println!("  {}", path.display());
        }
    }
    if let Some(topic_status) = &result.topic_status {
        println!("topics: {topic_status}");
    }

    Ok(())
}
