//! Heart Disease Severity Predictor
//!
//! Serves severity predictions from a pre-trained model artifact and manages
//! the artifact registry in the content store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use artifact_store::BlobContentStore;
use clap::{Parser, Subcommand};
use config::Config;
use tracing_subscriber::EnvFilter;

mod commands;
mod inference;
mod pipeline;
mod resolver;

/// Heart Disease Severity Predictor
#[derive(Parser)]
#[command(name = "hd-score")]
#[command(about = "ML-based heart-disease severity predictor")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model identifier (defaults to the configured MODEL_ID)
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the severity category for one patient record
    Predict {
        /// Patient age in years
        #[arg(long)]
        age: String,

        /// Sex ("Male" / "Female")
        #[arg(long)]
        sex: String,

        /// Chest-pain type (e.g. "typical angina")
        #[arg(long)]
        cp: String,

        /// Resting blood pressure (mm Hg)
        #[arg(long)]
        trestbps: String,

        /// Resting ECG result (e.g. "normal")
        #[arg(long)]
        restecg: String,

        /// Maximum heart rate achieved
        #[arg(long)]
        thalch: String,

        /// Exercise-induced angina ("TRUE" / "FALSE")
        #[arg(long)]
        exang: String,

        /// ST depression induced by exercise
        #[arg(long)]
        oldpeak: String,

        /// ST-segment slope (e.g. "flat")
        #[arg(long)]
        slope: String,
    },

    /// Publish a trained artifact file into the model registry
    PushModel {
        /// Path to the artifact JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Report whether an artifact exists for the model id
    CheckModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let object_store = config::create_object_store(&config.model_store_path)?;
    let store = Arc::new(BlobContentStore::new(object_store, config.fetch_timeout));

    let model_id = cli.model.unwrap_or(config.model_id);

    match cli.command {
        Commands::Predict {
            age,
            sex,
            cp,
            trestbps,
            restecg,
            thalch,
            exang,
            oldpeak,
            slope,
        } => {
            let values = [
                age, sex, cp, trestbps, restecg, thalch, exang, oldpeak, slope,
            ];
            commands::predict::run(store, &model_id, values).await?;
        }
        Commands::PushModel { file } => {
            commands::push_model::run(store, &model_id, &file).await?;
        }
        Commands::CheckModel => {
            commands::check_model::run(store, &model_id).await?;
        }
    }

    Ok(())
}
