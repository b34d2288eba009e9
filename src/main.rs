//! UIPilot - GUI grounding adapter for desktop automation.
//!
//! Sends a screenshot and a task instruction to a remotely hosted
//! vision-language model and prints the predicted next action.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use uipilot_protocols::{ImageSource, NormalizedPoint};
use uipilot_provider_openai::{AdapterConfig, GuiVisionAdapter, ImageDetail};
use uipilot_vision::DEFAULT_MARKER_RADIUS;

/// UIPilot CLI.
#[derive(Parser)]
#[command(name = "uipilot")]
#[command(about = "GUI grounding adapter for remotely hosted vision-language models")]
#[command(version)]
struct Cli {
    /// Model identifier sent with every request
    #[arg(short, long, global = true, default_value = "showui-2b")]
    model: String,

    /// Endpoint base URL (falls back to OPENAI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key (falls back to OPENAI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the next action for a screenshot
    Query {
        /// Path to the screenshot
        #[arg(long)]
        image: PathBuf,

        /// Task instruction for the model
        #[arg(long)]
        instruction: String,

        /// Image detail hint (auto, low, high)
        #[arg(long, default_value = "auto")]
        detail: String,
    },

    /// Draw a predicted point onto an image
    Annotate {
        /// Path or URL of the image
        #[arg(long)]
        image: String,

        /// Predicted point literal, e.g. "[0.48, 0.21]"
        #[arg(long)]
        point: Option<String>,

        /// Marker radius in pixels
        #[arg(long, default_value_t = DEFAULT_MARKER_RADIUS)]
        radius: u32,

        /// Where to write the annotated PNG
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = AdapterConfig::new(cli.model);
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }

    match cli.command {
        Commands::Query {
            image,
            instruction,
            detail,
        } => {
            config = config.with_detail(parse_detail(&detail)?);
            let adapter = GuiVisionAdapter::new(config);
            info!(model = adapter.model(), "Querying vision model");
            let action = adapter.query_screenshot(&image, instruction).await?;
            println!("{action}");
        }
        Commands::Annotate {
            image,
            point,
            radius,
            output,
        } => {
            let adapter = GuiVisionAdapter::new(config);
            let source = parse_image_argument(&image);
            let point = point
                .as_deref()
                .map(str::parse::<NormalizedPoint>)
                .transpose()
                .context("Invalid point literal")?;

            let annotated = adapter.annotate_point(&source, point, radius).await?;
            annotated
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(path = %output.display(), "Wrote annotated image");
        }
    }

    Ok(())
}

fn parse_detail(raw: &str) -> anyhow::Result<ImageDetail> {
    match raw {
        "auto" => Ok(ImageDetail::Auto),
        "low" => Ok(ImageDetail::Low),
        "high" => Ok(ImageDetail::High),
        other => anyhow::bail!("Unknown detail level: {other}"),
    }
}

/// The CLI takes one string for both local paths and remote URLs; the
/// library keeps them as distinct source variants.
fn parse_image_argument(raw: &str) -> ImageSource {
    match url::Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => ImageSource::Url(parsed),
        _ => ImageSource::Path(PathBuf::from(raw)),
    }
}
