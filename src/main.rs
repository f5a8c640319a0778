use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arcade_snake::game::GameConfig;
use arcade_snake::modes::HumanMode;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Terminal snake: eat apples, avoid walls and your own tail")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels (multiple of the cell size)
    #[arg(long)]
    width: Option<i32>,

    /// Board height in pixels (multiple of the cell size)
    #[arg(long)]
    height: Option<i32>,

    /// Side of one grid cell in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Shortest tick interval in milliseconds
    #[arg(long)]
    min_speed: Option<u64>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            // Validated below, after the flags are applied
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(speed) = self.speed {
            config.base_speed_ms = speed;
        }
        if let Some(min_speed) = self.min_speed {
            config.min_speed_ms = min_speed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arcade_snake=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    info!(?config, "starting");

    let mut human_mode = HumanMode::new(config)
        .with_seed(cli.seed)
        .muted(cli.mute);
    human_mode.run().await?;

    Ok(())
}
