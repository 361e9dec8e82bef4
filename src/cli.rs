//! Command-line interface and config resolution.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{OverdrawPolicy, StarFieldConfig};
use crate::types::FRAME_DELAY_MS;

#[derive(Parser, Debug, Clone)]
#[command(name = "star-cartographer")]
#[command(about = "Rotatable 3D star field in the terminal", long_about = None)]
#[command(after_help = "Keys: w/s a/d q/e rotate about x/y/z, arrows move the ship, Esc quits")]
pub struct Cli {
    /// JSON file with star field parameters; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<u16>,

    /// Number of stars
    #[arg(long)]
    pub stars: Option<usize>,

    /// Perspective strength (> 0); smaller exaggerates depth
    #[arg(long)]
    pub fov: Option<f64>,

    /// Half-extent of the cube stars are placed in
    #[arg(long = "field-size")]
    pub field_size: Option<f64>,

    /// Seed for a reproducible star field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each rendered frame
    #[arg(long = "frame-delay-ms", default_value_t = FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,

    /// Resolve overlapping stars by depth instead of draw order
    #[arg(long = "nearest-wins")]
    pub nearest_wins: bool,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then individual flags.
    pub fn resolve_config(&self) -> Result<StarFieldConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                parse_config(&text)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => StarFieldConfig::default(),
        };

        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.stars {
            config.num_stars = v;
        }
        if let Some(v) = self.fov {
            config.fov = v;
        }
        if let Some(v) = self.field_size {
            config.field_size = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn overdraw(&self) -> OverdrawPolicy {
        if self.nearest_wins {
            OverdrawPolicy::NearestWins
        } else {
            OverdrawPolicy::IterationOrder
        }
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

pub fn parse_config(text: &str) -> Result<StarFieldConfig> {
    Ok(serde_json::from_str(text)?)
}
