//! CLI configuration

use anyhow::{Context, Result};
use postage_rates::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of pieces read per session unless configured otherwise
pub const DEFAULT_ITERATIONS: usize = 5;

/// How each rated piece is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Price or `UNMAILABLE`, one per line
    #[default]
    Text,
    /// One JSON quote per line
    Json,
}

/// Postage CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Pieces to read; 0 reads until end of input
    pub iterations: usize,
    /// Print `.29` rather than `0.29`
    pub strip_leading_zero: bool,
    /// Prompt for each line on stderr
    pub prompt: bool,
    /// Output format
    pub output: OutputFormat,
    /// Rating engine settings
    pub engine: EngineConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            strip_leading_zero: true,
            prompt: true,
            output: OutputFormat::Text,
            engine: EngineConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env` and `POSTAGE_` environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply variables from `lookup` over the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(val) = lookup("POSTAGE_ITERATIONS") {
            cfg.iterations = val
                .trim()
                .parse()
                .with_context(|| format!("POSTAGE_ITERATIONS must be a count, got {:?}", val))?;
        }
        if let Some(val) = lookup("POSTAGE_STRIP_LEADING_ZERO") {
            cfg.strip_leading_zero = parse_flag("POSTAGE_STRIP_LEADING_ZERO", &val)?;
        }
        if let Some(val) = lookup("POSTAGE_PROMPT") {
            cfg.prompt = parse_flag("POSTAGE_PROMPT", &val)?;
        }
        if let Some(val) = lookup("POSTAGE_OUTPUT") {
            cfg.output = match val.trim().to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => anyhow::bail!("POSTAGE_OUTPUT must be text or json, got {:?}", other),
            };
        }

        // Engine settings
        if let Some(val) = lookup("POSTAGE_TARIFF_FILE") {
            if !val.trim().is_empty() {
                cfg.engine.tariff_file = Some(PathBuf::from(val.trim()));
            }
        }

        Ok(cfg)
    }
}

fn parse_flag(key: &str, val: &str) -> Result<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("{} must be a boolean, got {:?}", key, other),
    }
}
