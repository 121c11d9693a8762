use anyhow::{Context, Result};
use leadform_wizard_ratatui::BrandConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub brand: BrandAssets,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logo art files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandAssets {
    #[serde(default = "default_logo")]
    pub logo: String,
    #[serde(default = "default_fallback_glyph")]
    pub fallback_glyph: String,
}

fn default_logo() -> String {
    leadform_wizard_ratatui::brand::DEFAULT_LOGO.to_string()
}

fn default_fallback_glyph() -> String {
    leadform_wizard_ratatui::brand::DEFAULT_FALLBACK_GLYPH.to_string()
}

impl Default for BrandAssets {
    fn default() -> Self {
        Self {
            logo: default_logo(),
            fallback_glyph: default_fallback_glyph(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory lead files are written to
    #[serde(default = "default_export_dir")]
    pub dir: String,

    /// Where inline exports are spooled when the export directory is
    /// unusable (default: the system temp directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_dir: Option<String>,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            fallback_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// How long the thank-you screen stays up (default: 2000 ms)
    #[serde(default = "default_thank_you_delay_ms")]
    pub thank_you_delay_ms: u64,
}

fn default_thank_you_delay_ms() -> u64 {
    leadform::DEFAULT_THANK_YOU_DELAY_MS
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            thank_you_delay_ms: default_thank_you_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to a file (false = stderr, which the TUI draws over)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,

    /// Directory for log files
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
            dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Per-user config file, `~/.config/klassvough/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("klassvough").join("config.toml"))
    }

    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::user_config_path().as_deref(), config_path)
    }

    /// Embedded defaults, then the user config if it exists, then the
    /// explicit file, which must exist.
    fn load_layers(user_config: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        if let Some(user_config) = user_config {
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn brand(&self) -> BrandConfig {
        BrandConfig::default()
            .with_logo(&self.brand.logo)
            .with_fallback_glyph(&self.brand.fallback_glyph)
    }

    pub fn thank_you_delay(&self) -> Duration {
        Duration::from_millis(self.wizard.thank_you_delay_ms)
    }

    /// Get absolute path to the logs directory
    pub fn logs_path(&self) -> PathBuf {
        absolute(&self.logging.dir)
    }

    /// Get absolute path to the export directory
    pub fn export_path(&self) -> PathBuf {
        absolute(&self.export.dir)
    }
}

fn absolute(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}
