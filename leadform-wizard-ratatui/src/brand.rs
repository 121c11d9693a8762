//! Brand assets: where the logo comes from and how it degrades.

use std::fs;
use std::path::{Path, PathBuf};

/// Default logo art file.
pub const DEFAULT_LOGO: &str = "kv-logo-negative.txt";

/// Default fallback glyph file, used when the logo cannot be read.
pub const DEFAULT_FALLBACK_GLYPH: &str = "kv-glyph.txt";

/// Tagline shown under the logo.
pub const TAGLINE: &str = "Compromisso com a beleza.";

const WORDMARK: &[&str] = &["K L A S S   V O U G H"];

/// Brand configuration handed to the kiosk at construction.
///
/// Both paths point at plain-text art files. Relative paths are resolved
/// against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandConfig {
    /// Logo art (default [`DEFAULT_LOGO`]).
    pub logo: PathBuf,
    /// Smaller glyph shown instead of the logo when it fails to load
    /// (default [`DEFAULT_FALLBACK_GLYPH`]).
    pub fallback_glyph: PathBuf,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            logo: PathBuf::from(DEFAULT_LOGO),
            fallback_glyph: PathBuf::from(DEFAULT_FALLBACK_GLYPH),
        }
    }
}

impl BrandConfig {
    pub fn with_logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn with_fallback_glyph(mut self, glyph: impl Into<PathBuf>) -> Self {
        self.fallback_glyph = glyph.into();
        self
    }
}

/// Which asset the logo art came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSource {
    Logo,
    FallbackGlyph,
    Wordmark,
}

/// Loaded logo art, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoArt {
    lines: Vec<String>,
    source: LogoSource,
}

impl LogoArt {
    /// Load the logo, then the fallback glyph, then the built-in wordmark.
    pub fn load(config: &BrandConfig) -> Self {
        if let Some(lines) = read_art(&config.logo) {
            return Self {
                lines,
                source: LogoSource::Logo,
            };
        }
        tracing::debug!(path = %config.logo.display(), "logo unavailable, trying fallback glyph");

        if let Some(lines) = read_art(&config.fallback_glyph) {
            return Self {
                lines,
                source: LogoSource::FallbackGlyph,
            };
        }
        tracing::debug!(path = %config.fallback_glyph.display(), "fallback glyph unavailable");

        Self::wordmark()
    }

    /// The built-in text wordmark.
    pub fn wordmark() -> Self {
        Self {
            lines: WORDMARK.iter().map(|l| l.to_string()).collect(),
            source: LogoSource::Wordmark,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn source(&self) -> LogoSource {
        self.source
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }
}

fn read_art(path: &Path) -> Option<Vec<String>> {
    let text = fs::read_to_string(path).ok()?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.iter().all(|l| l.trim().is_empty()) {
        return None;
    }
    Some(lines)
}
