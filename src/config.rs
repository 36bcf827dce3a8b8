//! Application configuration, loaded from JSON. Every field has a default, so `{}` is valid.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::encode::artifact::VideoFormat;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{AdError, AdResult};
use crate::render::text::FontBook;
use crate::scene::model::Timeline;
use crate::session::capture::ExportSettings;
use crate::session::driver::Pacing;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Frame rate for preview and export.
    pub fps: Fps,
    /// Scenes to render; the SwargaYatra preset when omitted.
    pub timeline: Timeline,
    /// Where glyphs come from.
    pub font: FontConfig,
    /// Export parameters.
    pub export: ExportConfig,
    /// Logging setup.
    pub logging: LoggingConfig,
}

/// Font source. With no `path` the system font database is searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// A TTF/OTF file to use for every weight.
    pub path: Option<PathBuf>,
}

impl FontConfig {
    /// Load the configured fonts. Failure is [`AdError::SurfaceUnavailable`].
    pub fn load(&self) -> AdResult<FontBook> {
        match self.path.as_deref() {
            Some(p) => FontBook::from_file(p),
            None => FontBook::system(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Container/codec.
    pub format: VideoFormat,
    /// Download name; derived from `format` when omitted.
    pub file_name: Option<String>,
    /// Wait between frames.
    pub pacing: Pacing,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: VideoFormat::Webm,
            file_name: None,
            pacing: Pacing::FrameInterval,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g. `"info"`, `"swargayatra=debug,warn"`).
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> AdResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON file.
    pub fn load(path: &Path) -> AdResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> AdResult<()> {
        self.fps.validate()?;
        self.canvas.raster_dims()?;
        self.timeline.validate()?;
        if self.export.format == VideoFormat::RawRgba {
            return Err(AdError::validation(
                "export.format must be 'webm' or 'mp4'",
            ));
        }
        if let Some(name) = self.export.file_name.as_deref()
            && (name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(AdError::validation(
                "export.file_name must be a plain file name",
            ));
        }
        Ok(())
    }

    /// Settings for one export of the configured timeline.
    pub fn export_settings(&self) -> ExportSettings {
        let mut s = ExportSettings::new(
            self.canvas,
            self.fps,
            self.timeline.duration(),
            self.export.format,
        );
        if let Some(name) = self.export.file_name.as_ref() {
            s.file_name = name.clone();
        }
        s.pacing = self.export.pacing;
        s
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
