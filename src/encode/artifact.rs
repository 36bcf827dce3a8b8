use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{AdError, AdResult};

/// Base name of every exported file; the extension follows the format.
pub const ARTIFACT_STEM: &str = "swargayatra-ad";

/// Container/codec of an encoded clip. Every format carries a single video stream and no audio.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VideoFormat {
    /// WebM container, VP9 video.
    #[default]
    Webm,
    /// Fragmented MP4 container, H.264 video.
    Mp4,
    /// Raw RGBA8 frames back to back (in-memory sink only).
    RawRgba,
}

impl VideoFormat {
    /// MIME type for downloads.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Webm => "video/webm",
            Self::Mp4 => "video/mp4",
            Self::RawRgba => "application/octet-stream",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Webm => "webm",
            Self::Mp4 => "mp4",
            Self::RawRgba => "rgba",
        }
    }

    /// The fixed download name for this format.
    pub fn file_name(self) -> String {
        format!("{ARTIFACT_STEM}.{}", self.extension())
    }
}

/// Immutable result of one completed capture session.
///
/// Cloning is cheap and shares the bytes; nothing can mutate an artifact after it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    generation: u64,
    file_name: String,
    format: VideoFormat,
    bytes: Arc<[u8]>,
}

impl Artifact {
    pub(crate) fn new(generation: u64, file_name: String, format: VideoFormat, bytes: Vec<u8>) -> Self {
        Self {
            generation,
            file_name,
            format,
            bytes: bytes.into(),
        }
    }

    /// Session generation that produced this artifact (1 for the first export).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Download file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Container format.
    pub fn format(&self) -> VideoFormat {
        self.format
    }

    /// MIME type of the bytes.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// Encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encoder produced nothing.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the artifact into `dir` under its file name and return the full path.
    pub fn save_in(&self, dir: &Path) -> AdResult<PathBuf> {
        if self.file_name.is_empty()
            || self.file_name.contains(['/', '\\'])
            || self.file_name == ".."
        {
            return Err(AdError::validation(format!(
                "artifact file name '{}' must be a plain file name",
                self.file_name
            )));
        }
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)
            .with_context(|| format!("failed to write artifact '{}'", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/artifact.rs"]
mod tests;
