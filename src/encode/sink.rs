use crate::encode::artifact::VideoFormat;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{AdError, AdResult};
use crate::render::backend::FrameRGBA;

/// Configuration handed to a [`FrameSink`] when a capture session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Exact number of frames that will be pushed.
    pub total_frames: u64,
}

/// Encoded output of a finalized sink: the accumulated chunks joined in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMedia {
    /// Container format of `bytes`.
    pub format: VideoFormat,
    /// Concatenated chunks.
    pub bytes: Vec<u8>,
    /// How many chunks were accumulated before finalization.
    pub chunks: usize,
}

/// Sink contract for consuming rendered frames.
///
/// Ordering contract: `begin` once, then `push_frame` in strictly increasing `FrameIndex` order,
/// then `finish` once. After any error the caller invokes `abort` and drops the sink.
pub trait FrameSink {
    /// Called once before any frame; failure means capture is unavailable.
    fn begin(&mut self, cfg: SinkConfig) -> AdResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AdResult<()>;
    /// Flush the encoder and return everything it produced.
    fn finish(&mut self) -> AdResult<EncodedMedia>;
    /// Release resources after a failure; no output is produced.
    fn abort(&mut self) {}
}

/// In-memory sink that keeps raw frames as chunks.
///
/// Finalization yields [`VideoFormat::RawRgba`]: the frames' bytes back to back.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    aborted: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames pushed so far, in order.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Whether `abort` was called.
    pub fn was_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> AdResult<()> {
        cfg.fps.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> AdResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| AdError::encode("in-memory sink not started"))?;
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(AdError::encode("sink received out-of-order frame index"));
        }
        if frame.width != cfg.canvas.width || frame.height != cfg.canvas.height {
            return Err(AdError::encode(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn finish(&mut self) -> AdResult<EncodedMedia> {
        if self.cfg.is_none() {
            return Err(AdError::encode("in-memory sink not started"));
        }
        let bytes = self
            .frames
            .iter()
            .flat_map(|(_, f)| f.data.iter().copied())
            .collect();
        Ok(EncodedMedia {
            format: VideoFormat::RawRgba,
            bytes,
            chunks: self.frames.len(),
        })
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
