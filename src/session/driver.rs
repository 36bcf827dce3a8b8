use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{AdError, AdResult};

/// One scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// 0-based position in the loop.
    pub index: FrameIndex,
    /// Timeline time handed to the renderer.
    pub t: f64,
}

/// Maps a loop position to a timeline time, or ends the loop.
pub trait TimeSource {
    /// Rate the loop is paced at.
    fn fps(&self) -> Fps;

    /// Time for frame `index`, or `None` once the source is exhausted.
    fn time_at(&mut self, index: FrameIndex) -> Option<f64>;
}

/// Live preview time: wall-clock seconds since `start`, wrapped into `[0, duration)`. Never ends.
#[derive(Clone, Copy, Debug)]
pub struct WallClockModulo {
    /// Moment that maps to `t = 0`.
    pub start: Instant,
    /// Loop period in seconds.
    pub duration: f64,
    /// Redraw rate.
    pub fps: Fps,
}

impl WallClockModulo {
    /// Start the clock now.
    pub fn starting_now(duration: f64, fps: Fps) -> AdResult<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(AdError::validation("wall clock duration must be > 0"));
        }
        fps.validate()?;
        Ok(Self {
            start: Instant::now(),
            duration,
            fps,
        })
    }

    /// Time for an arbitrary elapsed span; exposed so wrapping can be checked without sleeping.
    pub fn time_for_elapsed(&self, elapsed: Duration) -> f64 {
        let t = elapsed.as_secs_f64().rem_euclid(self.duration);
        if t >= self.duration { 0.0 } else { t }
    }
}

impl TimeSource for WallClockModulo {
    fn fps(&self) -> Fps {
        self.fps
    }

    fn time_at(&mut self, _index: FrameIndex) -> Option<f64> {
        Some(self.time_for_elapsed(self.start.elapsed()))
    }
}

/// Export time: `t = index / fps` for exactly `total_frames` frames, independent of wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameIndexLinear {
    /// Output frame rate.
    pub fps: Fps,
    /// Number of frames before the source is exhausted.
    pub total_frames: u64,
}

impl FrameIndexLinear {
    /// Source covering `duration` seconds at `fps` (`DURATION * FPS` frames).
    pub fn covering(duration: f64, fps: Fps) -> AdResult<Self> {
        fps.validate()?;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(AdError::validation("export duration must be > 0"));
        }
        Ok(Self {
            fps,
            total_frames: fps.frames_for_secs(duration),
        })
    }
}

impl TimeSource for FrameIndexLinear {
    fn fps(&self) -> Fps {
        self.fps
    }

    fn time_at(&mut self, index: FrameIndex) -> Option<f64> {
        (index.0 < self.total_frames).then(|| self.fps.frame_time_secs(index))
    }
}

/// How the loop waits between frames. Never affects the sampled times.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Pacing {
    /// Sleep until the next `1/fps` boundary.
    #[default]
    FrameInterval,
    /// Run as fast as rendering allows.
    Unthrottled,
}

/// Shared flag that stops a running loop before its next frame.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Summary of one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverStats {
    /// Frames handed to the callback.
    pub frames: u64,
    /// Whether the loop stopped on the cancel token.
    pub cancelled: bool,
}

/// The frame loop shared by preview and export.
#[derive(Clone, Debug, Default)]
pub struct FrameDriver {
    pacing: Pacing,
    cancel: Option<CancelToken>,
}

impl FrameDriver {
    /// Driver with the given pacing and no cancellation.
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            cancel: None,
        }
    }

    /// Attach a cancel token, checked before every frame.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Call `on_frame` for each tick until the source is exhausted, the token is cancelled, or the
    /// callback fails. A callback error stops the loop and is returned as-is.
    pub fn run<T, F>(&self, source: &mut T, mut on_frame: F) -> AdResult<DriverStats>
    where
        T: TimeSource + ?Sized,
        F: FnMut(Tick) -> AdResult<()>,
    {
        let fps = source.fps();
        fps.validate()?;
        let interval = Duration::from_secs_f64(fps.frame_duration_secs());
        let loop_start = Instant::now();

        let mut index = 0u64;
        loop {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Ok(DriverStats {
                    frames: index,
                    cancelled: true,
                });
            }
            let idx = FrameIndex(index);
            let Some(t) = source.time_at(idx) else {
                break;
            };

            if self.pacing == Pacing::FrameInterval
                && let Some(deadline) = interval
                    .checked_mul(u32::try_from(index).unwrap_or(u32::MAX))
                    .and_then(|d| loop_start.checked_add(d))
            {
                let now = Instant::now();
                if deadline > now {
                    std::thread::sleep(deadline - now);
                }
            }

            on_frame(Tick { index: idx, t })?;
            index += 1;
        }

        Ok(DriverStats {
            frames: index,
            cancelled: false,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
