use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::encode::artifact::{Artifact, VideoFormat};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{AdError, AdResult};
use crate::render::backend::{FrameRGBA, FrameSource};
use crate::session::driver::{FrameDriver, FrameIndexLinear, Pacing};

/// Lifecycle state of a [`CaptureSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No export running; an artifact from the last run may be held.
    #[default]
    Idle,
    /// Frames are being rendered and pushed to the sink.
    Recording,
    /// All frames pushed; the sink is flushing.
    Finalizing,
}

/// Parameters of one export.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSettings {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// Output frame rate.
    pub fps: Fps,
    /// Timeline duration in seconds; the export covers `[0, duration)` once.
    pub duration: f64,
    /// Download name for the artifact.
    pub file_name: String,
    /// Wait between frames.
    pub pacing: Pacing,
}

impl ExportSettings {
    /// Settings for `duration` seconds using the fixed file name of `format`.
    pub fn new(canvas: Canvas, fps: Fps, duration: f64, format: VideoFormat) -> Self {
        Self {
            canvas,
            fps,
            duration,
            file_name: format.file_name(),
            pacing: Pacing::default(),
        }
    }

    /// Exact number of frames the export renders (`duration * fps`).
    pub fn total_frames(&self) -> AdResult<u64> {
        Ok(FrameIndexLinear::covering(self.duration, self.fps)?.total_frames)
    }
}

/// Caller-owned capture state: at most one export at a time, plus the latest artifact.
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: SessionState,
    artifact: Option<Artifact>,
    generation: u64,
    job_alive: Option<Arc<AtomicBool>>,
}

/// Held by the job of the current generation; dropping it marks the job as gone.
#[derive(Debug)]
struct JobGuard(Arc<AtomicBool>);

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl CaptureSession {
    /// Idle session with no artifact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. A session whose job was dropped mid-export reads as `Idle`.
    pub fn state(&self) -> SessionState {
        if self.job_abandoned() {
            SessionState::Idle
        } else {
            self.state
        }
    }

    /// Whether an export is running (`Recording` or `Finalizing`).
    pub fn is_active(&self) -> bool {
        self.state() != SessionState::Idle
    }

    fn job_abandoned(&self) -> bool {
        self.state != SessionState::Idle
            && self
                .job_alive
                .as_ref()
                .is_some_and(|alive| !alive.load(Ordering::SeqCst))
    }

    /// Artifact of the last successful export, if any.
    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// Generation of the most recently started export (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begin an export with `sink`.
    ///
    /// Returns `Ok(None)` without touching any state when an export is already active. Otherwise
    /// the previous artifact is dropped; if the sink cannot begin the session stays `Idle` with no
    /// artifact and the error is [`AdError::CaptureUnavailable`].
    pub fn start<S: FrameSink>(
        &mut self,
        settings: ExportSettings,
        mut sink: S,
    ) -> AdResult<Option<ExportJob<S>>> {
        if self.job_abandoned() {
            tracing::warn!(generation = self.generation, "export job dropped before finishing");
            self.reset_after_failure();
        }
        if self.is_active() {
            tracing::debug!(state = ?self.state, "export already in progress; start ignored");
            return Ok(None);
        }
        self.artifact = None;

        let total_frames = settings.total_frames()?;
        let cfg = SinkConfig {
            canvas: settings.canvas,
            fps: settings.fps,
            total_frames,
        };
        if let Err(e) = sink.begin(cfg) {
            sink.abort();
            tracing::warn!(error = %e, "capture unavailable");
            return Err(match e {
                AdError::CaptureUnavailable(_) => e,
                other => AdError::capture(other.to_string()),
            });
        }

        let alive = Arc::new(AtomicBool::new(true));
        self.job_alive = Some(Arc::clone(&alive));
        self.generation += 1;
        self.state = SessionState::Recording;
        tracing::debug!(generation = self.generation, "session -> recording");
        Ok(Some(ExportJob {
            sink,
            settings,
            total_frames,
            generation: self.generation,
            pushed: 0,
            _guard: JobGuard(alive),
        }))
    }

    fn check_owner(&self, generation: u64, expected: SessionState) -> AdResult<()> {
        if self.generation != generation || self.state != expected {
            return Err(AdError::validation(format!(
                "export job (generation {generation}) does not own this session in state {:?}",
                self.state
            )));
        }
        Ok(())
    }

    fn reset_after_failure(&mut self) {
        self.state = SessionState::Idle;
        self.artifact = None;
        self.job_alive = None;
        tracing::debug!(generation = self.generation, "session -> idle (failed)");
    }
}

/// A running export returned by [`CaptureSession::start`].
///
/// The session is passed back into every step so its state stays observable between frames.
/// Dropping the job (or its [`Finalizer`]) before completion frees the session: it reads as
/// `Idle` and accepts the next `start`.
#[derive(Debug)]
pub struct ExportJob<S: FrameSink> {
    sink: S,
    settings: ExportSettings,
    total_frames: u64,
    generation: u64,
    pushed: u64,
    _guard: JobGuard,
}

impl<S: FrameSink> ExportJob<S> {
    /// Generation this job will stamp on its artifact.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Frames this job expects.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Frames pushed so far.
    pub fn frames_pushed(&self) -> u64 {
        self.pushed
    }

    /// Push the next frame to the sink. On failure the sink is aborted and the session reset.
    pub fn push(
        &mut self,
        session: &mut CaptureSession,
        idx: FrameIndex,
        frame: &FrameRGBA,
    ) -> AdResult<()> {
        session.check_owner(self.generation, SessionState::Recording)?;
        if idx.0 >= self.total_frames {
            self.fail(session);
            return Err(AdError::encode(format!(
                "frame {} is past the end of a {}-frame export",
                idx.0, self.total_frames
            )));
        }
        if let Err(e) = self.sink.push_frame(idx, frame) {
            self.fail(session);
            return Err(e);
        }
        self.pushed += 1;
        Ok(())
    }

    /// Render and push every frame of the export, then finalize.
    #[tracing::instrument(skip_all, fields(generation = self.generation, frames = self.total_frames))]
    pub fn run(
        mut self,
        session: &mut CaptureSession,
        source: &mut dyn FrameSource,
    ) -> AdResult<Artifact> {
        tracing::info!("export started");
        let mut time = FrameIndexLinear {
            fps: self.settings.fps,
            total_frames: self.total_frames,
        };
        let driver = FrameDriver::new(self.settings.pacing);
        let stats = driver.run(&mut time, |tick| {
            let frame = match source.render_frame(tick.t) {
                Ok(f) => f,
                Err(e) => {
                    self.fail(session);
                    return Err(e);
                }
            };
            self.push(session, tick.index, &frame)
        })?;
        tracing::debug!(frames = stats.frames, "all frames pushed");

        let artifact = self.stop(session)?.complete(session)?;
        tracing::info!(bytes = artifact.len(), file = artifact.file_name(), "export finished");
        Ok(artifact)
    }

    /// Stop recording and move the session to `Finalizing`.
    ///
    /// Fails (and resets the session) unless exactly the expected number of frames was pushed.
    pub fn stop(mut self, session: &mut CaptureSession) -> AdResult<Finalizer<S>> {
        session.check_owner(self.generation, SessionState::Recording)?;
        if self.pushed != self.total_frames {
            self.fail(session);
            return Err(AdError::encode(format!(
                "export stopped after {} of {} frames",
                self.pushed, self.total_frames
            )));
        }
        session.state = SessionState::Finalizing;
        tracing::debug!(generation = self.generation, "session -> finalizing");
        Ok(Finalizer { job: self })
    }

    /// Give up on the export: abort the sink and return the session to `Idle` with no artifact.
    pub fn abort(mut self, session: &mut CaptureSession) {
        if session.generation == self.generation && session.is_active() {
            self.fail(session);
        } else {
            self.sink.abort();
        }
    }

    fn fail(&mut self, session: &mut CaptureSession) {
        self.sink.abort();
        session.reset_after_failure();
    }
}

/// An export in the `Finalizing` state.
#[derive(Debug)]
pub struct Finalizer<S: FrameSink> {
    job: ExportJob<S>,
}

impl<S: FrameSink> Finalizer<S> {
    /// Flush the sink, wrap its output in an [`Artifact`] and return the session to `Idle` holding
    /// it. On failure the session is `Idle` with no artifact.
    pub fn complete(mut self, session: &mut CaptureSession) -> AdResult<Artifact> {
        session.check_owner(self.job.generation, SessionState::Finalizing)?;
        let media = match self.job.sink.finish() {
            Ok(m) => m,
            Err(e) => {
                self.job.fail(session);
                return Err(e);
            }
        };
        let artifact = Artifact::new(
            self.job.generation,
            self.job.settings.file_name.clone(),
            media.format,
            media.bytes,
        );
        session.artifact = Some(artifact.clone());
        session.state = SessionState::Idle;
        session.job_alive = None;
        tracing::debug!(
            generation = self.job.generation,
            chunks = media.chunks,
            "session -> idle"
        );
        Ok(artifact)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/capture.rs"]
mod tests;
