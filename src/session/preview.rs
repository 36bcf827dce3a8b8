use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context as _;

use crate::foundation::core::Fps;
use crate::foundation::error::AdResult;
use crate::render::backend::{FrameRGBA, FrameSource};
use crate::session::driver::{CancelToken, DriverStats, FrameDriver, Pacing, WallClockModulo};

/// Options for [`run_preview`].
#[derive(Clone, Debug)]
pub struct PreviewOpts {
    /// Redraw rate.
    pub fps: Fps,
    /// Timeline duration; preview time wraps at this period.
    pub duration: f64,
    /// Stop after this much wall-clock time; `None` runs until cancelled.
    pub run_for: Option<Duration>,
    /// PNG overwritten with the latest frame.
    pub out: PathBuf,
    /// Write the PNG every this many frames (at least 1).
    pub write_every: u64,
}

/// Run the live loop: redraw at `fps` using wall-clock time modulo `duration` until `cancel` fires
/// or `run_for` elapses, periodically replacing `out` with the current frame.
///
/// The last rendered frame is always written before returning.
pub fn run_preview(
    source: &mut dyn FrameSource,
    opts: &PreviewOpts,
    cancel: CancelToken,
) -> AdResult<DriverStats> {
    let mut clock = WallClockModulo::starting_now(opts.duration, opts.fps)?;
    let started = Instant::now();
    let every = opts.write_every.max(1);
    let mut latest: Option<FrameRGBA> = None;

    let stop = cancel.clone();
    let stats = FrameDriver::new(Pacing::FrameInterval)
        .with_cancel(cancel)
        .run(&mut clock, |tick| {
            let frame = source.render_frame(tick.t)?;
            if tick.index.0 % every == 0 {
                write_png(&opts.out, &frame)?;
                tracing::trace!(t = tick.t, "preview frame written");
            }
            latest = Some(frame);
            if opts.run_for.is_some_and(|limit| started.elapsed() >= limit) {
                stop.cancel();
            }
            Ok(())
        })?;

    if let Some(frame) = latest.as_ref() {
        write_png(&opts.out, frame)?;
    }
    tracing::debug!(frames = stats.frames, "preview stopped");
    Ok(stats)
}

/// Encode `frame` as PNG at `path`, creating parent directories.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> AdResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("failed to write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/session/preview.rs"]
mod tests;
