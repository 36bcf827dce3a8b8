//! SwargaYatra landing page and video ad renderer.
//!
//! The ad is a deterministic function of time: a [`Timeline`] of scene windows is evaluated into a
//! [`FramePlan`] and rasterized by [`TimelineRenderer`] on the CPU. The same renderer drives both
//! surfaces of the `/ad` page:
//!
//! - a live preview, timed by the wall clock modulo the timeline duration ([`run_preview`])
//! - a one-pass export, timed by frame index, streamed into a [`FrameSink`] and finalized into an
//!   immutable [`Artifact`] by a [`CaptureSession`]
//!
//! Both loops run on one [`FrameDriver`] parameterized by a [`TimeSource`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// JSON configuration.
pub mod config;
pub(crate) mod encode;
/// Tracing subscriber setup.
pub mod logging;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod site;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex};
pub use crate::foundation::error::{AdError, AdResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::reveal::{FadeOut, Reveal, caption_alpha};

pub use crate::scene::eval::{CaptionDraw, CaptionKey, FramePlan, evaluate};
pub use crate::scene::model::{Background, BulletList, Caption, Scene, Timeline};
pub use crate::scene::preset::{BRAND, PHONE_DISPLAY, PHONE_TEL, swargayatra_timeline};

pub use crate::render::backend::{FrameRGBA, FrameSource};
pub use crate::render::cpu::TimelineRenderer;
pub use crate::render::text::{FontBook, FontFace};

pub use crate::encode::artifact::{ARTIFACT_STEM, Artifact, VideoFormat};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{EncodedMedia, FrameSink, InMemorySink, SinkConfig};

pub use crate::session::capture::{
    CaptureSession, ExportJob, ExportSettings, Finalizer, SessionState,
};
pub use crate::session::driver::{
    CancelToken, DriverStats, FrameDriver, FrameIndexLinear, Pacing, Tick, TimeSource,
    WallClockModulo,
};
pub use crate::session::preview::{PreviewOpts, run_preview, write_png};

pub use crate::site::pages::{
    AdPageView, DownloadView, SERVICE_CARDS, ServiceCard, TRIGGER_BUSY_LABEL, TRIGGER_IDLE_LABEL,
    TriggerView, ad_html, current_year, landing_html, render_route, write_site,
};
pub use crate::site::route::Route;
