use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use swargayatra::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "swargayatra", version)]
struct Cli {
    /// JSON config file; every field is optional.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides the config; `RUST_LOG` overrides both).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON log lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the ad frame at one point in time as a PNG.
    Frame(FrameArgs),
    /// Run one capture session and write the video (requires `ffmpeg` on PATH).
    Export(ExportArgs),
    /// Run the live preview loop, refreshing a PNG with the current frame.
    Preview(PreviewArgs),
    /// Write the landing page and the ad page as static HTML.
    Site(SiteArgs),
    /// Print the active timeline as JSON.
    Timeline,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Timeline time in seconds (wrapped into the timeline duration).
    #[arg(long = "t", allow_negative_numbers = true)]
    t: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Directory receiving the video under its fixed file name.
    #[arg(long)]
    out_dir: PathBuf,

    /// Container/codec (defaults to the config, WebM otherwise).
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Wait between frames (defaults to the config).
    #[arg(long, value_enum)]
    pacing: Option<PacingChoice>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// How long to run, in wall-clock seconds.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// PNG overwritten with the latest frame.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SiteArgs {
    /// Site root; pages land in `index.html` and `ad/index.html`.
    #[arg(long)]
    out_dir: PathBuf,

    /// Footer year (defaults to the current year).
    #[arg(long)]
    year: Option<i32>,

    /// Also export the video and link it from the ad page.
    #[arg(long)]
    export: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Webm,
    Mp4,
}

impl From<FormatChoice> for swargayatra::VideoFormat {
    fn from(c: FormatChoice) -> Self {
        match c {
            FormatChoice::Webm => Self::Webm,
            FormatChoice::Mp4 => Self::Mp4,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PacingChoice {
    FrameInterval,
    Unthrottled,
}

impl From<PacingChoice> for swargayatra::Pacing {
    fn from(c: PacingChoice) -> Self {
        match c {
            PacingChoice::FrameInterval => Self::FrameInterval,
            PacingChoice::Unthrottled => Self::Unthrottled,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        cfg.logging.level = level;
    }
    if cli.log_json {
        cfg.logging.json = true;
    }
    swargayatra::logging::init_logging(&cfg.logging);

    match cli.cmd {
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Export(args) => cmd_export(cfg, args),
        Command::Preview(args) => cmd_preview(&cfg, args),
        Command::Site(args) => cmd_site(&cfg, args),
        Command::Timeline => cmd_timeline(&cfg),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(AppConfig::default()),
    }
}

fn make_renderer(cfg: &AppConfig) -> anyhow::Result<swargayatra::TimelineRenderer> {
    let fonts = cfg.font.load().context("load fonts")?;
    let renderer = swargayatra::TimelineRenderer::new(cfg.timeline.clone(), cfg.canvas, fonts)
        .context("create drawing surface")?;
    Ok(renderer)
}

fn cmd_frame(cfg: &AppConfig, args: FrameArgs) -> anyhow::Result<()> {
    use swargayatra::FrameSource as _;

    let mut renderer = make_renderer(cfg)?;
    let frame = renderer
        .render_frame(args.t)
        .with_context(|| format!("render frame at t={}", args.t))?;
    swargayatra::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn run_export(
    cfg: &AppConfig,
    session: &mut swargayatra::CaptureSession,
) -> anyhow::Result<swargayatra::Artifact> {
    let mut renderer = make_renderer(cfg)?;
    let sink = swargayatra::FfmpegSink::new(swargayatra::FfmpegSinkOpts::new(cfg.export.format));
    let job = session
        .start(cfg.export_settings(), sink)?
        .context("capture session already active")?;
    let artifact = job.run(session, &mut renderer)?;
    Ok(artifact)
}

fn cmd_export(mut cfg: AppConfig, args: ExportArgs) -> anyhow::Result<()> {
    if let Some(f) = args.format {
        cfg.export.format = f.into();
        cfg.export.file_name = None;
    }
    if let Some(p) = args.pacing {
        cfg.export.pacing = p.into();
    }

    let mut session = swargayatra::CaptureSession::new();
    let artifact = run_export(&cfg, &mut session)?;
    let path = artifact.save_in(&args.out_dir)?;

    eprintln!("wrote {} ({} bytes)", path.display(), artifact.len());
    Ok(())
}

fn cmd_preview(cfg: &AppConfig, args: PreviewArgs) -> anyhow::Result<()> {
    if !(args.seconds.is_finite() && args.seconds > 0.0) {
        anyhow::bail!("--seconds must be a positive number");
    }
    let mut renderer = make_renderer(cfg)?;
    let opts = swargayatra::PreviewOpts {
        fps: cfg.fps,
        duration: cfg.timeline.duration(),
        run_for: Some(Duration::from_secs_f64(args.seconds)),
        out: args.out.clone(),
        write_every: u64::from(cfg.fps.num / cfg.fps.den).max(1),
    };
    let stats = swargayatra::run_preview(&mut renderer, &opts, swargayatra::CancelToken::new())?;

    eprintln!("previewed {} frames into {}", stats.frames, args.out.display());
    Ok(())
}

fn cmd_site(cfg: &AppConfig, args: SiteArgs) -> anyhow::Result<()> {
    let year = args.year.unwrap_or_else(swargayatra::current_year);
    let duration_secs = cfg.timeline.duration().round() as u32;

    let mut session = swargayatra::CaptureSession::new();
    if args.export {
        run_export(cfg, &mut session)?;
    }
    let view = swargayatra::AdPageView::from_session(&session, duration_secs, cfg.export.format);

    let written = swargayatra::write_site(&args.out_dir, year, &view, session.artifact())?;
    for p in written {
        eprintln!("wrote {}", p.display());
    }
    Ok(())
}

fn cmd_timeline(cfg: &AppConfig) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&cfg.timeline).context("serialize timeline")?;
    println!("{json}");
    Ok(())
}
