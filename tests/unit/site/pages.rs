use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::AdResult;
use crate::render::backend::{FrameRGBA, FrameSource};
use crate::session::capture::ExportSettings;
use crate::session::driver::Pacing;

struct Blank;

impl FrameSource for Blank {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: 2,
            height: 2,
        }
    }

    fn render_frame(&mut self, _t: f64) -> AdResult<FrameRGBA> {
        Ok(FrameRGBA {
            width: 2,
            height: 2,
            data: vec![0; 16],
        })
    }
}

fn settings() -> ExportSettings {
    let mut s = ExportSettings::new(Blank.canvas(), Fps::default(), 1.0, VideoFormat::Webm);
    s.pacing = Pacing::Unthrottled;
    s
}

#[test]
fn landing_has_cards_links_and_year() {
    let html = landing_html(2031);
    assert!(html.contains("<h1>SwargaYatra</h1>"));
    assert!(html.contains("href=\"/ad\""));
    assert!(html.contains("href=\"tel:+919999999999\""));
    assert!(html.contains("+91 99999 99999"));
    assert_eq!(html.matches("class=\"card\"").count(), 4);
    assert!(html.contains("Transparent Pricing"));
    assert!(html.contains("• 2031</p>"));
}

#[test]
fn idle_view_enables_trigger_without_download() {
    let session = CaptureSession::new();
    let view = AdPageView::from_session(&session, 20, VideoFormat::Webm);
    assert!(view.trigger.enabled);
    assert_eq!(view.trigger.label, TRIGGER_IDLE_LABEL);
    assert!(view.download.is_none());

    let html = ad_html(&view, None);
    assert!(html.contains("Generate &amp; Download Video"));
    assert!(!html.contains(" disabled"));
    assert!(!html.contains("Download Video</a>"));
    assert!(html.contains("export a 20s WebM file"));
}

#[test]
fn recording_view_disables_trigger() {
    let mut session = CaptureSession::new();
    let job = session
        .start(settings(), InMemorySink::new())
        .unwrap()
        .unwrap();
    let view = AdPageView::from_session(&session, 20, VideoFormat::Webm);
    assert!(!view.trigger.enabled);
    assert_eq!(view.trigger.label, "Rendering…");
    assert!(ad_html(&view, None).contains("<button class=\"button\" disabled>"));
    job.abort(&mut session);
}

#[test]
fn finished_session_links_the_artifact() {
    let mut session = CaptureSession::new();
    session
        .start(settings(), InMemorySink::new())
        .unwrap()
        .unwrap()
        .run(&mut session, &mut Blank)
        .unwrap();
    let view = AdPageView::from_session(&session, 20, VideoFormat::Webm);
    assert!(view.trigger.enabled);
    let d = view.download.as_ref().unwrap();
    assert_eq!(d.file_name, "swargayatra-ad.webm");

    let html = ad_html(&view, Some("preview.png"));
    assert!(html.contains("download=\"swargayatra-ad.webm\""));
    assert!(html.contains("<img src=\"preview.png\""));
}

#[test]
fn write_site_emits_both_pages_and_artifact() {
    let dir = PathBuf::from("target").join("site_unit");
    let _ = std::fs::remove_dir_all(&dir);
    let mut session = CaptureSession::new();
    let artifact = session
        .start(settings(), InMemorySink::new())
        .unwrap()
        .unwrap()
        .run(&mut session, &mut Blank)
        .unwrap();
    let view = AdPageView::from_session(&session, 1, VideoFormat::Webm);
    let written = write_site(&dir, 2026, &view, Some(&artifact)).unwrap();
    assert_eq!(written.len(), 3);
    assert!(dir.join("index.html").is_file());
    assert!(dir.join("ad").join("index.html").is_file());
    assert_eq!(
        std::fs::read(dir.join("ad").join("swargayatra-ad.webm")).unwrap(),
        artifact.bytes()
    );
}

#[test]
fn escape_handles_markup() {
    assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
}

#[test]
fn current_year_matches_the_utc_clock() {
    use chrono::Datelike as _;
    let before = chrono::Utc::now().year();
    let year = current_year();
    let after = chrono::Utc::now().year();
    assert!(year == before || year == after);
    assert!(year >= 2024);
}
