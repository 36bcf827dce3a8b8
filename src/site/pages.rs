use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::artifact::{Artifact, VideoFormat};
use crate::foundation::error::AdResult;
use crate::scene::preset::{PHONE_DISPLAY, PHONE_TEL};
use crate::session::capture::CaptureSession;
use crate::site::route::Route;

const SITE_TITLE: &str = "SwargaYatra | Bangalore Funeral Services";
const SITE_DESCRIPTION: &str = "Dignified, 24x7 funeral services in Bangalore.";

/// Label of the export trigger while idle.
pub const TRIGGER_IDLE_LABEL: &str = "Generate & Download Video";
/// Label of the export trigger while an export runs.
pub const TRIGGER_BUSY_LABEL: &str = "Rendering…";

/// One service card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    /// Card heading.
    pub title: &'static str,
    /// One-sentence body.
    pub body: &'static str,
}

/// The four landing page cards.
pub const SERVICE_CARDS: [ServiceCard; 4] = [
    ServiceCard {
        title: "Complete Cremation Support",
        body: "Rituals, priests, hearse van, permits; handled with care and respect.",
    },
    ServiceCard {
        title: "Pan-Bangalore Coverage",
        body: "Rapid response across all neighborhoods and major hospitals.",
    },
    ServiceCard {
        title: "Transparent Pricing",
        body: "No hidden charges. Clear plans to meet every family’s needs.",
    },
    ServiceCard {
        title: "24/7 Compassionate Team",
        body: "Guidance end-to-end, from paperwork to ceremonies.",
    },
];

/// Export trigger state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerView {
    /// Whether clicking starts an export.
    pub enabled: bool,
    /// Button text.
    pub label: &'static str,
}

/// Download control, present once an artifact exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadView {
    /// Link target relative to the ad page.
    pub href: String,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type of the linked file.
    pub mime: &'static str,
}

/// What the `/ad` page shows for a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdPageView {
    /// Export button.
    pub trigger: TriggerView,
    /// Download link, if an artifact is held.
    pub download: Option<DownloadView>,
    /// Export length mentioned in the page note.
    pub duration_secs: u32,
    /// Format the export produces.
    pub format: VideoFormat,
}

impl AdPageView {
    /// Derive the controls from the session state.
    pub fn from_session(session: &CaptureSession, duration_secs: u32, format: VideoFormat) -> Self {
        let busy = session.is_active();
        Self {
            trigger: TriggerView {
                enabled: !busy,
                label: if busy {
                    TRIGGER_BUSY_LABEL
                } else {
                    TRIGGER_IDLE_LABEL
                },
            },
            download: session.artifact().map(DownloadView::for_artifact),
            duration_secs,
            format,
        }
    }
}

impl DownloadView {
    fn for_artifact(a: &Artifact) -> Self {
        Self {
            href: a.file_name().to_owned(),
            file_name: a.file_name().to_owned(),
            mime: a.mime(),
        }
    }
}

fn format_label(f: VideoFormat) -> &'static str {
    match f {
        VideoFormat::Webm => "WebM",
        VideoFormat::Mp4 => "MP4",
        VideoFormat::RawRgba => "raw RGBA",
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<meta name=\"description\" content=\"{}\">\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title),
        escape(SITE_DESCRIPTION),
    )
}

/// HTML for `/`. `year` is printed in the footer.
pub fn landing_html(year: i32) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"container\">\n<header class=\"hero\">\n<h1>SwargaYatra</h1>\n");
    body.push_str("<p class=\"tagline\">Dignified farewells in Bangalore, 24/7 support</p>\n");
    let _ = writeln!(
        body,
        "<div class=\"cta\">\n<a href=\"{}\" class=\"button\">View Video Ad</a>\n\
         <a href=\"tel:{PHONE_TEL}\" class=\"button secondary\">Call 24/7: {}</a>\n</div>\n</header>",
        Route::Ad.path(),
        escape(PHONE_DISPLAY),
    );
    body.push_str("<section class=\"grid\">\n");
    for card in SERVICE_CARDS {
        let _ = writeln!(
            body,
            "<div class=\"card\">\n<h3>{}</h3>\n<p>{}</p>\n</div>",
            escape(card.title),
            escape(card.body)
        );
    }
    body.push_str("</section>\n");
    let _ = writeln!(
        body,
        "<footer class=\"footer\">\n<p>Bangalore, Karnataka • SwargaYatra • {year}</p>\n</footer>\n</main>"
    );
    document(SITE_TITLE, &body)
}

/// HTML for `/ad`. `preview_src` is an optional still of the running preview.
pub fn ad_html(view: &AdPageView, preview_src: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<main class=\"container\">\n<h1 class=\"pageTitle\">SwargaYatra • Video Ad</h1>\n");
    let _ = writeln!(
        body,
        "<p class=\"pageNote\">Preview plays in real-time below. Click Generate Video to export a {}s {} file.</p>",
        view.duration_secs,
        format_label(view.format)
    );
    body.push_str("<div class=\"canvasWrap\">\n");
    if let Some(src) = preview_src {
        let _ = writeln!(
            body,
            "<img src=\"{}\" width=\"1280\" height=\"720\" alt=\"Video ad preview\">",
            escape(src)
        );
    }
    body.push_str("</div>\n<div class=\"cta\">\n");
    let disabled = if view.trigger.enabled { "" } else { " disabled" };
    let _ = writeln!(
        body,
        "<button class=\"button\"{disabled}>{}</button>",
        escape(view.trigger.label)
    );
    if let Some(d) = view.download.as_ref() {
        let _ = writeln!(
            body,
            "<a class=\"button secondary\" href=\"{}\" type=\"{}\" download=\"{}\">Download Video</a>",
            escape(&d.href),
            d.mime,
            escape(&d.file_name)
        );
    }
    body.push_str("</div>\n</main>\n");
    document(SITE_TITLE, &body)
}

/// Render `route` to HTML.
pub fn render_route(route: Route, year: i32, view: &AdPageView) -> String {
    match route {
        Route::Landing => landing_html(year),
        Route::Ad => ad_html(view, None),
    }
}

/// Write every page under `dir` (see [`Route::output_file`]) and return the written paths.
///
/// If the view links an artifact, the artifact is saved next to the ad page.
pub fn write_site(
    dir: &Path,
    year: i32,
    view: &AdPageView,
    artifact: Option<&Artifact>,
) -> AdResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for route in Route::ALL {
        let path = dir.join(route.output_file());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
        }
        std::fs::write(&path, render_route(route, year, view))
            .with_context(|| format!("failed to write page '{}'", path.display()))?;
        written.push(path);
    }
    if let Some(a) = artifact {
        let ad_dir = dir.join("ad");
        written.push(a.save_in(&ad_dir)?);
    }
    tracing::debug!(pages = written.len(), dir = %dir.display(), "site written");
    Ok(written)
}

/// Current calendar year (UTC) from the system clock.
pub fn current_year() -> i32 {
    use chrono::Datelike as _;
    chrono::Utc::now().year()
}

#[cfg(test)]
#[path = "../../tests/unit/site/pages.rs"]
mod tests;
