use crate::animation::ease::Ease;
use crate::animation::reveal::{FadeOut, Reveal};
use crate::foundation::color::Color;
use crate::foundation::error::{AdError, AdResult};
use crate::foundation::math::lerp;

/// Ordered, contiguous list of scene windows plus the animated background.
///
/// Scenes partition `[0, duration)`: the first starts at `0`, each next one starts exactly where the
/// previous ended, and the last `end` is the total duration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Background parameters shared by every scene.
    #[serde(default)]
    pub background: Background,
    /// Scene windows in playback order.
    pub scenes: Vec<Scene>,
}

/// One scene window: a title plus sub-lines and/or a bulleted list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Human-readable label, used in logs only.
    #[serde(default)]
    pub name: String,
    /// Inclusive start in seconds.
    pub start: f64,
    /// Exclusive end in seconds.
    pub end: f64,
    /// Free-standing captions (title and sub-lines).
    #[serde(default)]
    pub captions: Vec<Caption>,
    /// Optional staggered bullet list drawn below the captions.
    #[serde(default)]
    pub bullets: Option<BulletList>,
}

/// A single horizontally centred line of text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Caption {
    /// Text to draw.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Vertical centre as a fraction of canvas height.
    pub y: f64,
    /// CSS-style font weight.
    #[serde(default = "default_weight")]
    pub weight: u16,
    /// Extra space between characters, in pixels.
    #[serde(default)]
    pub letter_spacing: f32,
    /// Fill color (straight alpha).
    #[serde(default = "default_color")]
    pub color: Color,
    /// Ramp-in timing in scene-local seconds.
    #[serde(default)]
    pub reveal: Reveal,
    /// Optional partial fade after the reveal.
    #[serde(default)]
    pub fade_out: Option<FadeOut>,
}

/// Bullet list whose items reveal one after another.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulletList {
    /// Item texts, without the marker.
    pub items: Vec<String>,
    /// Vertical centre of the first item as a fraction of canvas height.
    pub y_start: f64,
    /// Distance between item centres in pixels.
    #[serde(default = "default_line_height")]
    pub line_height_px: f64,
    /// Font size in pixels.
    #[serde(default = "default_bullet_size")]
    pub size_px: f32,
    /// CSS-style font weight.
    #[serde(default = "default_bullet_weight")]
    pub weight: u16,
    /// Delay added per item index, in seconds.
    #[serde(default = "default_stagger")]
    pub stagger: f64,
    /// Ramp length of each item, in seconds.
    #[serde(default = "default_ramp")]
    pub ramp: f64,
    /// Ramp curve.
    #[serde(default)]
    pub ease: Ease,
    /// Marker prefixed to each item.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Fill color (straight alpha).
    #[serde(default = "default_color")]
    pub color: Color,
}

impl BulletList {
    /// Reveal timing of item `i`.
    pub fn item_reveal(&self, i: usize) -> Reveal {
        Reveal::ramp(i as f64 * self.stagger, self.ramp, self.ease)
    }

    /// Display text of item `i` including the marker.
    pub fn item_text(&self, i: usize) -> Option<String> {
        self.items.get(i).map(|it| {
            if self.marker.is_empty() {
                it.clone()
            } else {
                format!("{} {it}", self.marker)
            }
        })
    }
}

/// Animated diagonal gradient with a radial highlight and a vignette band.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Background {
    /// Hue range (degrees) of the top-left stop, traversed as `shift` goes 0 -> 1.
    pub hue_start: [f64; 2],
    /// Saturation/lightness of the top-left stop.
    pub sl_start: [f64; 2],
    /// Hue range (degrees) of the bottom-right stop, traversed as `shift` goes 1 -> 0.
    pub hue_end: [f64; 2],
    /// Saturation/lightness of the bottom-right stop.
    pub sl_end: [f64; 2],
    /// `shift = sin(t * speed) * amplitude + offset`.
    pub shift_speed: f64,
    /// See `shift_speed`.
    pub shift_amplitude: f64,
    /// See `shift_speed`.
    pub shift_offset: f64,
    /// Highlight centre as fractions of width/height.
    pub highlight_center: [f64; 2],
    /// Radius in pixels inside which the highlight is at full strength.
    pub highlight_inner_radius: f64,
    /// White alpha at the highlight centre.
    pub highlight_alpha: f64,
    /// Width in pixels of the border stroke (half of it lands inside the frame).
    pub vignette_width: f64,
    /// Black alpha of the border stroke.
    pub vignette_alpha: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            hue_start: [210.0, 260.0],
            sl_start: [0.60, 0.14],
            hue_end: [260.0, 300.0],
            sl_end: [0.55, 0.10],
            shift_speed: 0.2,
            shift_amplitude: 0.2,
            shift_offset: 0.2,
            highlight_center: [0.5, 0.35],
            highlight_inner_radius: 50.0,
            highlight_alpha: 0.06,
            vignette_width: 60.0,
            vignette_alpha: 0.35,
        }
    }
}

impl Background {
    /// Hue shift factor at time `t`.
    pub fn shift(&self, t: f64) -> f64 {
        (t * self.shift_speed).sin() * self.shift_amplitude + self.shift_offset
    }

    /// The two gradient stop colors at time `t`.
    pub fn stops(&self, t: f64) -> [Color; 2] {
        let s = self.shift(t);
        let [h0, h1] = self.hue_start;
        let [h2, h3] = self.hue_end;
        [
            Color::hsl(lerp(h0, h1, s), self.sl_start[0], self.sl_start[1]),
            Color::hsl(lerp(h2, h3, 1.0 - s), self.sl_end[0], self.sl_end[1]),
        ]
    }
}

impl Timeline {
    /// Parse and validate a timeline from JSON.
    pub fn from_json_str(s: &str) -> AdResult<Self> {
        let tl: Self = serde_json::from_str(s)?;
        tl.validate()?;
        Ok(tl)
    }

    /// Total length in seconds (end of the last scene).
    pub fn duration(&self) -> f64 {
        self.scenes.last().map(|s| s.end).unwrap_or(0.0)
    }

    /// Scene boundaries: every start followed by the final end.
    pub fn window_bounds(&self) -> Vec<f64> {
        let mut out: Vec<f64> = self.scenes.iter().map(|s| s.start).collect();
        if let Some(last) = self.scenes.last() {
            out.push(last.end);
        }
        out
    }

    /// Fold `t` into `[0, duration)`.
    ///
    /// Negative and overlong values wrap, which is what the looping preview relies on.
    pub fn wrap(&self, t: f64) -> f64 {
        let d = self.duration();
        if d <= 0.0 || !t.is_finite() {
            return 0.0;
        }
        let w = t.rem_euclid(d);
        // rem_euclid can round up to `d` for tiny negative inputs.
        if w >= d { 0.0 } else { w }
    }

    /// Scene index containing wrapped `t`, and the scene-local time.
    pub fn scene_at(&self, t: f64) -> Option<(usize, f64)> {
        let t = self.wrap(t);
        let idx = self.scenes.iter().position(|s| t < s.end)?;
        Some((idx, t - self.scenes[idx].start))
    }

    /// Check the partition invariant and every caption's parameters.
    pub fn validate(&self) -> AdResult<()> {
        let Some(first) = self.scenes.first() else {
            return Err(AdError::validation("timeline must contain at least one scene"));
        };
        if first.start != 0.0 {
            return Err(AdError::validation("first scene must start at 0"));
        }

        let mut prev_end: Option<f64> = None;
        for (i, scene) in self.scenes.iter().enumerate() {
            let what = scene_label(i, scene);
            if !scene.start.is_finite() || !scene.end.is_finite() {
                return Err(AdError::validation(format!(
                    "{what}: start/end must be finite"
                )));
            }
            if scene.end <= scene.start {
                return Err(AdError::validation(format!(
                    "{what}: end must be greater than start"
                )));
            }
            if let Some(pe) = prev_end
                && scene.start != pe
            {
                return Err(AdError::validation(format!(
                    "{what}: starts at {} but previous scene ends at {pe} (scenes must be contiguous)",
                    scene.start
                )));
            }
            prev_end = Some(scene.end);

            for (j, c) in scene.captions.iter().enumerate() {
                validate_caption(&format!("{what} caption {j}"), c)?;
            }
            if let Some(b) = &scene.bullets {
                validate_bullets(&format!("{what} bullets"), b)?;
            }
        }
        Ok(())
    }
}

fn scene_label(i: usize, scene: &Scene) -> String {
    if scene.name.is_empty() {
        format!("scene {i}")
    } else {
        format!("scene {i} ('{}')", scene.name)
    }
}

fn validate_text_style(what: &str, size_px: f32, weight: u16, spacing: f32) -> AdResult<()> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(AdError::validation(format!(
            "{what}: size_px must be finite and > 0"
        )));
    }
    if !(1..=1000).contains(&weight) {
        return Err(AdError::validation(format!(
            "{what}: weight must be in 1..=1000"
        )));
    }
    if !spacing.is_finite() {
        return Err(AdError::validation(format!(
            "{what}: letter_spacing must be finite"
        )));
    }
    Ok(())
}

fn validate_caption(what: &str, c: &Caption) -> AdResult<()> {
    validate_text_style(what, c.size_px, c.weight, c.letter_spacing)?;
    if !c.y.is_finite() {
        return Err(AdError::validation(format!("{what}: y must be finite")));
    }
    c.reveal.validate(what)?;
    if let Some(f) = &c.fade_out {
        f.validate(what)?;
    }
    Ok(())
}

fn validate_bullets(what: &str, b: &BulletList) -> AdResult<()> {
    validate_text_style(what, b.size_px, b.weight, 0.0)?;
    if !b.y_start.is_finite() || !b.line_height_px.is_finite() {
        return Err(AdError::validation(format!(
            "{what}: y_start/line_height_px must be finite"
        )));
    }
    for i in 0..b.items.len() {
        b.item_reveal(i).validate(what)?;
    }
    Ok(())
}

fn default_weight() -> u16 {
    700
}

fn default_bullet_weight() -> u16 {
    500
}

fn default_bullet_size() -> f32 {
    28.0
}

fn default_line_height() -> f64 {
    44.0
}

fn default_stagger() -> f64 {
    0.4
}

fn default_ramp() -> f64 {
    0.6
}

fn default_marker() -> String {
    "\u{2022}".to_owned()
}

fn default_color() -> Color {
    Color::WHITE
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
