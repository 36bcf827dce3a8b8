use crate::animation::reveal::caption_alpha;
use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{AdError, AdResult};
use crate::scene::model::Timeline;

/// Stable identity of a caption slot, used to cache its text layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaptionKey {
    /// Scene index.
    pub scene: usize,
    /// Caption slot within the scene; bullet items follow the free captions.
    pub slot: usize,
}

/// One caption resolved for a specific instant.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionDraw {
    /// Layout cache key.
    pub key: CaptionKey,
    /// Text including any bullet marker.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// CSS-style weight.
    pub weight: u16,
    /// Extra space between characters in pixels.
    pub letter_spacing: f32,
    /// Fill color before `alpha` is applied.
    pub color: Color,
    /// Vertical centre in pixels.
    pub center_y: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// Everything the raster stage needs to paint one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Wrapped timeline time.
    pub t: f64,
    /// Active scene index.
    pub scene: usize,
    /// Scene-local time.
    pub t_local: f64,
    /// Background gradient stops at `t`.
    pub stops: [Color; 2],
    /// Captions of the active scene in draw order, including invisible ones.
    pub captions: Vec<CaptionDraw>,
}

impl FramePlan {
    /// Captions with non-zero opacity.
    pub fn visible(&self) -> impl Iterator<Item = &CaptionDraw> {
        self.captions.iter().filter(|c| c.alpha > 0.0)
    }
}

/// Resolve the frame at `t` (taken modulo the timeline duration).
///
/// Pure: the same `timeline`, `canvas` and wrapped `t` always give the same plan.
pub fn evaluate(timeline: &Timeline, canvas: Canvas, t: f64) -> AdResult<FramePlan> {
    let t = timeline.wrap(t);
    let (scene_idx, t_local) = timeline
        .scene_at(t)
        .ok_or_else(|| AdError::validation("timeline has no scenes"))?;
    let scene = &timeline.scenes[scene_idx];
    let h = f64::from(canvas.height);

    let mut captions = Vec::with_capacity(
        scene.captions.len() + scene.bullets.as_ref().map_or(0, |b| b.items.len()),
    );
    for (slot, c) in scene.captions.iter().enumerate() {
        captions.push(CaptionDraw {
            key: CaptionKey {
                scene: scene_idx,
                slot,
            },
            text: c.text.clone(),
            size_px: c.size_px,
            weight: c.weight,
            letter_spacing: c.letter_spacing,
            color: c.color,
            center_y: h * c.y,
            alpha: caption_alpha(&c.reveal, c.fade_out.as_ref(), t_local),
        });
    }

    if let Some(b) = &scene.bullets {
        let base = scene.captions.len();
        for i in 0..b.items.len() {
            let Some(text) = b.item_text(i) else {
                continue;
            };
            captions.push(CaptionDraw {
                key: CaptionKey {
                    scene: scene_idx,
                    slot: base + i,
                },
                text,
                size_px: b.size_px,
                weight: b.weight,
                letter_spacing: 0.0,
                color: b.color,
                center_y: h * b.y_start + i as f64 * b.line_height_px,
                alpha: b.item_reveal(i).opacity(t_local),
            });
        }
    }

    Ok(FramePlan {
        t,
        scene: scene_idx,
        t_local,
        stops: timeline.background.stops(t),
        captions,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/eval.rs"]
mod tests;
