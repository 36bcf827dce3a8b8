use std::collections::HashMap;

use crate::foundation::core::Canvas;
use crate::foundation::error::{AdError, AdResult};
use crate::render::background::paint_background;
use crate::render::backend::{FrameRGBA, FrameSource};
use crate::render::compose::premul_over_in_place;
use crate::render::text::{FontBook, LineStyle, TextBrush, TextLayoutEngine};
use crate::scene::eval::{CaptionDraw, CaptionKey, FramePlan, evaluate};
use crate::scene::model::Timeline;

struct CachedText {
    text: String,
    layout: parley::Layout<TextBrush>,
    font: vello_cpu::peniko::FontData,
    width: f64,
    height: f64,
}

/// CPU implementation of the timeline renderer.
///
/// Each call to [`FrameSource::render_frame`] repaints the whole frame: the background is computed
/// per pixel, captions are rasterized by `vello_cpu` into a transparent layer, and the layer is
/// composited on top. Text layouts are cached per caption slot since only their opacity varies with
/// time.
pub struct TimelineRenderer {
    timeline: Timeline,
    canvas: Canvas,
    fonts: FontBook,

    text_engine: TextLayoutEngine,
    text_cache: HashMap<CaptionKey, CachedText>,

    ctx: vello_cpu::RenderContext,
    layer: vello_cpu::Pixmap,
    frame: Vec<u8>,
}

impl TimelineRenderer {
    /// Build a renderer over a validated timeline.
    ///
    /// Fails with [`AdError::SurfaceUnavailable`] if the canvas cannot back a raster surface, and
    /// with [`AdError::Validation`] if the timeline breaks its invariants.
    pub fn new(timeline: Timeline, canvas: Canvas, fonts: FontBook) -> AdResult<Self> {
        timeline.validate()?;
        let (w, h) = canvas.raster_dims()?;
        Ok(Self {
            timeline,
            canvas,
            fonts,
            text_engine: TextLayoutEngine::new(),
            text_cache: HashMap::new(),
            ctx: vello_cpu::RenderContext::new(w, h),
            layer: vello_cpu::Pixmap::new(w, h),
            frame: Vec::new(),
        })
    }

    /// The timeline being rendered.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Resolve the draw plan for `t` without rasterizing.
    pub fn plan(&self, t: f64) -> AdResult<FramePlan> {
        evaluate(&self.timeline, self.canvas, t)
    }

    fn ensure_text(&mut self, c: &CaptionDraw) -> AdResult<()> {
        let stale = self
            .text_cache
            .get(&c.key)
            .is_none_or(|cached| cached.text != c.text);
        if stale {
            let face = self.fonts.face_for(c.weight);
            let [r, g, b, a] = c.color.to_rgba8();
            let layout = self.text_engine.layout_line(
                &c.text,
                face,
                LineStyle {
                    size_px: c.size_px,
                    weight: c.weight,
                    letter_spacing: c.letter_spacing,
                    brush: TextBrush { r, g, b, a },
                },
            )?;
            let cached = CachedText {
                text: c.text.clone(),
                width: tracked_width(f64::from(layout.width()), c.letter_spacing, &c.text),
                height: f64::from(layout.height()),
                layout,
                font: face.font_data(),
            };
            self.text_cache.insert(c.key, cached);
        }
        Ok(())
    }

    fn draw_caption(&mut self, c: &CaptionDraw) -> AdResult<()> {
        let canvas_w = f64::from(self.canvas.width);
        self.ensure_text(c)?;
        let t = self
            .text_cache
            .get(&c.key)
            .ok_or_else(|| AdError::surface("text layout cache miss"))?;
        let ctx = &mut self.ctx;

        let x0 = (canvas_w - t.width) / 2.0;
        let y0 = c.center_y - t.height / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x0, y0)));
        let [r, g, b, a] = c.color.to_rgba8();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));

        let alpha = c.alpha.clamp(0.0, 1.0) as f32;
        if alpha < 1.0 {
            ctx.push_opacity_layer(alpha);
        }
        for line in t.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&t.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        if alpha < 1.0 {
            ctx.pop_layer();
        }
        Ok(())
    }
}

/// Visible width of a tracked line: Parley also adds the spacing after the last glyph, so one gap
/// is taken back before centring.
fn tracked_width(advance: f64, letter_spacing: f32, text: &str) -> f64 {
    if text.is_empty() {
        advance
    } else {
        (advance - f64::from(letter_spacing)).max(0.0)
    }
}

impl FrameSource for TimelineRenderer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn render_frame(&mut self, t: f64) -> AdResult<FrameRGBA> {
        let plan = self.plan(t)?;

        paint_background(&self.timeline.background, plan.t, self.canvas, &mut self.frame);

        self.layer.data_as_u8_slice_mut().fill(0);
        self.ctx.reset();
        for c in plan.visible() {
            self.draw_caption(c)?;
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.layer);

        premul_over_in_place(&mut self.frame, self.layer.data_as_u8_slice())?;

        Ok(FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.frame.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
