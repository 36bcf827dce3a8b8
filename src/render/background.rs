use crate::foundation::core::Canvas;
use crate::foundation::math::clamp01;
use crate::scene::model::Background;

/// Paint the opaque background for time `t` into `out` (resized to `canvas.rgba_len()`).
///
/// Layers, bottom to top: diagonal two-stop gradient from the top-left to the bottom-right corner,
/// a white radial highlight, then a black band along the border. Pixels are sampled at their
/// centres and written as opaque RGBA8.
pub(crate) fn paint_background(bg: &Background, t: f64, canvas: Canvas, out: &mut Vec<u8>) {
    out.clear();
    out.resize(canvas.rgba_len(), 0);
    if canvas.width == 0 || canvas.height == 0 {
        return;
    }

    let [c0, c1] = bg.stops(t);
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let diag = w * w + h * h;

    let cx = w * bg.highlight_center[0];
    let cy = h * bg.highlight_center[1];
    let r0 = bg.highlight_inner_radius;
    let r1 = w.max(h);
    let ha_max = clamp01(bg.highlight_alpha);

    let band = (bg.vignette_width / 2.0).max(0.0);
    let keep = 1.0 - clamp01(bg.vignette_alpha);

    let row_bytes = canvas.width as usize * 4;
    for (y, row) in out.chunks_exact_mut(row_bytes).enumerate() {
        let py = y as f64 + 0.5;
        for (x, px_out) in row.chunks_exact_mut(4).enumerate() {
            let px = x as f64 + 0.5;

            let p = clamp01((px * w + py * h) / diag);
            let mut r = c0.r + (c1.r - c0.r) * p;
            let mut g = c0.g + (c1.g - c0.g) * p;
            let mut b = c0.b + (c1.b - c0.b) * p;

            let d = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
            let k = if r1 <= r0 {
                1.0
            } else {
                clamp01((d - r0) / (r1 - r0))
            };
            let ha = ha_max * (1.0 - k);
            r += (1.0 - r) * ha;
            g += (1.0 - g) * ha;
            b += (1.0 - b) * ha;

            if px < band || py < band || px > w - band || py > h - band {
                r *= keep;
                g *= keep;
                b *= keep;
            }

            px_out[0] = (clamp01(r) * 255.0).round() as u8;
            px_out[1] = (clamp01(g) * 255.0).round() as u8;
            px_out[2] = (clamp01(b) * 255.0).round() as u8;
            px_out[3] = 255;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
