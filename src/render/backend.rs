use crate::foundation::core::Canvas;
use crate::foundation::error::AdResult;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the renderer always produces opaque pixels, so the bytes are
/// also valid straight RGBA.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Straight RGBA8 pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Anything that can paint the frame for timeline time `t`.
///
/// Implementations must be deterministic in `t`: the capture driver relies on it to produce the
/// same export on every run, whatever the wall-clock pacing was.
pub trait FrameSource {
    /// Output dimensions.
    fn canvas(&self) -> Canvas;

    /// Clear the surface and draw the frame at `t`.
    fn render_frame(&mut self, t: f64) -> AdResult<FrameRGBA>;
}
