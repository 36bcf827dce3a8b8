use crate::foundation::error::{AdError, AdResult};

/// Absolute 0-based frame index in export timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> AdResult<Self> {
        if den == 0 {
            return Err(AdError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(AdError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Re-check a value that may have come from deserialization.
    pub fn validate(self) -> AdResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Timeline time of frame `idx`, computed as `idx * den / num`.
    ///
    /// Multiplying before dividing keeps integer fps exact (`idx / 30` for 30/1).
    pub fn frame_time_secs(self, idx: FrameIndex) -> f64 {
        (idx.0 as f64 * f64::from(self.den)) / f64::from(self.num)
    }

    /// Number of frames covering `secs`, rounded to the nearest frame.
    pub fn frames_for_secs(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl Canvas {
    /// Dimensions as the `u16` pair the raster context works in.
    ///
    /// Fails for empty canvases and anything larger than `u16::MAX` on either axis.
    pub fn raster_dims(self) -> AdResult<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return Err(AdError::surface("canvas width/height must be non-zero"));
        }
        let w = u16::try_from(self.width)
            .map_err(|_| AdError::surface("canvas width exceeds u16"))?;
        let h = u16::try_from(self.height)
            .map_err(|_| AdError::surface("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Byte length of a tightly packed RGBA8 frame.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
