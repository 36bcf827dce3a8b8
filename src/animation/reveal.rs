use crate::animation::ease::Ease;
use crate::foundation::error::{AdError, AdResult};
use crate::foundation::math::clamp01;

/// Opacity ramp-in for one caption, in scene-local seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reveal {
    /// Local time at which the ramp starts.
    #[serde(default)]
    pub delay: f64,
    /// Ramp length; `0` makes the caption pop in at `delay`.
    #[serde(default)]
    pub duration: f64,
    /// Curve applied to the normalized progress.
    #[serde(default)]
    pub ease: Ease,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::instant()
    }
}

impl Reveal {
    /// Visible from the first instant of the scene.
    pub fn instant() -> Self {
        Self {
            delay: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    /// Ramp from `delay` to `delay + duration` with `ease`.
    pub fn ramp(delay: f64, duration: f64, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
        }
    }

    /// Normalized progress before easing.
    pub fn progress(&self, t_local: f64) -> f64 {
        if self.duration <= 0.0 {
            return if t_local >= self.delay { 1.0 } else { 0.0 };
        }
        clamp01((t_local - self.delay) / self.duration)
    }

    /// Eased opacity in `[0, 1]`.
    pub fn opacity(&self, t_local: f64) -> f64 {
        self.ease.apply(self.progress(t_local))
    }

    pub(crate) fn validate(&self, what: &str) -> AdResult<()> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(AdError::validation(format!(
                "{what}: reveal delay must be finite and >= 0"
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AdError::validation(format!(
                "{what}: reveal duration must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

/// Partial fade applied after a caption is fully revealed.
///
/// Opacity scales from `1` at `start` down to `floor` at `start + duration`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeOut {
    /// Local time at which the fade starts.
    pub start: f64,
    /// Fade length; `0` makes it a step.
    pub duration: f64,
    /// Opacity multiplier reached at the end of the fade.
    pub floor: f64,
}

impl FadeOut {
    /// Multiplier in `[floor, 1]`.
    pub fn factor(&self, t_local: f64) -> f64 {
        let p = if self.duration <= 0.0 {
            if t_local >= self.start { 1.0 } else { 0.0 }
        } else {
            clamp01((t_local - self.start) / self.duration)
        };
        1.0 - p * (1.0 - self.floor)
    }

    pub(crate) fn validate(&self, what: &str) -> AdResult<()> {
        if !self.start.is_finite() || !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AdError::validation(format!(
                "{what}: fade_out start/duration must be finite, duration >= 0"
            )));
        }
        if !(0.0..=1.0).contains(&self.floor) {
            return Err(AdError::validation(format!(
                "{what}: fade_out floor must be in [0, 1]"
            )));
        }
        Ok(())
    }
}

/// Combined caption opacity at scene-local time `t_local`.
pub fn caption_alpha(reveal: &Reveal, fade_out: Option<&FadeOut>, t_local: f64) -> f64 {
    let a = reveal.opacity(t_local);
    match fade_out {
        Some(f) => a * f.factor(t_local),
        None => a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
