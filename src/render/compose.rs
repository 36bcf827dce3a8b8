use crate::foundation::error::{AdError, AdResult};
use crate::foundation::math::mul_div255_u16;

/// Source-over of a premultiplied layer onto a premultiplied destination, in place.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> AdResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AdError::validation(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = s[3].saturating_add(mul_div255_u16(u16::from(d[3]), inv) as u8);
        for c in 0..3 {
            let dc = mul_div255_u16(u16::from(d[c]), inv) as u8;
            d[c] = s[c].saturating_add(dc);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
