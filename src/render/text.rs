use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{AdError, AdResult};

/// Families tried, in order, when resolving a system font.
const SYSTEM_FAMILIES: &[&str] = &[
    "Segoe UI",
    "Roboto",
    "Ubuntu",
    "Cantarell",
    "Noto Sans",
    "Helvetica Neue",
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
];

/// Weights probed when building a book from system fonts.
const PROBE_WEIGHTS: &[u16] = &[400, 500, 600, 700, 800, 900];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// One loaded font face.
#[derive(Clone, Debug)]
pub struct FontFace {
    id: usize,
    weight: u16,
    index: u32,
    bytes: Arc<Vec<u8>>,
}

impl FontFace {
    /// Nominal weight of this face.
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn font_data(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            self.index,
        )
    }
}

/// Font faces available to the renderer, keyed by weight.
///
/// An empty book is not constructible: without a face there is no drawing surface for text.
#[derive(Clone, Debug)]
pub struct FontBook {
    faces: Vec<FontFace>,
}

impl FontBook {
    /// Use one font file for every weight.
    pub fn from_file(path: &Path) -> AdResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            AdError::surface(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Use in-memory font bytes for every weight.
    pub fn from_bytes(bytes: Vec<u8>) -> AdResult<Self> {
        if bytes.is_empty() {
            return Err(AdError::surface("font bytes are empty"));
        }
        Ok(Self {
            faces: vec![FontFace {
                id: 0,
                weight: 400,
                index: 0,
                bytes: Arc::new(bytes),
            }],
        })
    }

    /// Resolve sans-serif faces from the system font database.
    pub fn system() -> AdResult<Self> {
        use usvg::fontdb;

        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if db.is_empty() {
            return Err(AdError::surface("no system fonts found"));
        }

        let mut families: Vec<fontdb::Family<'_>> =
            SYSTEM_FAMILIES.iter().map(|n| fontdb::Family::Name(*n)).collect();
        families.push(fontdb::Family::SansSerif);

        let mut seen = Vec::new();
        let mut faces = Vec::new();
        for &w in PROBE_WEIGHTS {
            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(w),
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            let Some(id) = db.query(&query) else {
                continue;
            };
            if seen.contains(&id) {
                continue;
            }
            seen.push(id);
            let weight = db.face(id).map(|f| f.weight.0).unwrap_or(w);
            if let Some((bytes, index)) = db.with_face_data(id, |data, index| (data.to_vec(), index))
            {
                faces.push(FontFace {
                    id: faces.len(),
                    weight,
                    index,
                    bytes: Arc::new(bytes),
                });
            }
        }

        if faces.is_empty() {
            // No preferred family installed: fall back to whatever face comes first.
            let any = db.faces().next().map(|f| (f.id, f.weight.0));
            if let Some((id, weight)) = any
                && let Some((bytes, index)) =
                    db.with_face_data(id, |data, index| (data.to_vec(), index))
            {
                faces.push(FontFace {
                    id: 0,
                    weight,
                    index,
                    bytes: Arc::new(bytes),
                });
            }
        }

        if faces.is_empty() {
            return Err(AdError::surface("no usable system font face"));
        }
        tracing::debug!(faces = faces.len(), "resolved system fonts");
        Ok(Self { faces })
    }

    /// The face whose weight is closest to `weight` (ties go to the heavier face).
    pub fn face_for(&self, weight: u16) -> &FontFace {
        let mut best = &self.faces[0];
        for f in &self.faces[1..] {
            let d_best = best.weight.abs_diff(weight);
            let d = f.weight.abs_diff(weight);
            if d < d_best || (d == d_best && f.weight > best.weight) {
                best = f;
            }
        }
        best
    }

    /// Number of distinct faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Stateful helper for building single-line Parley layouts.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    families: HashMap<usize, String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Style of one caption line.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineStyle {
    pub(crate) size_px: f32,
    pub(crate) weight: u16,
    pub(crate) letter_spacing: f32,
    pub(crate) brush: TextBrush,
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    fn family_for(&mut self, face: &FontFace) -> AdResult<String> {
        if let Some(name) = self.families.get(&face.id) {
            return Ok(name.clone());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(face.bytes().to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| AdError::surface("no font families registered from font bytes"))?;
        let name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdError::surface("registered font family has no name"))?
            .to_string();
        self.families.insert(face.id, name.clone());
        Ok(name)
    }

    /// Shape `text` as one unwrapped line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        face: &FontFace,
        style: LineStyle,
    ) -> AdResult<parley::Layout<TextBrush>> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(AdError::validation("text size_px must be finite and > 0"));
        }
        let family = self.family_for(face)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(style.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(style.brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
