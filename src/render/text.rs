//! Text shaping and painting.
//!
//! Shaping goes through Parley; painted glyphs go through the surface's
//! glyph runs. Text is painted best-effort: a layout failure or an absent
//! font skips the draw instead of failing the card.

use std::sync::Arc;

use crate::assets::font::{FontFace, FontSet};
use crate::foundation::error::{WelcardError, WelcardResult};
use crate::render::color::Rgba8;
use crate::render::surface::{CardSurface, affine_to_cpu, reset_draw_state};

/// RGBA8 brush color carried through Parley layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single run of plain text.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> WelcardResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(WelcardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            WelcardError::validation("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| WelcardError::validation("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(layout)
    }
}

/// Which face of the resolved font set a draw uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FontRole {
    Regular,
    Bold,
}

/// Horizontal anchoring for a drawn line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// `x` is the left edge of the text.
    Left,
    /// `x` is the horizontal midpoint of the text.
    Center,
}

struct LoadedFace {
    bytes: Arc<Vec<u8>>,
    font: vello_cpu::peniko::FontData,
}

impl LoadedFace {
    fn new(face: &FontFace) -> Self {
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(face.bytes.as_ref().clone()),
            face.index,
        );
        Self {
            bytes: Arc::clone(&face.bytes),
            font,
        }
    }
}

/// Paints single lines of text onto a card surface.
pub(crate) struct TextPainter {
    engine: TextLayoutEngine,
    regular: Option<LoadedFace>,
    bold: Option<LoadedFace>,
}

impl TextPainter {
    pub(crate) fn new(fonts: &FontSet) -> Self {
        Self {
            engine: TextLayoutEngine::new(),
            regular: fonts.regular.as_ref().map(LoadedFace::new),
            bold: fonts.bold.as_ref().map(LoadedFace::new),
        }
    }

    /// Paint one line with its baseline at `baseline_y`. Missing faces and
    /// layout failures degrade to skipping the line.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw_line(
        &mut self,
        surface: &mut CardSurface,
        text: &str,
        role: FontRole,
        size_px: f32,
        color: Rgba8,
        x: f64,
        baseline_y: f64,
        anchor: Anchor,
    ) {
        if text.is_empty() {
            return;
        }
        let face = match role {
            FontRole::Bold => self.bold.as_ref().or(self.regular.as_ref()),
            FontRole::Regular => self.regular.as_ref().or(self.bold.as_ref()),
        };
        let Some(face) = face else {
            tracing::debug!(text, "no usable font face, skipping text");
            return;
        };

        let layout = match self
            .engine
            .layout_plain(text, &face.bytes, size_px, color.into())
        {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(text, error = %e, "text layout failed, skipping text");
                return;
            }
        };

        let Some(run_baseline) = first_run_baseline(&layout) else {
            return;
        };
        let anchor_x = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - f64::from(layout.width()) / 2.0,
        };

        let ctx = surface.ctx_mut();
        ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((
            anchor_x,
            baseline_y - f64::from(run_baseline),
        ))));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&face.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        reset_draw_state(ctx);
    }
}

fn first_run_baseline(layout: &parley::Layout<TextBrushRgba8>) -> Option<f32> {
    for line in layout.lines() {
        for item in line.items() {
            if let parley::layout::PositionedLayoutItem::GlyphRun(run) = item {
                return Some(run.baseline());
            }
        }
    }
    None
}
