//! The card raster surface.
//!
//! Every render owns a fresh [`CardSurface`]; nothing is pooled or shared
//! between calls, so two renders never observe each other's draw state.

use kurbo::PathEl;

use crate::assets::CardImage;
use crate::render::color::Rgba8;

/// Card width in pixels.
pub const CARD_WIDTH: u16 = 800;
/// Card height in pixels.
pub const CARD_HEIGHT: u16 = 300;

/// A finished card as RGBA8 pixels.
///
/// Pixels are premultiplied alpha, tightly packed, row-major.
#[derive(Clone, Debug)]
pub struct CardPixels {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

/// A CPU raster target plus the draw-state conventions used by every
/// painting helper: callers set transform and paint, draw, then restore
/// the context to a neutral state via [`reset_draw_state`].
pub struct CardSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl CardSurface {
    /// A fresh card-sized surface.
    pub fn new() -> Self {
        Self::with_size(CARD_WIDTH, CARD_HEIGHT)
    }

    pub(crate) fn with_size(width: u16, height: u16) -> Self {
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.reset();
        Self { ctx, width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    /// Flush all recorded draws into a pixmap, consuming the surface.
    pub(crate) fn finish(mut self) -> vello_cpu::Pixmap {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap_to_transparent(&mut pixmap);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }

    /// Flush all recorded draws and read the pixels back.
    pub fn into_pixels(self) -> CardPixels {
        let width = u32::from(self.width);
        let height = u32::from(self.height);
        let pixmap = self.finish();
        CardPixels {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

impl Default for CardSurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Restore neutral draw state: normal blending, identity transforms.
pub(crate) fn reset_draw_state(ctx: &mut vello_cpu::RenderContext) {
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

pub(crate) fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

pub(crate) fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn rect_to_cpu(r: kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

pub(crate) fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Flatten any kurbo shape into a fillable path.
pub(crate) fn shape_to_cpu_path(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        out.push(el);
    }
    out
}

/// Rasterize a path silhouette in the given color on a transparent
/// `width` x `height` pixmap.
pub(crate) fn render_path_silhouette(
    path: &vello_cpu::kurbo::BezPath,
    width: u16,
    height: u16,
    color: Rgba8,
) -> vello_cpu::Pixmap {
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.reset();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_peniko());
    ctx.fill_path(path);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    clear_pixmap_to_transparent(&mut pixmap);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap
}

/// Rasterize `image` stretched over the whole `width` x `height` pixmap.
pub(crate) fn render_stretched_image(
    image: &CardImage,
    width: u16,
    height: u16,
) -> vello_cpu::Pixmap {
    let sx = f64::from(width) / f64::from(image.width().max(1));
    let sy = f64::from(height) / f64::from(image.height().max(1));

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.reset();
    ctx.set_transform(affine_to_cpu(kurbo::Affine::scale_non_uniform(sx, sy)));
    ctx.set_paint(image.paint());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(image.width()),
        f64::from(image.height()),
    ));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    clear_pixmap_to_transparent(&mut pixmap);
    ctx.render_to_pixmap(&mut pixmap);
    pixmap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_surface_finishes_transparent() {
        let surface = CardSurface::with_size(4, 4);
        let pixmap = surface.finish();
        assert!(pixmap.data_as_u8_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn card_surface_has_fixed_dimensions() {
        let surface = CardSurface::new();
        assert_eq!(surface.width(), CARD_WIDTH);
        assert_eq!(surface.height(), CARD_HEIGHT);
    }

    #[test]
    fn silhouette_covers_interior_only() {
        let path = shape_to_cpu_path(&kurbo::Rect::new(2.0, 2.0, 6.0, 6.0));
        let pixmap = render_path_silhouette(&path, 8, 8, Rgba8::rgb(255, 255, 255));
        let bytes = pixmap.data_as_u8_slice();

        let px = |x: usize, y: usize| {
            let i = (y * 8 + x) * 4;
            [bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]
        };
        assert_eq!(px(4, 4), [255, 255, 255, 255]);
        assert_eq!(px(0, 0), [0, 0, 0, 0]);
        assert_eq!(px(7, 7), [0, 0, 0, 0]);
    }

    #[test]
    fn stretched_image_fills_target() {
        let image = CardImage::from_rgba8(vec![0, 200, 0, 255], 1, 1).unwrap();
        let pixmap = render_stretched_image(&image, 6, 3);
        let bytes = pixmap.data_as_u8_slice();
        for px in bytes.chunks_exact(4) {
            assert_eq!(px, [0, 200, 0, 255]);
        }
    }
}
