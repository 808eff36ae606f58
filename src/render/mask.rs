//! Masked image blits: circular, rounded-rect and diamond.
//!
//! A masked draw renders the stretched source and a white mask silhouette
//! into scratch pixmaps of the destination size, multiplies the source by
//! the mask alpha, and blits the result. Pixels fully inside the mask keep
//! their exact source value; pixels fully outside stay untouched.

use crate::assets::CardImage;
use crate::assets::decode::image_from_premul_bytes;
use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::{
    CardSurface, affine_to_cpu, bezpath_to_cpu, render_path_silhouette, render_stretched_image,
    reset_draw_state, shape_to_cpu_path,
};

/// Stretch `image` onto the square bounding box of the circle centered at
/// (`cx`, `cy`) with `radius`, clipped to the circle. A non-positive radius
/// draws nothing.
pub fn draw_circular_image(
    surface: &mut CardSurface,
    image: &CardImage,
    cx: f64,
    cy: f64,
    radius: f64,
) -> WelcardResult<()> {
    if radius <= 0.0 {
        return Ok(());
    }
    let side = scratch_dim(radius * 2.0);
    let path = shape_to_cpu_path(&kurbo::Circle::new((radius, radius), radius));
    masked_image_blit(surface, image, &path, cx - radius, cy - radius, side, side)
}

/// Stretch `image` onto the rect at (`x`, `y`) sized `width` x `height`,
/// clipped to rounded corners. A radius of zero (or less) is a plain
/// rectangular blit; an oversized radius clamps to half the short side.
pub fn draw_rounded_image(
    surface: &mut CardSurface,
    image: &CardImage,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> WelcardResult<()> {
    if width <= 0.0 || height <= 0.0 {
        return Ok(());
    }
    let path = if radius <= 0.0 {
        shape_to_cpu_path(&kurbo::Rect::new(0.0, 0.0, width, height))
    } else {
        let r = radius.min(width / 2.0).min(height / 2.0);
        shape_to_cpu_path(&kurbo::RoundedRect::new(0.0, 0.0, width, height, r))
    };
    masked_image_blit(
        surface,
        image,
        &path,
        x,
        y,
        scratch_dim(width),
        scratch_dim(height),
    )
}

/// Stretch `image` onto the bounding square of a diamond centered at
/// (`cx`, `cy`) whose vertices sit `half_diag` away, clipped to the diamond.
pub(crate) fn draw_diamond_image(
    surface: &mut CardSurface,
    image: &CardImage,
    cx: f64,
    cy: f64,
    half_diag: f64,
) -> WelcardResult<()> {
    if half_diag <= 0.0 {
        return Ok(());
    }
    let side = scratch_dim(half_diag * 2.0);
    let path = bezpath_to_cpu(&diamond_path(half_diag, half_diag, half_diag));
    masked_image_blit(
        surface,
        image,
        &path,
        cx - half_diag,
        cy - half_diag,
        side,
        side,
    )
}

/// Diamond outline centered at (`cx`, `cy`) with vertices `half_diag` away.
pub(crate) fn diamond_path(cx: f64, cy: f64, half_diag: f64) -> kurbo::BezPath {
    let mut p = kurbo::BezPath::new();
    p.move_to((cx, cy - half_diag));
    p.line_to((cx + half_diag, cy));
    p.line_to((cx, cy + half_diag));
    p.line_to((cx - half_diag, cy));
    p.close_path();
    p
}

fn masked_image_blit(
    surface: &mut CardSurface,
    image: &CardImage,
    mask_path: &vello_cpu::kurbo::BezPath,
    dst_x: f64,
    dst_y: f64,
    width: u16,
    height: u16,
) -> WelcardResult<()> {
    let stretched = render_stretched_image(image, width, height);
    let silhouette = render_path_silhouette(mask_path, width, height, Rgba8::rgb(255, 255, 255));

    let src = stretched.data_as_u8_slice();
    let mask = silhouette.data_as_u8_slice();
    let mut masked = vec![0u8; src.len()];
    mask_apply_alpha(src, mask, &mut masked);

    let paint = image_from_premul_bytes(&masked, u32::from(width), u32::from(height))?;
    let ctx = surface.ctx_mut();
    ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((dst_x, dst_y))));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));
    reset_draw_state(ctx);
    Ok(())
}

/// Scale premultiplied `src` by the mask's alpha channel into `dst`.
fn mask_apply_alpha(src: &[u8], mask: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), mask.len());
    debug_assert_eq!(src.len(), dst.len());

    for ((s, m), d) in src
        .chunks_exact(4)
        .zip(mask.chunks_exact(4))
        .zip(dst.chunks_exact_mut(4))
    {
        let w = u16::from(m[3]);
        d[0] = mul_div255_u8(u16::from(s[0]), w);
        d[1] = mul_div255_u8(u16::from(s[1]), w);
        d[2] = mul_div255_u8(u16::from(s[2]), w);
        d[3] = mul_div255_u8(u16::from(s[3]), w);
    }
}

fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn scratch_dim(v: f64) -> u16 {
    let v = v.ceil().max(1.0);
    if v >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        v as u16
    }
}
