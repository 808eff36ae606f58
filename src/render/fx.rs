//! Flat fills, image blits, gradients and blurred glows.
//!
//! Every helper leaves the surface in neutral draw state, so theme code can
//! chain them freely.

use kurbo::Shape;

use crate::assets::CardImage;
use crate::assets::decode::image_from_premul_bytes;
use crate::foundation::error::{WelcardError, WelcardResult};
use crate::render::color::Rgba8;
use crate::render::surface::{
    CardSurface, affine_to_cpu, bezpath_to_cpu, rect_to_cpu, render_path_silhouette,
    reset_draw_state, shape_to_cpu_path,
};

pub(crate) fn fill_rect(surface: &mut CardSurface, rect: kurbo::Rect, color: Rgba8) {
    let ctx = surface.ctx_mut();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_peniko());
    ctx.fill_rect(&rect_to_cpu(rect));
    reset_draw_state(ctx);
}

pub(crate) fn fill_shape(surface: &mut CardSurface, shape: &impl Shape, color: Rgba8) {
    let path = shape_to_cpu_path(shape);
    let ctx = surface.ctx_mut();
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_peniko());
    ctx.fill_path(&path);
    reset_draw_state(ctx);
}

/// Fill the band of `thickness` just inside `outer`, as four strips.
pub(crate) fn frame_rect(
    surface: &mut CardSurface,
    outer: kurbo::Rect,
    thickness: f64,
    color: Rgba8,
) {
    if thickness <= 0.0 {
        return;
    }
    let t = thickness;
    if t * 2.0 >= outer.width() || t * 2.0 >= outer.height() {
        fill_rect(surface, outer, color);
        return;
    }
    let top = kurbo::Rect::new(outer.x0, outer.y0, outer.x1, outer.y0 + t);
    let bottom = kurbo::Rect::new(outer.x0, outer.y1 - t, outer.x1, outer.y1);
    let left = kurbo::Rect::new(outer.x0, outer.y0 + t, outer.x0 + t, outer.y1 - t);
    let right = kurbo::Rect::new(outer.x1 - t, outer.y0 + t, outer.x1, outer.y1 - t);
    for strip in [top, bottom, left, right] {
        fill_rect(surface, strip, color);
    }
}

/// Stretch `image` over `dst` with no mask.
pub fn blit_image(surface: &mut CardSurface, image: &CardImage, dst: kurbo::Rect) {
    let iw = f64::from(image.width());
    let ih = f64::from(image.height());
    if iw <= 0.0 || ih <= 0.0 || dst.width() <= 0.0 || dst.height() <= 0.0 {
        return;
    }
    let tr = kurbo::Affine::translate((dst.x0, dst.y0))
        * kurbo::Affine::scale_non_uniform(dst.width() / iw, dst.height() / ih);

    let ctx = surface.ctx_mut();
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(image.paint());
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
    reset_draw_state(ctx);
}

/// Fill `rect` with an axial gradient running from `start` to `end` (both in
/// card coordinates). Stops are `(t, color)` pairs with ascending `t` in 0..=1.
pub(crate) fn fill_gradient(
    surface: &mut CardSurface,
    rect: kurbo::Rect,
    start: kurbo::Point,
    end: kurbo::Point,
    stops: &[(f32, Rgba8)],
) -> WelcardResult<()> {
    if stops.is_empty() {
        return Err(WelcardError::validation("gradient needs at least one stop"));
    }
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Ok(());
    }
    let w = rect.width().ceil().max(1.0) as u32;
    let h = rect.height().ceil().max(1.0) as u32;

    let premul: Vec<(f32, [f32; 4])> = stops
        .iter()
        .map(|&(t, c)| {
            let p = c.to_premul();
            (
                t,
                [
                    f32::from(p[0]),
                    f32::from(p[1]),
                    f32::from(p[2]),
                    f32::from(p[3]),
                ],
            )
        })
        .collect();

    let d = end - start;
    let denom = d.x * d.x + d.y * d.y;
    let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
    for y in 0..h {
        for x in 0..w {
            let px = rect.x0 + f64::from(x) + 0.5;
            let py = rect.y0 + f64::from(y) + 0.5;
            let t = if denom <= 0.0 {
                0.0
            } else {
                ((((px - start.x) * d.x + (py - start.y) * d.y) / denom).clamp(0.0, 1.0)) as f32
            };
            let c = sample_stops(t, &premul);
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&c);
        }
    }

    let img = image_from_premul_bytes(&bytes, w, h)?;
    let ctx = surface.ctx_mut();
    ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((rect.x0, rect.y0))));
    ctx.set_paint(img);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));
    reset_draw_state(ctx);
    Ok(())
}

fn sample_stops(t: f32, stops: &[(f32, [f32; 4])]) -> [u8; 4] {
    fn to_u8(v: f32) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }

    if t <= stops[0].0 {
        let c = stops[0].1;
        return [to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3])];
    }
    for pair in stops.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let span = (t1 - t0).max(f32::EPSILON);
            let k = (t - t0) / span;
            let lerp = |a: f32, b: f32| a + (b - a) * k;
            return [
                to_u8(lerp(c0[0], c1[0])),
                to_u8(lerp(c0[1], c1[1])),
                to_u8(lerp(c0[2], c1[2])),
                to_u8(lerp(c0[3], c1[3])),
            ];
        }
    }
    let c = stops[stops.len() - 1].1;
    [to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3])]
}

/// Paint a gaussian-blurred silhouette of `shape`, shifted by `offset`.
/// `blur_px` follows the usual shadow-blur convention: kernel radius is
/// `blur_px` (rounded) and sigma is half of it. Zero blur paints the plain
/// silhouette.
pub(crate) fn blurred_shape(
    surface: &mut CardSurface,
    shape: &impl Shape,
    color: Rgba8,
    blur_px: f64,
    offset: (f64, f64),
) -> WelcardResult<()> {
    if !blur_px.is_finite() || blur_px < 0.0 {
        return Err(WelcardError::validation("blur_px must be finite and >= 0"));
    }
    let radius = blur_px.round() as u32;
    let sigma = ((blur_px / 2.0) as f32).max(0.1);

    let bbox = shape.bounding_box();
    if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
        return Ok(());
    }
    let pad = f64::from(radius);
    let x0 = (bbox.x0 - pad).floor();
    let y0 = (bbox.y0 - pad).floor();
    let w = dim_u16((bbox.x1 + pad).ceil() - x0);
    let h = dim_u16((bbox.y1 + pad).ceil() - y0);

    let mut path = shape.to_path(0.1);
    path.apply_affine(kurbo::Affine::translate((-x0, -y0)));
    let silhouette = render_path_silhouette(&bezpath_to_cpu(&path), w, h, color);

    let blurred = blur_rgba8_premul(
        silhouette.data_as_u8_slice(),
        u32::from(w),
        u32::from(h),
        radius,
        sigma,
    )?;
    let paint = image_from_premul_bytes(&blurred, u32::from(w), u32::from(h))?;

    let ctx = surface.ctx_mut();
    ctx.set_transform(affine_to_cpu(kurbo::Affine::translate((
        x0 + offset.0,
        y0 + offset.1,
    ))));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(w),
        f64::from(h),
    ));
    reset_draw_state(ctx);
    Ok(())
}

fn dim_u16(v: f64) -> u16 {
    let v = v.max(1.0);
    if v >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        v as u16
    }
}

pub(crate) fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> WelcardResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| WelcardError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(WelcardError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> WelcardResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![1 << 16]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(WelcardError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let mut weights_f = Vec::<f64>::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    let sigma = sigma as f64;
    let denom = 2.0 * sigma * sigma;
    for i in -r..=r {
        let x = i as f64;
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }
    if sum <= 0.0 {
        return Err(WelcardError::render("gaussian kernel sum is zero"));
    }

    // Q16 weights must sum to exactly 1<<16; rounding drift lands on the
    // middle weight.
    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round() as i64;
        let q = q.clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let target: i64 = 65536;
    let delta = target - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        let mid_val = i64::from(weights[mid]);
        let new_mid = (mid_val + delta).clamp(0, 65536);
        weights[mid] = new_mid as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dx = ki as i32 - radius;
                let sx = (x + dx).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += (kw as u64) * (src[idx + c] as u64);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let dy = ki as i32 - radius;
                let sy = (y + dy).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += (kw as u64) * (src[idx + c] as u64);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}
