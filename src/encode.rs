//! PNG encoding of finished card pixmaps.

use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{WelcardError, WelcardResult};

/// Encode a rendered pixmap as PNG bytes.
///
/// The pixmap carries premultiplied RGBA while PNG stores straight alpha,
/// so the copy is unpremultiplied before encoding.
pub(crate) fn png_from_pixmap(pixmap: &vello_cpu::Pixmap) -> WelcardResult<Vec<u8>> {
    let mut straight = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut straight);

    let width = u32::from(pixmap.width());
    let height = u32::from(pixmap.height());
    let img = image::RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| WelcardError::render("pixmap byte length does not match dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode card as png")?;
    Ok(buf)
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::clear_pixmap_to_transparent;

    #[test]
    fn encoded_png_round_trips_dimensions() {
        let mut pixmap = vello_cpu::Pixmap::new(5, 3);
        clear_pixmap_to_transparent(&mut pixmap);
        let bytes = png_from_pixmap(&pixmap).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 3);
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        // 128/255 alpha over a premultiplied mid gray.
        let mut px = vec![100, 50, 25, 128];
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px[3], 128);
        assert_eq!(px[0], ((100u16 * 255 + 64) / 128) as u8);
        assert_eq!(px[1], ((50u16 * 255 + 64) / 128) as u8);
        assert_eq!(px[2], ((25u16 * 255 + 64) / 128) as u8);
    }

    #[test]
    fn unpremultiply_zero_alpha_clears_rgb() {
        let mut px = vec![9, 9, 9, 0];
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px, vec![0, 0, 0, 0]);
    }
}
