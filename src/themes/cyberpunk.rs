//! The cyberpunk layout: near-black gradient with neon rules and a
//! diamond-masked avatar behind a cyan glow.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const SKY: Rgba8 = Rgba8::rgb(0x05, 0x05, 0x10);
const HAZE: Rgba8 = Rgba8::rgb(0x1A, 0x0B, 0x2E);
const MAGENTA: Rgba8 = Rgba8::rgb(0xFF, 0x2A, 0x6D);
const CYAN: Rgba8 = Rgba8::rgb(0x05, 0xD9, 0xE8);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => fx::fill_gradient(
            surface,
            card_rect(),
            kurbo::Point::new(0.0, 0.0),
            kurbo::Point::new(0.0, 300.0),
            &[(0.0, SKY), (1.0, HAZE)],
        )?,
    }

    for i in 0..8 {
        let y = 20.0 + f64::from(i) * 36.0;
        let color = if i % 2 == 0 { MAGENTA } else { CYAN };
        fx::fill_rect(
            surface,
            kurbo::Rect::new(0.0, y, 800.0, y + 2.0),
            color.with_alpha(26),
        );
    }

    fx::blurred_shape(
        surface,
        &mask::diamond_path(150.0, 150.0, 99.0),
        CYAN,
        12.0,
        (0.0, 0.0),
    )?;
    mask::draw_diamond_image(surface, inputs.avatar, 150.0, 150.0, 95.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        55.0,
        CYAN,
        300.0,
        130.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.username,
        FontRole::Regular,
        40.0,
        p.text,
        300.0,
        185.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        25.0,
        MAGENTA,
        300.0,
        225.0,
        Anchor::Left,
    );
    Ok(())
}
