//! The gaming layout: near-black backdrop with a faint grid, slanted accent
//! stripes and a rounded square avatar in a colored frame.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const BACKDROP: Rgba8 = Rgba8::rgb(0x0D, 0x0D, 0x0D);
const GRID_LINE: Rgba8 = Rgba8::rgb(0x1F, 0x1F, 0x2E);
const ACCENT: Rgba8 = Rgba8::rgb(0xE9, 0x45, 0x60);
const SUBTITLE_COLOR: Rgba8 = Rgba8::rgb(0x9A, 0x9A, 0xB0);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => {
            fx::fill_rect(surface, card_rect(), BACKDROP);
            for x in (40..800).step_by(40) {
                let x = f64::from(x);
                fx::fill_rect(surface, kurbo::Rect::new(x, 0.0, x + 1.0, 300.0), GRID_LINE);
            }
            for y in (40..300).step_by(40) {
                let y = f64::from(y);
                fx::fill_rect(surface, kurbo::Rect::new(0.0, y, 800.0, y + 1.0), GRID_LINE);
            }
        }
    }

    // Slanted stripes stay on top of custom backgrounds too.
    for k in 0..3 {
        let x0 = 420.0 + f64::from(k) * 110.0;
        let mut stripe = kurbo::BezPath::new();
        stripe.move_to((x0 + 80.0, 0.0));
        stripe.line_to((x0 + 120.0, 0.0));
        stripe.line_to((x0 + 40.0, 300.0));
        stripe.line_to((x0, 300.0));
        stripe.close_path();
        fx::fill_shape(surface, &stripe, ACCENT.with_alpha(64));
    }

    fx::fill_shape(
        surface,
        &kurbo::RoundedRect::new(49.0, 49.0, 251.0, 251.0, 32.0),
        ACCENT,
    );
    mask::draw_rounded_image(surface, inputs.avatar, 55.0, 55.0, 190.0, 190.0, 28.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        58.0,
        ACCENT,
        300.0,
        128.0,
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
        SUBTITLE_COLOR,
        300.0,
        225.0,
        Anchor::Left,
    );
    Ok(())
}
