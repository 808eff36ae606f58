//! The classic layout: flat background, border frame, ringed avatar on the
//! left, three lines of left-aligned text.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const SUBTITLE_COLOR: Rgba8 = Rgba8::rgb(0xCC, 0xCC, 0xCC);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => fx::fill_rect(surface, card_rect(), p.background),
    }
    fx::frame_rect(surface, card_rect(), 15.0, p.border);

    fx::fill_shape(surface, &kurbo::Circle::new((150.0, 150.0), 105.0), p.border);
    mask::draw_circular_image(surface, inputs.avatar, 150.0, 150.0, 100.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        60.0,
        p.text,
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
        190.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        25.0,
        SUBTITLE_COLOR,
        300.0,
        230.0,
        Anchor::Left,
    );
    Ok(())
}
