//! The clean layout: light panel, accent bar down the left edge, rounded
//! avatar over a soft drop shadow.
//!
//! When the background and text colors are left at their dark-card
//! defaults, this theme swaps them for a white panel with dark text.
//! Explicit overrides always win.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const LIGHT_BACKGROUND: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
const DARK_TEXT: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);
const SHADOW: Rgba8 = Rgba8::rgba(0, 0, 0, 90);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    let background = if p.background_is_default {
        LIGHT_BACKGROUND
    } else {
        p.background
    };
    let text = if p.text_is_default { DARK_TEXT } else { p.text };

    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => fx::fill_rect(surface, card_rect(), background),
    }
    fx::fill_rect(surface, kurbo::Rect::new(0.0, 0.0, 20.0, 300.0), p.border);

    fx::blurred_shape(
        surface,
        &kurbo::RoundedRect::new(60.0, 50.0, 260.0, 250.0, 20.0),
        SHADOW,
        10.0,
        (5.0, 5.0),
    )?;
    mask::draw_rounded_image(surface, inputs.avatar, 60.0, 50.0, 200.0, 200.0, 20.0)?;

    let title = inputs.title.to_uppercase();
    inputs.text.draw_line(
        surface,
        &title,
        FontRole::Bold,
        70.0,
        text,
        300.0,
        140.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.username,
        FontRole::Regular,
        40.0,
        p.border,
        300.0,
        200.0,
        Anchor::Left,
    );
    Ok(())
}
