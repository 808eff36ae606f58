//! The bubble layout: pastel gradient, floating translucent bubbles and a
//! double-ringed circular avatar.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const GRADIENT_TOP: Rgba8 = Rgba8::rgb(0xFF, 0xDE, 0xE9);
const GRADIENT_BOTTOM: Rgba8 = Rgba8::rgb(0xB5, 0xFF, 0xFC);
const RING_OUTER: Rgba8 = Rgba8::rgb(0xFF, 0x9E, 0xCD);
const RING_INNER: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
const TITLE_COLOR: Rgba8 = Rgba8::rgb(0xFF, 0x6F, 0xA5);
const USERNAME_COLOR: Rgba8 = Rgba8::rgb(0x5A, 0x4A, 0x6A);
const SUBTITLE_COLOR: Rgba8 = Rgba8::rgb(0x8A, 0x7A, 0x9A);

/// Bubble centers and radii, spread so no pair overlaps the avatar or the
/// text block.
const BUBBLES: [(f64, f64, f64); 6] = [
    (90.0, 60.0, 34.0),
    (700.0, 80.0, 52.0),
    (620.0, 230.0, 26.0),
    (180.0, 250.0, 20.0),
    (760.0, 190.0, 18.0),
    (520.0, 40.0, 60.0),
];

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => {
            fx::fill_gradient(
                surface,
                card_rect(),
                kurbo::Point::new(0.0, 0.0),
                kurbo::Point::new(0.0, 300.0),
                &[(0.0, GRADIENT_TOP), (1.0, GRADIENT_BOTTOM)],
            )?;
            for (cx, cy, r) in BUBBLES {
                fx::fill_shape(
                    surface,
                    &kurbo::Circle::new((cx, cy), r),
                    RING_INNER.with_alpha(77),
                );
            }
        }
    }

    fx::fill_shape(surface, &kurbo::Circle::new((150.0, 150.0), 103.0), RING_OUTER);
    fx::fill_shape(surface, &kurbo::Circle::new((150.0, 150.0), 100.0), RING_INNER);
    mask::draw_circular_image(surface, inputs.avatar, 150.0, 150.0, 92.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        54.0,
        TITLE_COLOR,
        300.0,
        126.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.username,
        FontRole::Regular,
        40.0,
        USERNAME_COLOR,
        300.0,
        182.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        25.0,
        SUBTITLE_COLOR,
        300.0,
        222.0,
        Anchor::Left,
    );
    Ok(())
}
