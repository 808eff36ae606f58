//! The modern layout: dark diagonal gradient with corner discs, a glowing
//! centered avatar and a single greeting line.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const GRADIENT_TOP: Rgba8 = Rgba8::rgb(0x0F, 0x20, 0x27);
const GRADIENT_MID: Rgba8 = Rgba8::rgb(0x20, 0x3A, 0x43);
const GRADIENT_BOTTOM: Rgba8 = Rgba8::rgb(0x2C, 0x53, 0x64);
const SUBTITLE_COLOR: Rgba8 = Rgba8::rgb(0xAA, 0xAA, 0xAA);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => {
            fx::blit_image(surface, bg, card_rect());
            // Dim the photo so the greeting stays readable.
            fx::fill_rect(surface, card_rect(), Rgba8::rgba(0, 0, 0, 102));
        }
        None => {
            fx::fill_gradient(
                surface,
                card_rect(),
                kurbo::Point::new(0.0, 0.0),
                kurbo::Point::new(800.0, 300.0),
                &[
                    (0.0, GRADIENT_TOP),
                    (0.5, GRADIENT_MID),
                    (1.0, GRADIENT_BOTTOM),
                ],
            )?;
            let disc = Rgba8::rgba(255, 255, 255, 26);
            fx::fill_shape(surface, &kurbo::Circle::new((800.0, 0.0), 300.0), disc);
            fx::fill_shape(surface, &kurbo::Circle::new((0.0, 300.0), 200.0), disc);
        }
    }

    fx::blurred_shape(
        surface,
        &kurbo::Circle::new((400.0, 110.0), 94.0),
        p.border,
        15.0,
        (0.0, 0.0),
    )?;
    mask::draw_circular_image(surface, inputs.avatar, 400.0, 110.0, 90.0)?;

    let greeting = format!("{}, {}", inputs.title, inputs.username);
    inputs.text.draw_line(
        surface,
        &greeting,
        FontRole::Bold,
        50.0,
        p.text,
        400.0,
        240.0,
        Anchor::Center,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        25.0,
        SUBTITLE_COLOR,
        400.0,
        275.0,
        Anchor::Center,
    );
    Ok(())
}
