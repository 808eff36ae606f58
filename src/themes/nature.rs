//! The nature layout: teal-to-green gradient, soft sun, hill silhouettes
//! and a white-ringed circular avatar.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const SKY: Rgba8 = Rgba8::rgb(0x13, 0x4E, 0x5E);
const MEADOW: Rgba8 = Rgba8::rgb(0x71, 0xB2, 0x80);
const SUN: Rgba8 = Rgba8::rgb(0xFF, 0xF3, 0xB0);
const HILL_FAR: Rgba8 = Rgba8::rgb(0x3E, 0x7D, 0x5A);
const HILL_NEAR: Rgba8 = Rgba8::rgb(0x2F, 0x6B, 0x4F);
const RING: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
const SUBTITLE_COLOR: Rgba8 = Rgba8::rgb(0xE8, 0xF5, 0xE9);

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => {
            fx::fill_gradient(
                surface,
                card_rect(),
                kurbo::Point::new(0.0, 0.0),
                kurbo::Point::new(0.0, 300.0),
                &[(0.0, SKY), (1.0, MEADOW)],
            )?;
            fx::blurred_shape(
                surface,
                &kurbo::Circle::new((680.0, 70.0), 45.0),
                SUN.with_alpha(200),
                20.0,
                (0.0, 0.0),
            )?;
            fx::fill_shape(surface, &kurbo::Circle::new((680.0, 70.0), 30.0), SUN);
            fx::fill_shape(
                surface,
                &kurbo::Ellipse::new((200.0, 330.0), (320.0, 90.0), 0.0),
                HILL_FAR,
            );
            fx::fill_shape(
                surface,
                &kurbo::Ellipse::new((650.0, 340.0), (380.0, 100.0), 0.0),
                HILL_NEAR,
            );
        }
    }

    fx::fill_shape(surface, &kurbo::Circle::new((150.0, 150.0), 101.0), RING);
    mask::draw_circular_image(surface, inputs.avatar, 150.0, 150.0, 95.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        55.0,
        p.text,
        300.0,
        125.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.username,
        FontRole::Regular,
        40.0,
        p.text,
        300.0,
        180.0,
        Anchor::Left,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        25.0,
        SUBTITLE_COLOR,
        300.0,
        220.0,
        Anchor::Left,
    );
    Ok(())
}
