//! The retro layout: synthwave sunset with a striped sun and an
//! orange-ringed circular avatar, everything centered.

use crate::foundation::error::WelcardResult;
use crate::render::color::Rgba8;
use crate::render::surface::CardSurface;
use crate::render::text::{Anchor, FontRole};
use crate::render::{fx, mask};
use crate::themes::{SceneInputs, card_rect};

const SKY_TOP: Rgba8 = Rgba8::rgb(0x2B, 0x10, 0x55);
const SKY_BOTTOM: Rgba8 = Rgba8::rgb(0x75, 0x97, 0xDE);
const GROUND: Rgba8 = Rgba8::rgb(0x1A, 0x09, 0x33);
const SUN: Rgba8 = Rgba8::rgb(0xFF, 0xD3, 0x19);
const RING: Rgba8 = Rgba8::rgb(0xFF, 0x90, 0x1F);

const HORIZON_Y: f64 = 190.0;
const SUN_RADIUS: f64 = 70.0;

pub(crate) fn draw(surface: &mut CardSurface, inputs: &mut SceneInputs<'_>) -> WelcardResult<()> {
    let p = inputs.palette;
    match inputs.background {
        Some(bg) => fx::blit_image(surface, bg, card_rect()),
        None => {
            fx::fill_gradient(
                surface,
                kurbo::Rect::new(0.0, 0.0, 800.0, HORIZON_Y),
                kurbo::Point::new(0.0, 0.0),
                kurbo::Point::new(0.0, HORIZON_Y),
                &[(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
            )?;
            fx::fill_rect(surface, kurbo::Rect::new(0.0, HORIZON_Y, 800.0, 300.0), GROUND);
            fx::fill_shape(surface, &kurbo::Circle::new((400.0, HORIZON_Y), SUN_RADIUS), SUN);
            // Horizontal cuts across the sun's lower half, widening toward
            // the bottom. Each strip restores the ground color out to the
            // sun's edge at that height.
            for (y, thickness) in [(200.0, 4.0), (214.0, 5.0), (230.0, 6.0), (246.0, 7.0)] {
                let dy = y + thickness / 2.0 - HORIZON_Y;
                let half = (SUN_RADIUS * SUN_RADIUS - dy * dy).max(0.0).sqrt();
                fx::fill_rect(
                    surface,
                    kurbo::Rect::new(400.0 - half, y, 400.0 + half, y + thickness),
                    GROUND,
                );
            }
        }
    }

    fx::fill_shape(surface, &kurbo::Circle::new((150.0, 150.0), 98.0), RING);
    mask::draw_circular_image(surface, inputs.avatar, 150.0, 150.0, 90.0)?;

    inputs.text.draw_line(
        surface,
        inputs.title,
        FontRole::Bold,
        56.0,
        SUN,
        400.0,
        70.0,
        Anchor::Center,
    );
    inputs.text.draw_line(
        surface,
        inputs.username,
        FontRole::Regular,
        38.0,
        p.text,
        400.0,
        255.0,
        Anchor::Center,
    );
    inputs.text.draw_line(
        surface,
        inputs.subtitle,
        FontRole::Regular,
        24.0,
        RING,
        400.0,
        288.0,
        Anchor::Center,
    );
    Ok(())
}
