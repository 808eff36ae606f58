//! Theme scenes: fixed 800x300 layouts drawn from shared inputs.
//!
//! Each theme module exposes one `draw` that paints background, avatar and
//! text for its layout. Themes share the same inputs and never talk to the
//! network or filesystem; everything they need is loaded up front.

mod bubble;
mod classic;
mod clean;
mod cyberpunk;
mod gaming;
mod modern;
mod nature;
mod retro;

use crate::assets::CardImage;
use crate::config::{CardConfig, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR, Theme};
use crate::foundation::error::WelcardResult;
use crate::render::color::{
    BACKGROUND_FALLBACK, BORDER_FALLBACK, Rgba8, TEXT_FALLBACK, parse_color_or,
};
use crate::render::surface::{CARD_HEIGHT, CARD_WIDTH, CardSurface};
use crate::render::text::TextPainter;

/// Resolved config colors plus whether the raw strings were left at their
/// defaults. Some themes restyle defaulted fields (`clean` swaps a default
/// white-on-dark pairing for dark-on-white) while always honoring explicit
/// overrides.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Palette {
    pub(crate) background: Rgba8,
    pub(crate) text: Rgba8,
    pub(crate) border: Rgba8,
    pub(crate) background_is_default: bool,
    pub(crate) text_is_default: bool,
}

impl Palette {
    pub(crate) fn resolve(config: &CardConfig) -> Self {
        Self {
            background: parse_color_or(&config.background_color, BACKGROUND_FALLBACK),
            text: parse_color_or(&config.text_color, TEXT_FALLBACK),
            border: parse_color_or(&config.border_color, BORDER_FALLBACK),
            background_is_default: config.background_color == DEFAULT_BACKGROUND_COLOR,
            text_is_default: config.text_color == DEFAULT_TEXT_COLOR,
        }
    }
}

/// Everything a theme needs to paint one card.
pub(crate) struct SceneInputs<'a> {
    pub(crate) avatar: &'a CardImage,
    pub(crate) background: Option<&'a CardImage>,
    pub(crate) text: &'a mut TextPainter,
    pub(crate) palette: Palette,
    pub(crate) title: &'a str,
    pub(crate) username: &'a str,
    pub(crate) subtitle: &'a str,
}

/// Full card bounds.
pub(crate) fn card_rect() -> kurbo::Rect {
    kurbo::Rect::new(0.0, 0.0, f64::from(CARD_WIDTH), f64::from(CARD_HEIGHT))
}

/// Paint `theme` onto `surface`.
pub(crate) fn draw_theme(
    theme: Theme,
    surface: &mut CardSurface,
    inputs: &mut SceneInputs<'_>,
) -> WelcardResult<()> {
    match theme {
        Theme::Classic => classic::draw(surface, inputs),
        Theme::Modern => modern::draw(surface, inputs),
        Theme::Clean => clean::draw(surface, inputs),
        Theme::Cyberpunk => cyberpunk::draw(surface, inputs),
        Theme::Nature => nature::draw(surface, inputs),
        Theme::Gaming => gaming::draw(surface, inputs),
        Theme::Retro => retro::draw(surface, inputs),
        Theme::Bubble => bubble::draw(surface, inputs),
    }
}
