//! Welcard renders themed welcome-card PNGs.
//!
//! Cards are a fixed 800x300 canvas rasterized on the CPU. The public API
//! is renderer-oriented:
//!
//! - Describe a card with a [`CardConfig`]
//! - Create a [`CardRenderer`]
//! - Call [`CardRenderer::render`] for encoded PNG bytes
//!
//! Lower-level pieces (the [`CardSurface`], masked image draws) are exposed
//! for custom layouts and pixel-level tests.
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod themes;

pub mod config;
pub mod render;
pub mod renderer;

pub use crate::assets::CardImage;
pub use crate::config::{CardConfig, Theme};
pub use crate::foundation::error::{WelcardError, WelcardResult};
pub use crate::render::{
    CARD_HEIGHT, CARD_WIDTH, CardPixels, CardSurface, blit_image, draw_circular_image,
    draw_rounded_image,
};
pub use crate::renderer::CardRenderer;
