//! CPU rendering: the card surface, draw helpers and masked image blits.

pub(crate) mod color;
pub(crate) mod fx;
pub(crate) mod mask;
pub(crate) mod surface;
pub(crate) mod text;

pub use fx::blit_image;
pub use mask::{draw_circular_image, draw_rounded_image};
pub use surface::{CARD_HEIGHT, CARD_WIDTH, CardPixels, CardSurface};
