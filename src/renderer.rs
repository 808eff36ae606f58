//! The public renderer: config in, PNG bytes out.

use crate::assets;
use crate::assets::font::resolve_fonts;
use crate::config::CardConfig;
use crate::encode;
use crate::foundation::error::WelcardResult;
use crate::render::surface::CardSurface;
use crate::render::text::TextPainter;
use crate::themes::{self, Palette, SceneInputs};

/// Renders welcome cards from one fixed configuration.
///
/// Construction does no I/O. Every [`render`](Self::render) call loads
/// assets, paints a fresh 800x300 surface and encodes it, so repeated
/// calls never observe each other's state.
pub struct CardRenderer {
    config: CardConfig,
}

impl CardRenderer {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Render the card and return encoded PNG bytes.
    ///
    /// The avatar and background image (when configured) load concurrently;
    /// either failing aborts the render with
    /// [`WelcardError::AssetLoad`](crate::WelcardError::AssetLoad). Font
    /// problems only degrade the output, they never fail it.
    #[tracing::instrument(skip(self), fields(theme = self.config.theme.name()))]
    pub async fn render(&self) -> WelcardResult<Vec<u8>> {
        let fonts = resolve_fonts(self.config.font_path.as_deref()).await;

        let (avatar, background) = match self.config.background_image_source.as_deref() {
            Some(bg_source) => {
                let (avatar, background) = tokio::try_join!(
                    assets::load_image(&self.config.avatar_source),
                    assets::load_image(bg_source),
                )?;
                (avatar, Some(background))
            }
            None => (assets::load_image(&self.config.avatar_source).await?, None),
        };

        let mut surface = CardSurface::new();
        let mut text = TextPainter::new(&fonts);
        let mut inputs = SceneInputs {
            avatar: &avatar,
            background: background.as_ref(),
            text: &mut text,
            palette: Palette::resolve(&self.config),
            title: &self.config.title,
            username: &self.config.username,
            subtitle: &self.config.subtitle,
        };
        themes::draw_theme(self.config.theme, &mut surface, &mut inputs)?;

        encode::png_from_pixmap(&surface.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::WelcardError;

    #[test]
    fn renderer_keeps_its_config() {
        let renderer = CardRenderer::new(CardConfig::new("Ada", "avatar.png"));
        assert_eq!(renderer.config().username, "Ada");
        assert_eq!(renderer.config().avatar_source, "avatar.png");
    }

    #[tokio::test]
    async fn unreadable_avatar_aborts_the_render() {
        let renderer = CardRenderer::new(CardConfig::new("Ada", "/no/such/avatar.png"));
        let err = renderer.render().await.unwrap_err();
        assert!(matches!(err, WelcardError::AssetLoad(_)));
    }
}
