//! Asset acquisition: bytes from disk or network, decoded into paints.

pub(crate) mod decode;
pub(crate) mod fetch;
pub(crate) mod font;

pub use decode::CardImage;

use crate::foundation::error::{WelcardError, WelcardResult};

/// Load and decode one image source. Fetch and decode failures both surface
/// as [`WelcardError::AssetLoad`] naming the source.
pub(crate) async fn load_image(source: &str) -> WelcardResult<CardImage> {
    let bytes = fetch::load_bytes(source)
        .await
        .map_err(|e| WelcardError::asset_load(format!("'{source}': {e:#}")))?;
    CardImage::decode(&bytes).map_err(|e| WelcardError::asset_load(format!("'{source}': {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn test_png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn loads_image_from_local_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&test_png_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let img = load_image(&path).await.unwrap();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 4);
    }

    #[tokio::test]
    async fn missing_source_is_an_asset_load_error() {
        let err = load_image("/nope/missing.png").await.unwrap_err();
        assert!(matches!(err, WelcardError::AssetLoad(_)));
        let msg = err.to_string();
        assert!(msg.contains("image loading failed"));
        assert!(msg.contains("/nope/missing.png"));
    }

    #[tokio::test]
    async fn undecodable_source_is_an_asset_load_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not an image at all").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let err = load_image(&path).await.unwrap_err();
        assert!(matches!(err, WelcardError::AssetLoad(_)));
    }
}
