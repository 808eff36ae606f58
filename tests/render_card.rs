use std::io::{Cursor, Write};

use welcard::{CARD_HEIGHT, CARD_WIDTH, CardConfig, CardRenderer, Theme, WelcardError};

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// A small checkered avatar, written to a temp file that lives as long as
/// the returned handle.
fn avatar_file() -> tempfile::NamedTempFile {
    let img = image::RgbaImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([200, 40, 40, 255])
        } else {
            image::Rgba([40, 40, 200, 255])
        }
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&png_bytes(img)).unwrap();
    file
}

fn background_file() -> tempfile::NamedTempFile {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([30, 160, 90, 255]));
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&png_bytes(img)).unwrap();
    file
}

fn path_of(file: &tempfile::NamedTempFile) -> String {
    file.path().to_str().unwrap().to_owned()
}

#[tokio::test]
async fn renders_png_at_fixed_dimensions() {
    let avatar = avatar_file();
    let renderer = CardRenderer::new(CardConfig::new("Ada", path_of(&avatar)));
    let png = renderer.render().await.unwrap();

    assert_eq!(&png[..8], &PNG_MAGIC);
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!(decoded.width(), u32::from(CARD_WIDTH));
    assert_eq!(decoded.height(), u32::from(CARD_HEIGHT));
}

#[tokio::test]
async fn every_theme_renders() {
    let avatar = avatar_file();
    for theme in Theme::ALL {
        let config = CardConfig::new("Ada", path_of(&avatar)).theme(theme);
        let png = CardRenderer::new(config).render().await.unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC, "theme {}", theme.name());
    }
}

#[tokio::test]
async fn unknown_theme_name_renders_exactly_like_classic() {
    let avatar = avatar_file();
    let unknown: CardConfig = serde_json::from_value(serde_json::json!({
        "username": "Ada",
        "avatarSource": path_of(&avatar),
        "theme": "galaxy"
    }))
    .unwrap();
    let classic: CardConfig = serde_json::from_value(serde_json::json!({
        "username": "Ada",
        "avatarSource": path_of(&avatar),
        "theme": "classic"
    }))
    .unwrap();

    let png_unknown = CardRenderer::new(unknown).render().await.unwrap();
    let png_classic = CardRenderer::new(classic).render().await.unwrap();
    assert_eq!(png_unknown, png_classic);
}

#[tokio::test]
async fn background_image_changes_pixels() {
    let avatar = avatar_file();
    let background = background_file();

    let plain = CardConfig::new("Ada", path_of(&avatar));
    let with_bg = plain.clone().background_image_source(path_of(&background));

    let png_plain = CardRenderer::new(plain).render().await.unwrap();
    let png_bg = CardRenderer::new(with_bg).render().await.unwrap();
    assert_ne!(png_plain, png_bg);
}

#[tokio::test]
async fn missing_font_path_still_renders() {
    let avatar = avatar_file();
    let config = CardConfig::new("Ada", path_of(&avatar)).font_path("/no/such/font.ttf");
    let png = CardRenderer::new(config).render().await.unwrap();
    assert_eq!(&png[..8], &PNG_MAGIC);
}

#[tokio::test]
async fn corrupt_font_file_still_renders() {
    let avatar = avatar_file();
    let mut font = tempfile::NamedTempFile::new().unwrap();
    font.write_all(b"definitely not a font").unwrap();

    let config = CardConfig::new("Ada", path_of(&avatar)).font_path(path_of(&font));
    let png = CardRenderer::new(config).render().await.unwrap();
    assert_eq!(&png[..8], &PNG_MAGIC);
}

#[tokio::test]
async fn unreadable_avatar_is_an_asset_load_error() {
    let config = CardConfig::new("Ada", "/no/such/dir/avatar.png");
    let err = CardRenderer::new(config).render().await.unwrap_err();
    assert!(matches!(err, WelcardError::AssetLoad(_)));
    let msg = err.to_string();
    assert!(msg.contains("image loading failed"));
    assert!(msg.contains("/no/such/dir/avatar.png"));
}

#[tokio::test]
async fn unreadable_background_is_an_asset_load_error() {
    let avatar = avatar_file();
    let config =
        CardConfig::new("Ada", path_of(&avatar)).background_image_source("/no/such/bg.png");
    let err = CardRenderer::new(config).render().await.unwrap_err();
    assert!(matches!(err, WelcardError::AssetLoad(_)));
    assert!(err.to_string().contains("/no/such/bg.png"));
}

#[tokio::test]
async fn undecodable_avatar_is_an_asset_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"these are not pixels").unwrap();

    let config = CardConfig::new("Ada", path_of(&file));
    let err = CardRenderer::new(config).render().await.unwrap_err();
    assert!(matches!(err, WelcardError::AssetLoad(_)));
}

#[tokio::test]
async fn render_is_deterministic() {
    let avatar = avatar_file();
    let config = CardConfig::new("Ada", path_of(&avatar))
        .theme(Theme::Cyberpunk)
        .subtitle("Initiated");

    let renderer = CardRenderer::new(config);
    let first = renderer.render().await.unwrap();
    let second = renderer.render().await.unwrap();
    assert_eq!(digest_u64(&first), digest_u64(&second));
    assert_eq!(first, second);
}
