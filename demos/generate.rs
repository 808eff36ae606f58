//! Renders one card per theme into `demos/output/`.
//!
//! Pass an avatar image path (or http(s) URL) as the first argument; with
//! no argument a placeholder avatar is generated next to the outputs.
//!
//! ```text
//! cargo run --example generate -- path/to/avatar.png
//! ```

use std::io::Cursor;

use welcard::{CardConfig, CardRenderer, Theme};

fn flavor_subtitle(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Cyberpunk => Some("Initiated"),
        Theme::Nature => Some("Found Peace"),
        Theme::Gaming => Some("Press Start"),
        Theme::Retro => Some("1984"),
        Theme::Bubble => Some("So Soft!"),
        _ => None,
    }
}

fn placeholder_avatar(path: &str) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_fn(128, 128, |x, y| {
        let t = ((x / 16 + y / 16) % 2) as u8;
        image::Rgba([80 + t * 120, 90, 200 - t * 120, 255])
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    std::fs::create_dir_all("demos/output")?;
    let avatar = match std::env::args().nth(1) {
        Some(source) => source,
        None => {
            let path = "demos/output/avatar.png".to_string();
            placeholder_avatar(&path)?;
            path
        }
    };

    for theme in Theme::ALL {
        let mut config = CardConfig::new("Ada Lovelace", avatar.clone()).theme(theme);
        if let Some(subtitle) = flavor_subtitle(theme) {
            config = config.subtitle(subtitle);
        }
        let png = CardRenderer::new(config).render().await?;
        let out = format!("demos/output/{}.png", theme.name());
        std::fs::write(&out, &png)?;
        println!("wrote {out}");
    }
    Ok(())
}
