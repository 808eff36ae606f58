//! Color parsing and the straight-alpha RGBA8 color type.

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Fallback for an unparsable background color, equal to `#23272A`.
pub(crate) const BACKGROUND_FALLBACK: Rgba8 = Rgba8::rgb(0x23, 0x27, 0x2A);
/// Fallback for an unparsable text color, equal to `#FFFFFF`.
pub(crate) const TEXT_FALLBACK: Rgba8 = Rgba8::rgb(0xFF, 0xFF, 0xFF);
/// Fallback for an unparsable border color, equal to `#7289DA`.
pub(crate) const BORDER_FALLBACK: Rgba8 = Rgba8::rgb(0x72, 0x89, 0xDA);

impl Rgba8 {
    pub(crate) const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub(crate) const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub(crate) fn to_peniko(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Premultiplied byte form, matching the pixmap pixel layout.
    pub(crate) fn to_premul(self) -> [u8; 4] {
        fn mul(c: u8, a: u8) -> u8 {
            ((c as u16 * a as u16 + 127) / 255) as u8
        }
        [
            mul(self.r, self.a),
            mul(self.g, self.a),
            mul(self.b, self.a),
            self.a,
        ]
    }
}

/// Parse a hex color, falling back (with a warning) when the value is not
/// understood. Accepts `#RGB`, `#RRGGBB` and `#RRGGBBAA`, `#` optional.
pub(crate) fn parse_color_or(value: &str, fallback: Rgba8) -> Rgba8 {
    match parse_hex(value) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(value, error = %e, "unparsable color, using fallback");
            fallback
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err("hex color must be ascii".to_owned());
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    fn hex_nibble(ch: &str) -> Result<u8, String> {
        let v = u8::from_str_radix(ch, 16).map_err(|_| format!("invalid hex digit \"{ch}\""))?;
        Ok(v << 4 | v)
    }

    let (r, g, b, a) = match s.len() {
        3 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            (r, g, b, 255)
        }
        6 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            (r, g, b, 255)
        }
        8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = hex_byte(&s[6..8])?;
            (r, g, b, a)
        }
        _ => {
            return Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned());
        }
    };

    Ok(Rgba8::rgba(r, g, b, a))
}
