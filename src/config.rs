use serde::{Deserialize, Serialize};

/// Title drawn when the configuration leaves `title` unset.
pub const DEFAULT_TITLE: &str = "Welcome";
/// Subtitle drawn when the configuration leaves `subtitle` unset.
pub const DEFAULT_SUBTITLE: &str = "To the server!";
/// Flat background color used when no background image or override is given.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#23272A";
/// Primary text color.
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
/// Border and accent color.
pub const DEFAULT_BORDER_COLOR: &str = "#7289DA";

/// Named layout variants. The set is closed; unknown names encountered in
/// string form fold to [`Theme::Classic`] instead of erroring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Modern,
    Clean,
    Cyberpunk,
    Nature,
    Gaming,
    Retro,
    Bubble,
}

impl Theme {
    /// Every defined theme, in declaration order.
    pub const ALL: [Theme; 8] = [
        Theme::Classic,
        Theme::Modern,
        Theme::Clean,
        Theme::Cyberpunk,
        Theme::Nature,
        Theme::Gaming,
        Theme::Retro,
        Theme::Bubble,
    ];

    /// Resolve a theme by name; anything unrecognized maps to `Classic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" => Self::Classic,
            "modern" => Self::Modern,
            "clean" => Self::Clean,
            "cyberpunk" => Self::Cyberpunk,
            "nature" => Self::Nature,
            "gaming" => Self::Gaming,
            "retro" => Self::Retro,
            "bubble" => Self::Bubble,
            _ => Self::Classic,
        }
    }

    /// Lowercase display name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Clean => "clean",
            Self::Cyberpunk => "cyberpunk",
            Self::Nature => "nature",
            Self::Gaming => "gaming",
            Self::Retro => "retro",
            Self::Bubble => "bubble",
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Theme::from_name(&name))
    }
}

/// Input for one card render, immutable once constructed.
///
/// Every optional field has a fixed fallback applied by [`CardConfig::new`]
/// (and, for deserialized configs, by `#[serde(default)]`): supplying a field
/// overrides the default, omitting it falls back to the constant. Color
/// fields carry their string form uninterpreted; parsing happens at render
/// time, and unparsable values behave as if the field were omitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    /// Display name rendered verbatim, no sanitization.
    pub username: String,
    /// Avatar image source: an http(s) URL or a local file path.
    pub avatar_source: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_border_color")]
    pub border_color: String,
    /// Local path to a font registered for this render; failures fall back to
    /// the system sans-serif family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<String>,
    /// Optional background image source; replaces the flat background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_source: Option<String>,
}

impl CardConfig {
    /// Build a configuration with both required fields set and every other
    /// field at its default.
    pub fn new(username: impl Into<String>, avatar_source: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            avatar_source: avatar_source.into(),
            theme: Theme::default(),
            title: default_title(),
            subtitle: default_subtitle(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            border_color: default_border_color(),
            font_path: None,
            background_image_source: None,
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = color.into();
        self
    }

    pub fn font_path(mut self, path: impl Into<String>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn background_image_source(mut self, source: impl Into<String>) -> Self {
        self.background_image_source = Some(source.into());
        self
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_owned()
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_owned()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_owned()
}

fn default_border_color() -> String {
    DEFAULT_BORDER_COLOR.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_fills_defaults() {
        let config = CardConfig::new("Ada", "avatar.png");
        assert_eq!(config.theme, Theme::Classic);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.subtitle, DEFAULT_SUBTITLE);
        assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(config.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(config.border_color, DEFAULT_BORDER_COLOR);
        assert!(config.font_path.is_none());
        assert!(config.background_image_source.is_none());
    }

    #[test]
    fn builder_overrides_win_over_defaults() {
        let config = CardConfig::new("Ada", "avatar.png")
            .theme(Theme::Retro)
            .title("Hello")
            .border_color("#112233");
        assert_eq!(config.theme, Theme::Retro);
        assert_eq!(config.title, "Hello");
        assert_eq!(config.border_color, "#112233");
        assert_eq!(config.subtitle, DEFAULT_SUBTITLE);
    }

    #[test]
    fn deserialize_applies_shallow_merge() {
        let config: CardConfig = serde_json::from_value(json!({
            "username": "Ada",
            "avatarSource": "avatar.png"
        }))
        .unwrap();
        assert_eq!(config.theme, Theme::Classic);
        assert_eq!(config.background_color, DEFAULT_BACKGROUND_COLOR);

        let config: CardConfig = serde_json::from_value(json!({
            "username": "Ada",
            "avatarSource": "avatar.png",
            "theme": "bubble",
            "subtitle": "So Soft!"
        }))
        .unwrap();
        assert_eq!(config.theme, Theme::Bubble);
        assert_eq!(config.subtitle, "So Soft!");
    }

    #[test]
    fn unknown_theme_name_folds_to_classic() {
        assert_eq!(Theme::from_name("galaxy"), Theme::Classic);
        assert_eq!(Theme::from_name(""), Theme::Classic);
        assert_eq!(Theme::from_name("Classic"), Theme::Classic);

        let config: CardConfig = serde_json::from_value(json!({
            "username": "Ada",
            "avatarSource": "avatar.png",
            "theme": "galaxy"
        }))
        .unwrap();
        assert_eq!(config.theme, Theme::Classic);
    }

    #[test]
    fn serializes_camel_case_field_names() {
        let config = CardConfig::new("Ada", "avatar.png").font_path("font.ttf");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["avatarSource"], "avatar.png");
        assert_eq!(value["fontPath"], "font.ttf");
        assert_eq!(value["theme"], "classic");
        assert!(value.get("backgroundImageSource").is_none());
    }

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }
    }
}
