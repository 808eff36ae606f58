pub type WelcardResult<T> = Result<T, WelcardError>;

#[derive(thiserror::Error, Debug)]
pub enum WelcardError {
    #[error("image loading failed: {0}")]
    AssetLoad(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WelcardError {
    pub fn asset_load(msg: impl Into<String>) -> Self {
        Self::AssetLoad(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            WelcardError::asset_load("x")
                .to_string()
                .contains("image loading failed:")
        );
        assert!(
            WelcardError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            WelcardError::render("x")
                .to_string()
                .contains("render error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = WelcardError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
