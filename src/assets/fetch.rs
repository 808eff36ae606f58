//! Byte loading for image and font sources.
//!
//! A source string is either an http(s) URL or a local file path; nothing
//! else is inferred from it. Remote fetches share one lazily built client.

use anyhow::Context;
use once_cell::sync::OnceCell;
use reqwest::Client;
use std::time::Duration;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> anyhow::Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build http client")
    })
}

pub(crate) fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch the raw bytes behind `source`, from the network or the filesystem.
pub(crate) async fn load_bytes(source: &str) -> anyhow::Result<Vec<u8>> {
    if is_http_source(source) {
        let response = http_client()?
            .get(source)
            .send()
            .await
            .with_context(|| format!("request to {source} failed"))?
            .error_for_status()
            .with_context(|| format!("request to {source} returned an error status"))?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("reading response body from {source} failed"))?;
        Ok(bytes.to_vec())
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("reading file {source} failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn http_sources_are_detected_by_scheme() {
        assert!(is_http_source("http://example.com/a.png"));
        assert!(is_http_source("https://example.com/a.png"));
        assert!(!is_http_source("a.png"));
        assert!(!is_http_source("/tmp/a.png"));
        assert!(!is_http_source("ftp://example.com/a.png"));
    }

    #[tokio::test]
    async fn loads_local_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"card bytes").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let bytes = load_bytes(&path).await.unwrap();
        assert_eq!(bytes, b"card bytes");
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = load_bytes("/definitely/not/here.png").await.unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.png"));
    }
}
