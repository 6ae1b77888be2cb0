//! Structured-document source: a labour-market report run through every
//! field extractor.

use std::time::Duration;

use lmi_core::{AppConfig, PartialReport, SourceKind};
use lmi_extract::extract_all;
use reqwest::Client;

use crate::error::SourceError;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl From<&AppConfig> for DocumentConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            timeout_secs: config.http_timeout_secs,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Reads report documents from disk or over HTTP and extracts their fields.
pub struct DocumentSource {
    client: Client,
}

impl DocumentSource {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &DocumentConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    /// Build a partial report from already-decoded document text.
    ///
    /// Field extractors that hit a malformed number leave their field empty
    /// and are listed in [`PartialReport::failed_fields`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EmptyDocument`] when `text` is blank.
    pub fn from_text(text: &str) -> Result<PartialReport, SourceError> {
        if text.trim().is_empty() {
            return Err(SourceError::EmptyDocument);
        }

        let outcome = extract_all(text);
        tracing::debug!(
            chars = text.len(),
            failed = outcome.failed_fields.len(),
            "extracted document fields"
        );

        let mut partial = PartialReport::new(SourceKind::StructuredDocument, outcome.fields);
        partial.failed_fields = outcome.failed_fields;
        Ok(partial)
    }

    /// Retrieve the raw text behind `locator`.
    ///
    /// `http://` and `https://` locators are downloaded; anything else is a
    /// filesystem path. PDF bytes are decoded to text, other content must be
    /// UTF-8.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] / [`SourceError::UnexpectedStatus`] for downloads.
    /// - [`SourceError::Io`] when a local file cannot be read.
    /// - [`SourceError::Pdf`] / [`SourceError::NotUtf8`] when the bytes cannot
    ///   be decoded.
    pub async fn fetch_text(&self, locator: &str) -> Result<String, SourceError> {
        let bytes = if is_remote(locator) {
            self.download(locator).await?
        } else {
            tokio::fs::read(locator)
                .await
                .map_err(|source| SourceError::Io {
                    path: locator.to_string(),
                    source,
                })?
        };
        decode_document(locator, bytes)
    }

    /// [`fetch_text`](Self::fetch_text) followed by [`from_text`](Self::from_text).
    ///
    /// # Errors
    ///
    /// Any error from either step.
    pub async fn parse(&self, locator: &str) -> Result<PartialReport, SourceError> {
        let text = self.fetch_text(locator).await?;
        Self::from_text(&text)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

fn decode_document(locator: &str, bytes: Vec<u8>) -> Result<String, SourceError> {
    if bytes.starts_with(PDF_MAGIC) {
        return pdf_extract::extract_text_from_mem(&bytes).map_err(|e| SourceError::Pdf {
            locator: locator.to_string(),
            reason: format!("{e:?}"),
        });
    }
    String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
        locator: locator.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_an_empty_document() {
        assert!(matches!(
            DocumentSource::from_text("  \n\t "),
            Err(SourceError::EmptyDocument)
        ));
    }

    #[test]
    fn malformed_number_only_blanks_its_field() {
        let text = "Totaal: . gepubliceerde vacatures\nMBO 40%";
        let partial = DocumentSource::from_text(text).expect("document text");

        assert_eq!(partial.source, SourceKind::StructuredDocument);
        assert_eq!(partial.fields.vacancy_count, None);
        assert_eq!(partial.failed_fields, vec!["vacancy_count"]);
        assert_eq!(partial.fields.education_levels.get("MBO"), Some(40));
    }

    #[test]
    fn decode_accepts_utf8_text() {
        let text = decode_document("report.txt", "Totaal: 1 gepubliceerde vacatures".into())
            .expect("utf-8 text");
        assert!(text.starts_with("Totaal"));
    }

    #[test]
    fn decode_rejects_binary_garbage() {
        let err = decode_document("report.bin", vec![0xff, 0xfe, 0x00, 0x81])
            .expect_err("not utf-8");
        assert!(matches!(err, SourceError::NotUtf8 { .. }));
    }

    #[test]
    fn remote_locators_are_http_urls_only() {
        assert!(is_remote("https://example.com/report.pdf"));
        assert!(is_remote("http://example.com/report.pdf"));
        assert!(!is_remote("/tmp/report.pdf"));
        assert!(!is_remote("ftp://example.com/report.pdf"));
    }
}
