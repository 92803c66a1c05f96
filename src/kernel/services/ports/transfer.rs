//! Remote file store contract: endpoints, wire shapes, and failure kinds.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Characters `encodeURIComponent` leaves untouched: alphanumerics and `-_.!~*'()`.
const NAME_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Every variant displays a fixed message. The cause is logged where it happens, never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("failed to load the file list")]
    Fetch,
    #[error("failed to upload the file")]
    Upload,
    #[error("failed to download the file")]
    Download,
    #[error("failed to delete the file")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiBaseError {
    #[error("invalid api base `{input}`: {reason}")]
    Invalid { input: String, reason: String },
    #[error("api base `{0}` must use http or https")]
    UnsupportedScheme(String),
}

/// Root origin for all four endpoints, stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    pub fn parse(input: &str) -> Result<Self, ApiBaseError> {
        let trimmed = input.trim().trim_end_matches('/');
        let url = reqwest::Url::parse(trimmed).map_err(|e| ApiBaseError::Invalid {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiBaseError::UnsupportedScheme(input.to_string()));
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(ApiBaseError::Invalid {
                input: input.to_string(),
                reason: "missing host".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn files_url(&self) -> String {
        format!("{}/files", self.0)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.0)
    }

    pub fn download_url(&self, name: &str) -> String {
        format!("{}/download/{}", self.0, encode_name(name))
    }

    pub fn delete_url(&self, name: &str) -> String {
        format!("{}/delete/{}", self.0, encode_name(name))
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl std::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, NAME_SEGMENT).to_string()
}

pub fn decode_name(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Body of `GET /files`. A missing or null `files` field is an empty listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Option<Vec<String>>,
}

impl FileListResponse {
    pub fn into_names(self) -> Vec<String> {
        self.files.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/transfer.rs"]
mod tests;
