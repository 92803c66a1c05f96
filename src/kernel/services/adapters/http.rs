//! HTTP adapter for the remote file store.
//!
//! Stateless apart from the shared connection pool: every call builds its URL from the
//! configured [`ApiBase`]. Failures collapse into a [`TransferError`] kind, the cause is
//! only logged.

use crate::kernel::services::ports::{ApiBase, FileListResponse, TransferError};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

#[derive(Debug, Clone)]
pub struct HttpFileClient {
    client: Client,
    base: ApiBase,
}

impl HttpFileClient {
    pub fn new(base: ApiBase) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    pub fn download_url(&self, name: &str) -> String {
        self.base.download_url(name)
    }

    pub fn delete_url(&self, name: &str) -> String {
        self.base.delete_url(name)
    }

    pub async fn list_files(&self) -> Result<Vec<String>, TransferError> {
        let url = self.base.files_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failure(TransferError::Fetch, &url, &e))?;
        let response = ensure_success(TransferError::Fetch, &url, response)?;

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_failure(TransferError::Fetch, &url, &e))?;
        let parsed: FileListResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "file list body is not valid json");
            TransferError::Fetch
        })?;
        Ok(parsed.into_names())
    }

    /// Posts one multipart part named `file` carrying `name` as its file name.
    pub async fn upload_file(&self, name: &str, bytes: Vec<u8>) -> Result<(), TransferError> {
        let url = self.base.upload_url();
        let size = bytes.len();
        let part = Part::bytes(bytes).file_name(name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_failure(TransferError::Upload, &url, &e))?;
        ensure_success(TransferError::Upload, &url, response)?;

        tracing::debug!(name, size, "upload accepted");
        Ok(())
    }

    pub async fn download_file(&self, name: &str) -> Result<Vec<u8>, TransferError> {
        let url = self.download_url(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_failure(TransferError::Download, &url, &e))?;
        let response = ensure_success(TransferError::Download, &url, response)?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_failure(TransferError::Download, &url, &e))?;
        Ok(bytes.to_vec())
    }

    pub async fn delete_file(&self, name: &str) -> Result<(), TransferError> {
        let url = self.delete_url(name);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport_failure(TransferError::Delete, &url, &e))?;
        ensure_success(TransferError::Delete, &url, response)?;
        Ok(())
    }
}

fn ensure_success(
    kind: TransferError,
    url: &str,
    response: Response,
) -> Result<Response, TransferError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    tracing::warn!(url, status = status.as_u16(), ?kind, "request rejected");
    Err(kind)
}

fn transport_failure(kind: TransferError, url: &str, error: &reqwest::Error) -> TransferError {
    tracing::warn!(url, error = %error, ?kind, "request failed");
    kind
}
