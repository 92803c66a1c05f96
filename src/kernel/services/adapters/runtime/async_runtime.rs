use super::message::AppMessage;
use crate::kernel::services::adapters::http::HttpFileClient;
use crate::kernel::services::ports::TransferError;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    client: HttpFileClient,
    download_dir: PathBuf,
}

impl AsyncRuntime {
    pub fn new(
        tx: Sender<AppMessage>,
        client: HttpFileClient,
        download_dir: PathBuf,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            client,
            download_dir,
        })
    }

    pub fn client(&self) -> &HttpFileClient {
        &self.client
    }

    pub fn list_files(&self, request_id: u64) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let message = match client.list_files().await {
                Ok(files) => AppMessage::FilesListed { request_id, files },
                Err(error) => AppMessage::FilesListFailed { request_id, error },
            };
            let _ = tx.send(message);
        });
    }

    /// Reads `path` and posts it under its base name.
    pub fn upload_file(&self, path: PathBuf) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let name = upload_name(&path);
            let result = match tokio::fs::read(&path).await {
                Ok(bytes) => client.upload_file(&name, bytes).await,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "cannot read upload source");
                    Err(TransferError::Upload)
                }
            };
            let _ = tx.send(AppMessage::UploadFinished { name, result });
        });
    }

    pub fn download_file(&self, name: String) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        let dir = self.download_dir.clone();
        self.runtime.spawn(async move {
            let result = match client.download_file(&name).await {
                Ok(bytes) => save_download(&dir, &name, &bytes).await.map_err(|e| {
                    tracing::warn!(
                        name = %name,
                        dir = %dir.display(),
                        error = %e,
                        "cannot save download"
                    );
                    TransferError::Download
                }),
                Err(error) => Err(error),
            };
            let _ = tx.send(AppMessage::DownloadFinished { name, result });
        });
    }

    pub fn delete_file(&self, name: String) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let result = client.delete_file(&name).await;
            let _ = tx.send(AppMessage::DeleteFinished { name, result });
        });
    }
}

fn upload_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Remote names may contain separators; the local copy must stay inside the download dir.
fn safe_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
        .collect();
    match cleaned.as_str() {
        "" | "." | ".." => "download".to_string(),
        _ => cleaned,
    }
}

/// Fixed-length name for the in-progress copy, so long target names still fit the
/// filesystem's name limit.
fn partial_name(file_name: &str) -> String {
    let mut hasher = FxHasher::default();
    hasher.write(file_name.as_bytes());
    format!(".filedeck-{:016x}.part", hasher.finish())
}

/// Writes into a hidden sibling first and renames it into place; the partial file is
/// removed on any failure.
async fn save_download(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;

    let file_name = safe_file_name(name);
    let target = dir.join(&file_name);
    let partial = dir.join(partial_name(&file_name));

    let written = async {
        tokio::fs::write(&partial, bytes).await?;
        tokio::fs::rename(&partial, &target).await
    }
    .await;

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e);
    }
    Ok(target)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
