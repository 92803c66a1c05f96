use std::path::PathBuf;

/// IO requested by the store, executed by the async runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListFiles { request_id: u64 },
    UploadFile { path: PathBuf },
    DownloadFile { name: String },
    DeleteFile { name: String },
}
