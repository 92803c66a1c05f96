use crate::kernel::services::ports::TransferError;
use std::path::PathBuf;

/// Completion of a transfer effect, stamped with a time by the receiver.
#[derive(Debug)]
pub enum AppMessage {
    FilesListed {
        request_id: u64,
        files: Vec<String>,
    },
    FilesListFailed {
        request_id: u64,
        error: TransferError,
    },
    UploadFinished {
        name: String,
        result: Result<(), TransferError>,
    },
    DownloadFinished {
        name: String,
        result: Result<PathBuf, TransferError>,
    },
    DeleteFinished {
        name: String,
        result: Result<(), TransferError>,
    },
}
