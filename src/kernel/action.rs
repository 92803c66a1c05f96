use std::path::PathBuf;
use std::time::Instant;

use crate::core::Command;
use crate::kernel::services::ports::TransferError;

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// First render of the view; triggers the initial listing fetch.
    Mount,
    Refresh,
    Tick {
        now: Instant,
    },
    ListSetViewHeight {
        height: usize,
    },
    ListMoveSelection {
        delta: isize,
    },
    ListScroll {
        delta: isize,
    },
    ListClickRow {
        row: usize,
    },
    /// Select-File: only the first path is uploaded.
    SelectFiles {
        paths: Vec<PathBuf>,
    },
    DownloadFile {
        name: String,
    },
    /// Asks for confirmation; nothing is sent until the dialog is accepted.
    RequestDelete {
        name: String,
    },
    ConfirmDialogAccept,
    ConfirmDialogCancel,
    OpenUploadDialog,
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
    DragEnter,
    DragOver,
    DragLeave,
    Drop {
        paths: Vec<PathBuf>,
    },
    FilesListed {
        request_id: u64,
        files: Vec<String>,
        now: Instant,
    },
    FilesListFailed {
        request_id: u64,
        error: TransferError,
        now: Instant,
    },
    UploadFinished {
        name: String,
        result: Result<(), TransferError>,
        now: Instant,
    },
    DownloadFinished {
        name: String,
        result: Result<PathBuf, TransferError>,
        now: Instant,
    },
    DeleteFinished {
        name: String,
        result: Result<(), TransferError>,
        now: Instant,
    },
    Quit,
}
