//! Views: pure rendering plus hit testing over state owned by the store.

pub mod file_list;

pub use file_list::FileListView;
