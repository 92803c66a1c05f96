//! Service ports: data contracts shared by the store and the adapters.

pub mod settings;
pub mod transfer;

pub use settings::{KeybindingRule, Settings, ThemeSettings};
pub use transfer::{
    decode_name, encode_name, ApiBase, ApiBaseError, FileListResponse, TransferError,
    DEFAULT_API_BASE,
};
