/// Icon class of a listing row, derived from the file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Image,
    Document,
    Generic,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "md", "doc", "docx", "pdf"];

impl FileIcon {
    /// Classifies by the text after the last `.`, case-insensitively. Names without a `.` are
    /// generic; `.png` counts as a png.
    pub fn classify(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return FileIcon::Generic;
        };
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileIcon::Image
        } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
            FileIcon::Document
        } else {
            FileIcon::Generic
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FileIcon::Image => "▣",
            FileIcon::Document => "≡",
            FileIcon::Generic => "□",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/file_icon.rs"]
mod tests;
