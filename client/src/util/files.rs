//! Browser file selections as [`Upload`]s.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use coldmail::process::{Upload, format_file_size};

/// A file picked through an `<input type="file">`.
///
/// Name, type and size are copied out at selection time; the DOM handle is
/// kept only in wasm builds for the multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserFile {
    name: String,
    mime: String,
    size: u64,
    #[cfg(feature = "csr")]
    handle: Option<web_sys::File>,
}

impl BrowserFile {
    /// Metadata-only file, not uploadable.
    pub fn described(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            #[cfg(feature = "csr")]
            handle: None,
        }
    }

    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_web(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size() as u64,
            handle: Some(file),
        }
    }

    #[cfg(feature = "csr")]
    pub fn handle(&self) -> Option<&web_sys::File> {
        self.handle.as_ref()
    }

    /// `name (size)` line for selection lists.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size))
    }
}

impl Upload for BrowserFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Every file currently selected in a file input.
#[cfg(feature = "csr")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::from_web)
        .collect()
}
