//! File-level rules: contact-list type check, size display, phone format,
//! and the standardized attachment name.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A host file handle that can be attached to the processing request.
pub trait Upload {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
    fn size(&self) -> u64;
}

/// The contact list must be an `.xlsx` workbook: by MIME type or by name.
#[must_use]
pub fn is_excel_file(file_name: &str, mime_type: &str) -> bool {
    mime_type == XLSX_MIME || file_name.ends_with(".xlsx")
}

/// MIME type guessed from a file extension, for hosts that only have paths.
#[must_use]
pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("xlsx") => XLSX_MIME,
        Some("xls") => "application/vnd.ms-excel",
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Human-readable size in base-1024 units with at most two decimals.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text} {}", UNITS[unit])
}

/// Optional `+`, a leading digit 1-9, then 7 to 15 digits, spaces, dashes or
/// parentheses.
#[must_use]
pub fn is_valid_phone_number(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = rest.chars();
    if !matches!(chars.next(), Some('1'..='9')) {
        return false;
    }
    let mut count = 0usize;
    for c in chars {
        if !(c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')')) {
            return false;
        }
        count += 1;
    }
    (7..=15).contains(&count)
}

/// Name the backend gives a resume attachment: `Full_Name_Role.ext`.
#[must_use]
pub fn attachment_file_name(full_name: &str, role: &str, extension: &str) -> String {
    let name = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    let role = role.split_whitespace().collect::<Vec<_>>().join("_");
    let extension = extension.trim_start_matches('.');
    format!("{name}_{role}.{extension}")
}

#[cfg(feature = "native")]
pub use local::LocalFile;

#[cfg(feature = "native")]
mod local {
    use std::path::{Path, PathBuf};

    use super::{Upload, mime_for_file_name};

    /// A file on the local filesystem, attached by path.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct LocalFile {
        path: PathBuf,
        size: u64,
    }

    impl LocalFile {
        /// # Errors
        ///
        /// Fails if the path cannot be stat'ed or is not a regular file.
        pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
            let path = path.into();
            let meta = std::fs::metadata(&path)?;
            if !meta.is_file() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} is not a file", path.display()),
                ));
            }
            Ok(Self { path, size: meta.len() })
        }

        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Upload for LocalFile {
        fn file_name(&self) -> String {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        }

        fn mime_type(&self) -> String {
            mime_for_file_name(&self.file_name()).to_owned()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }
}
