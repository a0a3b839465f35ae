//! Draft-generation job submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both front-ends collect the same inputs: personal details for the email
//! signature, an Excel contact list, and templates/resumes supplied either as
//! a server-side folder path or as uploaded files. This module validates those
//! inputs and lays them out as the multipart body `POST /api/email/process`
//! expects. `outcome` classifies what comes back.


pub mod files;
pub mod outcome;

use serde::{Deserialize, Serialize};

#[cfg(feature = "native")]
pub use files::LocalFile;
pub use files::{Upload, attachment_file_name, format_file_size, is_excel_file, is_valid_phone_number};
pub use outcome::{ProcessOutcome, parse_process_response};

pub const FIELD_FILE: &str = "file";
pub const FIELD_FULL_NAME: &str = "fullName";
pub const FIELD_PHONE_NUMBER: &str = "phoneNumber";
pub const FIELD_LINKEDIN_URL: &str = "linkedInUrl";
pub const FIELD_PROCESSING_METHOD: &str = "processingMethod";
pub const FIELD_TEMPLATES_FOLDER_PATH: &str = "templatesFolderPath";
pub const FIELD_TEMPLATE_FILES: &str = "templateFiles";
pub const FIELD_RESUME_FILES: &str = "resumeFiles";

/// How templates and resumes reach the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMethod {
    /// Files are uploaded with the request.
    #[default]
    Upload,
    /// The backend reads a folder path on its own filesystem.
    Folder,
}

impl ProcessingMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Folder => "folder",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "File Upload",
            Self::Folder => "Folder Path",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Full Name is required")]
    MissingFullName,
    #[error("Phone Number is required")]
    MissingPhoneNumber,
    #[error("Excel file is required")]
    MissingContactFile,
    #[error("Please select a valid Excel file (.xlsx)")]
    InvalidContactFile,
    #[error("Templates Folder Path is required for folder method")]
    MissingFolderPath,
    #[error("At least one template file is required for upload method")]
    MissingTemplateFiles,
    #[error("At least one resume file is required for upload method")]
    MissingResumeFiles,
}

/// Everything a processing run needs, generic over the host's file handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessForm<F> {
    pub full_name: String,
    pub phone_number: String,
    pub linkedin_url: String,
    pub templates_folder_path: String,
    pub method: ProcessingMethod,
    contact_file: Option<F>,
    pub template_files: Vec<F>,
    pub resume_files: Vec<F>,
}

impl<F> Default for ProcessForm<F> {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone_number: String::new(),
            linkedin_url: String::new(),
            templates_folder_path: String::new(),
            method: ProcessingMethod::default(),
            contact_file: None,
            template_files: Vec::new(),
            resume_files: Vec::new(),
        }
    }
}

impl<F: Upload> ProcessForm<F> {
    /// Select the contact list; only `.xlsx` workbooks are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidContactFile`] and keeps the previous
    /// selection when `file` is not an Excel workbook.
    pub fn set_contact_file(&mut self, file: F) -> Result<(), FormError> {
        if !is_excel_file(&file.file_name(), &file.mime_type()) {
            return Err(FormError::InvalidContactFile);
        }
        self.contact_file = Some(file);
        Ok(())
    }

    pub fn clear_contact_file(&mut self) {
        self.contact_file = None;
    }

    #[must_use]
    pub fn contact_file(&self) -> Option<&F> {
        self.contact_file.as_ref()
    }

    /// Inline format hint; an empty number is reported by [`Self::validate`].
    #[must_use]
    pub fn phone_number_looks_valid(&self) -> bool {
        self.phone_number.is_empty() || is_valid_phone_number(&self.phone_number)
    }

    /// Every failing submission rule, in display order.
    #[must_use]
    pub fn validate(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        if self.full_name.trim().is_empty() {
            errors.push(FormError::MissingFullName);
        }
        if self.phone_number.trim().is_empty() {
            errors.push(FormError::MissingPhoneNumber);
        }
        if self.contact_file.is_none() {
            errors.push(FormError::MissingContactFile);
        }
        match self.method {
            ProcessingMethod::Folder => {
                if self.templates_folder_path.trim().is_empty() {
                    errors.push(FormError::MissingFolderPath);
                }
            }
            ProcessingMethod::Upload => {
                if self.template_files.is_empty() {
                    errors.push(FormError::MissingTemplateFiles);
                }
                if self.resume_files.is_empty() {
                    errors.push(FormError::MissingResumeFiles);
                }
            }
        }
        errors
    }

    /// Text parts of the multipart body, by wire name.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (FIELD_FULL_NAME, self.full_name.clone()),
            (FIELD_PHONE_NUMBER, self.phone_number.clone()),
            (FIELD_LINKEDIN_URL, self.linkedin_url.clone()),
            (FIELD_PROCESSING_METHOD, self.method.as_str().to_owned()),
        ];
        if self.method == ProcessingMethod::Folder {
            fields.push((FIELD_TEMPLATES_FOLDER_PATH, self.templates_folder_path.clone()));
        }
        fields
    }

    /// File parts of the multipart body, by wire name. Uploaded templates and
    /// resumes are only sent with the upload method.
    #[must_use]
    pub fn file_parts(&self) -> Vec<(&'static str, &F)> {
        let mut parts: Vec<(&'static str, &F)> = Vec::new();
        if let Some(file) = &self.contact_file {
            parts.push((FIELD_FILE, file));
        }
        if self.method == ProcessingMethod::Upload {
            parts.extend(self.template_files.iter().map(|f| (FIELD_TEMPLATE_FILES, f)));
            parts.extend(self.resume_files.iter().map(|f| (FIELD_RESUME_FILES, f)));
        }
        parts
    }

    /// Short description of what will be sent, e.g. for a confirmation line.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.method {
            ProcessingMethod::Folder => format!("Method: {}", self.method.label()),
            ProcessingMethod::Upload => format!(
                "Method: {} | Files: {} templates, {} resumes",
                self.method.label(),
                self.template_files.len(),
                self.resume_files.len()
            ),
        }
    }
}

/// Single message listing every validation failure.
#[must_use]
pub fn validation_message(errors: &[FormError]) -> String {
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("Please fix the following errors:\n{}", lines.join("\n"))
}
