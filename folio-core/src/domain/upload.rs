//! Upload form model and client-side validation

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::work::Category;

/// Largest accepted image, in bytes (4 MiB)
pub const MAX_IMAGE_SIZE: u64 = 4 * 1024 * 1024;

/// MIME types the gallery accepts
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// MIME type for a file name, the way a browser derives `File.type`
pub fn mime_type_for(file_name: &str) -> Option<&'static str> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

/// A picked image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    /// Empty when the type could not be derived
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_type_for(&file_name).unwrap_or_default().to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read an image from disk
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Form field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadField {
    Title,
    Category,
    File,
}

impl UploadField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadField::Title => "title",
            UploadField::Category => "category",
            UploadField::File => "file",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadRule {
    TitleRequired,
    CategoryRequired,
    FileRequired,
    FileType,
    FileSize,
}

impl UploadRule {
    pub fn field(&self) -> UploadField {
        match self {
            UploadRule::TitleRequired => UploadField::Title,
            UploadRule::CategoryRequired => UploadField::Category,
            UploadRule::FileRequired | UploadRule::FileType | UploadRule::FileSize => {
                UploadField::File
            }
        }
    }

    /// Message catalog key for this rule
    pub fn message_key(&self) -> &'static str {
        match self {
            UploadRule::TitleRequired => "upload.titleRequired",
            UploadRule::CategoryRequired => "upload.categoryRequired",
            UploadRule::FileRequired => "upload.fileRequired",
            UploadRule::FileType => "upload.fileType",
            UploadRule::FileSize => "upload.fileSize",
        }
    }
}

/// Every rule a submission broke, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UploadErrors(Vec<UploadRule>);

impl UploadErrors {
    pub fn rules(&self) -> &[UploadRule] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The rule broken for a field, if any
    pub fn for_field(&self, field: UploadField) -> Option<UploadRule> {
        self.0.iter().copied().find(|r| r.field() == field)
    }

    pub fn contains(&self, rule: UploadRule) -> bool {
        self.0.contains(&rule)
    }
}

impl fmt::Display for UploadErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|r| r.field().as_str()).collect();
        write!(f, "invalid upload fields: {}", fields.join(", "))
    }
}

impl std::error::Error for UploadErrors {}

/// What the user filled into the add-picture form
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub title: String,
    pub category_id: Option<u32>,
    pub file: Option<ImageFile>,
}

/// A submission that passed validation, ready for the multipart POST
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub title: String,
    pub category_id: u32,
    pub file: ImageFile,
}

impl UploadRequest {
    /// Check the request against the upload policy
    ///
    /// All rules are evaluated; a file with both a bad type and a bad size
    /// reports the type only, one message per field.
    pub fn validate(self, categories: &[Category]) -> std::result::Result<ValidatedUpload, UploadErrors> {
        let mut errors = Vec::new();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.push(UploadRule::TitleRequired);
        }

        let category_id = self
            .category_id
            .filter(|id| categories.iter().any(|c| c.id == *id));
        if category_id.is_none() {
            errors.push(UploadRule::CategoryRequired);
        }

        match &self.file {
            None => errors.push(UploadRule::FileRequired),
            Some(file) if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) => {
                errors.push(UploadRule::FileType)
            }
            Some(file) if file.size() > MAX_IMAGE_SIZE => errors.push(UploadRule::FileSize),
            Some(_) => {}
        }

        match (category_id, self.file) {
            (Some(category_id), Some(file)) if errors.is_empty() => Ok(ValidatedUpload {
                title,
                category_id,
                file,
            }),
            _ => Err(UploadErrors(errors)),
        }
    }
}

/// Add-picture form state: the inline errors currently displayed
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    errors: UploadErrors,
    selected_category: Option<u32>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission, replacing whatever errors were shown before
    pub fn submit(
        &mut self,
        request: UploadRequest,
        categories: &[Category],
    ) -> std::result::Result<ValidatedUpload, UploadErrors> {
        self.errors = UploadErrors::default();
        self.selected_category = request.category_id;
        request.validate(categories).map_err(|errors| {
            self.errors = errors.clone();
            errors
        })
    }

    pub fn errors(&self) -> &UploadErrors {
        &self.errors
    }

    pub fn selected_category(&self) -> Option<u32> {
        self.selected_category
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
