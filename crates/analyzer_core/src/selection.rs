use bytes::Bytes;
use engine_logging::engine_info;
use thiserror::Error;

/// Mime types the analysis service knows how to load.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// A document handed over by the file picker. Replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unsupported file type {mime_type} for {name}")]
    Rejected { name: String, mime_type: String },
}

/// Parameters such as `; charset=utf-8` are ignored.
pub fn is_accepted_mime_type(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or(mime_type).trim();
    ACCEPTED_MIME_TYPES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(essence))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelectionManager {
    current: Option<SelectedFile>,
    error: Option<SelectionError>,
}

impl FileSelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `file` if its type is on the allow-list; otherwise records the
    /// rejection and keeps the current selection.
    pub fn select(&mut self, file: SelectedFile) -> Result<(), SelectionError> {
        if !is_accepted_mime_type(&file.mime_type) {
            engine_info!(
                "Rejected selection name={} mime_type={}",
                file.name,
                file.mime_type
            );
            let err = SelectionError::Rejected {
                name: file.name,
                mime_type: file.mime_type,
            };
            self.error = Some(err.clone());
            return Err(err);
        }
        self.current = Some(file);
        self.error = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.error = None;
    }

    pub fn current(&self) -> Option<&SelectedFile> {
        self.current.as_ref()
    }

    pub fn error(&self) -> Option<&SelectionError> {
        self.error.as_ref()
    }
}
