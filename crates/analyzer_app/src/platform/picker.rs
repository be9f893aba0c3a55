use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use analyzer_core::SelectedFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0:?} is not a file")]
    NotAFile(PathBuf),
}

/// Reads `path` into a [`SelectedFile`]. The declared mime type comes from the
/// extension, the way a browser file input reports it; type checking is left
/// to the selection manager.
pub fn pick_file(path: &Path) -> Result<SelectedFile, PickError> {
    let io_err = |source| PickError::Io {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(io_err)?;
    if !metadata.is_file() {
        return Err(PickError::NotAFile(path.to_path_buf()));
    }
    let content = fs::read(path).map_err(io_err)?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    Ok(SelectedFile::new(name, mime_type, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyzer_core::is_accepted_mime_type;
    use tempfile::TempDir;

    #[test]
    fn derives_mime_type_from_extension() {
        let temp = TempDir::new().unwrap();
        let cases = [
            ("report.pdf", "application/pdf"),
            ("notes.txt", "text/plain"),
            ("legacy.doc", "application/msword"),
            (
                "modern.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
        ];
        for (name, expected) in cases {
            let path = temp.path().join(name);
            fs::write(&path, b"data").unwrap();

            let file = pick_file(&path).unwrap();

            assert_eq!(file.name, name);
            assert_eq!(file.mime_type, expected);
            assert_eq!(file.content.as_ref(), b"data");
            assert!(is_accepted_mime_type(&file.mime_type));
        }
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.unknownext");
        fs::write(&path, b"??").unwrap();

        let file = pick_file(&path).unwrap();

        assert_eq!(file.mime_type, "application/octet-stream");
        assert!(!is_accepted_mime_type(&file.mime_type));
    }

    #[test]
    fn directories_and_missing_paths_fail() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            pick_file(temp.path()),
            Err(PickError::NotAFile(_))
        ));
        assert!(matches!(
            pick_file(&temp.path().join("missing.pdf")),
            Err(PickError::Io { .. })
        ));
    }
}
