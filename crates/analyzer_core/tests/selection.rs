use analyzer_core::{
    is_accepted_mime_type, FileSelectionManager, SelectedFile, SelectionError, ACCEPTED_MIME_TYPES,
};

fn file(name: &str, mime_type: &str) -> SelectedFile {
    SelectedFile::new(name, mime_type, b"content".to_vec())
}

#[test]
fn accepts_every_allow_listed_type() {
    for mime_type in ACCEPTED_MIME_TYPES {
        let mut manager = FileSelectionManager::new();
        let candidate = file("doc", mime_type);
        assert_eq!(manager.select(candidate.clone()), Ok(()));
        assert_eq!(manager.current(), Some(&candidate));
        assert_eq!(manager.error(), None);
    }
}

#[test]
fn mime_match_ignores_case_and_parameters() {
    assert!(is_accepted_mime_type("Application/PDF"));
    assert!(is_accepted_mime_type("text/plain; charset=utf-8"));
    assert!(!is_accepted_mime_type("text/html"));
    assert!(!is_accepted_mime_type(""));
    assert!(!is_accepted_mime_type("application/pdfx"));
}

#[test]
fn rejection_leaves_selection_unchanged() {
    let mut manager = FileSelectionManager::new();
    let kept = file("report.pdf", "application/pdf");
    manager.select(kept.clone()).unwrap();

    for mime_type in ["image/png", "application/zip", "application/octet-stream"] {
        let err = manager.select(file("other", mime_type)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::Rejected {
                name: "other".to_string(),
                mime_type: mime_type.to_string(),
            }
        );
        assert!(err.to_string().contains(mime_type));
        assert_eq!(manager.current(), Some(&kept));
        assert_eq!(manager.error(), Some(&err));
    }
}

#[test]
fn new_selection_replaces_wholesale() {
    let mut manager = FileSelectionManager::new();
    manager.select(file("a.txt", "text/plain")).unwrap();
    let replacement = SelectedFile::new("b.pdf", "application/pdf", vec![9u8; 3]);
    manager.select(replacement.clone()).unwrap();

    assert_eq!(manager.current(), Some(&replacement));
    assert_eq!(manager.current().map(SelectedFile::size), Some(3));
}

#[test]
fn clear_resets_selection_and_error() {
    let mut manager = FileSelectionManager::new();
    manager.select(file("a.txt", "text/plain")).unwrap();
    let _ = manager.select(file("b.png", "image/png"));

    manager.clear();

    assert_eq!(manager, FileSelectionManager::default());
}
