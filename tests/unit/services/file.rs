use super::*;
use tempfile::tempdir;

#[test]
fn test_write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.md");
    let text = "# Title\n\nsome *text* with ünïcödé\nno trailing newline";

    FileService::write_buffer(&path, &TextBuffer::from_text(text)).unwrap();
    assert_eq!(FileService::read_text(&path).unwrap(), text);
}

#[test]
fn test_read_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = FileService::read_text(&path).unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_read_rejects_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(
        FileService::read_text(&path),
        Err(FileError::NotUtf8(_))
    ));
}

#[test]
fn test_write_into_directory_fails() {
    let dir = tempdir().unwrap();
    let err = FileService::write_buffer(dir.path(), &TextBuffer::new()).unwrap_err();
    assert!(matches!(err, FileError::IsDirectory(_)));
}

#[test]
fn test_resolve_save_path_adds_default_extension() {
    assert_eq!(
        resolve_save_path("draft").unwrap(),
        PathBuf::from("draft.txt")
    );
    assert_eq!(
        resolve_save_path(" script.py ").unwrap(),
        PathBuf::from("script.py")
    );
    assert!(matches!(resolve_save_path("   "), Err(FileError::EmptyPath)));
}

#[test]
fn test_resolve_open_path_keeps_name() {
    assert_eq!(resolve_open_path("README").unwrap(), PathBuf::from("README"));
    assert!(resolve_open_path("").is_err());
}

#[test]
fn test_file_filters() {
    assert_eq!(FILE_FILTERS.len(), 7);
    assert!(FILE_FILTERS[0].matches(Path::new("anything")));
    assert_eq!(file_type_label(Path::new("page.HTML")), "HTML Documents");
    assert_eq!(file_type_label(Path::new("main.rs")), "All Files");
    assert_eq!(filter_hint(), ".txt .py .md .js .html .css");
}
