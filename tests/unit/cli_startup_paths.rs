use std::path::Path;
use tempfile::tempdir;

#[test]
fn no_argument_means_untitled() {
    let dir = tempdir().unwrap();
    assert_eq!(super::resolve_startup_path(dir.path(), None).unwrap(), None);
    assert_eq!(super::resolve_startup_path(dir.path(), Some("  ")).unwrap(), None);
}

#[test]
fn relative_argument_is_joined_to_cwd() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    std::fs::write(cwd.join("a.txt"), "hello\n").unwrap();

    let path = super::resolve_startup_path(cwd, Some("a.txt")).unwrap();
    assert_eq!(path, Some(cwd.join("a.txt")));
}

#[test]
fn missing_file_is_accepted() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    let path = super::resolve_startup_path(cwd, Some("new/notes.txt")).unwrap();
    assert_eq!(path, Some(cwd.join("new/notes.txt")));
}

#[test]
fn absolute_argument_is_kept() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("abs.txt");
    let arg = file.display().to_string();
    let path = super::resolve_startup_path(Path::new("/somewhere/else"), Some(&arg)).unwrap();
    assert_eq!(path, Some(file));
}

#[test]
fn directory_argument_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("workspace")).unwrap();
    let err = super::resolve_startup_path(dir.path(), Some("workspace")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
