use create_module::error::Error;
use create_module::workspace::{clear_dir, ensure_dir_empty};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_ensure_dir_empty_creates_missing_dir() {
    let temp_dir = TempDir::new().unwrap();
    let module_dir = temp_dir.path().join("deep").join("module");

    assert!(ensure_dir_empty(&module_dir).is_ok());
    assert!(module_dir.is_dir());
}

#[test]
fn test_ensure_dir_empty_accepts_empty_dir() {
    let temp_dir = TempDir::new().unwrap();

    assert!(ensure_dir_empty(temp_dir.path()).is_ok());
}

#[test]
fn test_ensure_dir_empty_rejects_non_empty_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("existing.txt"), "keep me").unwrap();

    match ensure_dir_empty(temp_dir.path()) {
        Err(Error::DirectoryNotEmptyError { module_dir }) => {
            assert!(module_dir.contains(temp_dir.path().to_str().unwrap()))
        }
        other => panic!("Expected DirectoryNotEmptyError, got {:?}", other),
    }

    // The guard must leave the directory contents untouched.
    let content = fs::read_to_string(temp_dir.path().join("existing.txt")).unwrap();
    assert_eq!(content, "keep me");
}

#[test]
fn test_clear_dir_removes_files_and_subdirs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir_all(temp_dir.path().join("sub").join("nested")).unwrap();
    fs::write(temp_dir.path().join("sub").join("b.txt"), "b").unwrap();

    clear_dir(temp_dir.path()).unwrap();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_clear_dir_removes_symlink_without_following_it() {
    let temp_dir = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    fs::write(target.path().join("keep.txt"), "keep").unwrap();
    std::os::unix::fs::symlink(target.path(), temp_dir.path().join("link")).unwrap();

    clear_dir(temp_dir.path()).unwrap();

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    // The symlink target must be left intact.
    assert!(target.path().join("keep.txt").is_file());
}

#[test]
fn test_clear_dir_creates_missing_dir() {
    let temp_dir = TempDir::new().unwrap();
    let module_dir = temp_dir.path().join("m");

    clear_dir(&module_dir).unwrap();

    assert!(module_dir.is_dir());
}
