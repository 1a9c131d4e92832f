//! End-to-end behaviour of the file access facade against a scratch directory.

use bridge_traits::{DeviceMetadata, FixedStorageRoots, StaticDeviceMetadata};
use core_files::FileAccessFacade;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    root: PathBuf,
    facade: FileAccessFacade,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path().to_path_buf();
    let facade = FileAccessFacade::new(
        Arc::new(FixedStorageRoots::new(root.join("files")).with_external(root.join("sdcard"))),
        Arc::new(StaticDeviceMetadata::new(
            "android",
            DeviceMetadata::new("Google", "Pixel 8", "14", 34),
        )),
    );

    Fixture {
        _dir: dir,
        root,
        facade,
    }
}

fn s(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[core_async::test]
async fn test_storage_roots_are_reported_as_is() {
    let fx = fixture();

    assert_eq!(
        fx.facade.get_documents_path().await.unwrap(),
        s(&fx.root.join("files"))
    );
    assert_eq!(
        fx.facade.get_external_storage_path().await.unwrap(),
        s(&fx.root.join("sdcard"))
    );
}

#[core_async::test]
async fn test_write_then_read_round_trip() {
    let fx = fixture();
    let log = s(&fx.root.join("logs").join("app-log.log"));

    assert!(fx.facade.write_log_entry(&log, "a").await.unwrap());
    assert!(fx.facade.write_log_entry(&log, "b").await.unwrap());

    assert_eq!(fx.facade.read_log_file(&log).await.unwrap(), "ab");
    assert_eq!(fx.facade.get_file_size(&log).await.unwrap(), 2);
    assert!(fx.facade.file_exists(&log).await.unwrap());
}

#[core_async::test]
async fn test_append_never_truncates_existing_content() {
    let fx = fixture();
    let log_path = fx.root.join("existing.log");
    std::fs::write(&log_path, "line 1\n").unwrap();
    let log = s(&log_path);

    fx.facade.write_log_entry(&log, "line 2\n").await.unwrap();

    assert_eq!(
        fx.facade.read_log_file(&log).await.unwrap(),
        "line 1\nline 2\n"
    );
    assert_eq!(fx.facade.get_file_size(&log).await.unwrap(), 14);
}

#[core_async::test]
async fn test_size_counts_bytes_not_characters() {
    let fx = fixture();
    let log = s(&fx.root.join("utf8.log"));

    fx.facade.write_log_entry(&log, "héllo ✓").await.unwrap();

    assert_eq!(
        fx.facade.get_file_size(&log).await.unwrap(),
        "héllo ✓".len() as u64
    );
    assert_eq!(fx.facade.read_log_file(&log).await.unwrap(), "héllo ✓");
}

#[core_async::test]
async fn test_empty_entry_still_creates_file() {
    let fx = fixture();
    let log = s(&fx.root.join("fresh").join("empty.log"));

    assert!(fx.facade.write_log_entry(&log, "").await.unwrap());
    assert!(fx.facade.file_exists(&log).await.unwrap());
    assert_eq!(fx.facade.get_file_size(&log).await.unwrap(), 0);
}

#[core_async::test]
async fn test_missing_file_defaults() {
    let fx = fixture();
    let missing = s(&fx.root.join("nope.log"));

    assert_eq!(fx.facade.get_file_size(&missing).await.unwrap(), 0);
    assert_eq!(fx.facade.read_log_file(&missing).await.unwrap(), "");
    assert!(fx.facade.delete_log_file(&missing).await.unwrap());
    assert!(!fx.facade.file_exists(&missing).await.unwrap());
    assert!(fx.facade.list_log_files(&missing).await.unwrap().is_empty());
}

#[core_async::test]
async fn test_missing_file_defaults_under_file_parent() {
    let fx = fixture();
    let parent = fx.root.join("app.log");
    std::fs::write(&parent, "x").unwrap();
    let missing = s(&parent.join("child.log"));

    assert_eq!(fx.facade.get_file_size(&missing).await.unwrap(), 0);
    assert_eq!(fx.facade.read_log_file(&missing).await.unwrap(), "");
    assert!(fx.facade.delete_log_file(&missing).await.unwrap());
    assert!(!fx.facade.file_exists(&missing).await.unwrap());
    assert!(fx.facade.list_log_files(&missing).await.unwrap().is_empty());
    assert!(!fx.facade.create_directory(&missing).await.unwrap());
    assert!(parent.is_file());
}

#[core_async::test]
async fn test_delete_then_exists() {
    let fx = fixture();
    let log = s(&fx.root.join("rotate.log"));
    fx.facade.write_log_entry(&log, "old").await.unwrap();

    assert!(fx.facade.delete_log_file(&log).await.unwrap());
    assert!(!fx.facade.file_exists(&log).await.unwrap());
    assert!(fx.facade.delete_log_file(&log).await.unwrap());
}

#[core_async::test]
async fn test_create_directory_is_idempotent() {
    let fx = fixture();
    let dir = fx.root.join("logs").join("2024").join("01");
    let dir_str = s(&dir);

    assert!(fx.facade.create_directory(&dir_str).await.unwrap());
    assert!(dir.is_dir());
    assert!(fx.facade.create_directory(&dir_str).await.unwrap());
    assert!(fx.facade.file_exists(&dir_str).await.unwrap());
}

#[core_async::test]
async fn test_listing_returns_only_regular_files() {
    let fx = fixture();
    let logs = fx.root.join("logs");
    std::fs::create_dir_all(logs.join("archive")).unwrap();
    std::fs::write(logs.join("archive").join("nested.log"), "deep").unwrap();
    std::fs::write(logs.join("app-log.log"), "12345").unwrap();
    std::fs::write(logs.join("app-log.1.log"), "").unwrap();

    let mut files = fx.facade.list_log_files(&s(&logs)).await.unwrap();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "app-log.1.log");
    assert_eq!(files[0].size, 0);
    assert_eq!(files[1].name, "app-log.log");
    assert_eq!(files[1].size, 5);
    assert_eq!(files[1].path, s(&logs.join("app-log.log")));
    assert!(files.iter().all(|f| f.last_modified > 0));
}

#[core_async::test]
async fn test_listing_empty_directory() {
    let fx = fixture();
    let empty = fx.root.join("empty");
    std::fs::create_dir(&empty).unwrap();

    assert!(fx.facade.list_log_files(&s(&empty)).await.unwrap().is_empty());
}

#[core_async::test]
async fn test_device_info_is_stable() {
    let fx = fixture();

    let first = fx.facade.get_device_info().await.unwrap();
    let second = fx.facade.get_device_info().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.platform, "android");
    assert_eq!(first.model, "Pixel 8");
    assert_eq!(first.version, "14");
}
