//! Upload integration tests
//!
//! Real files in a temp dir for the filesystem path, and an in-memory source
//! with per-file delays to force out-of-order completions.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use image::{ImageFormat, RgbImage};
use storyboard_core::{
    read_entry, read_selection, DataUri, FileSource, FsSource, ImageEntry, ImageList, UploadConfig,
    UploadError,
};
use tempfile::TempDir;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([200, 40, 90]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode png");
    buffer
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

fn names_of(list: &ImageList) -> Vec<&str> {
    list.iter().map(|e| e.name.as_str()).collect()
}

/// Serves files from memory, each after its own delay
#[derive(Clone)]
struct DelayedSource {
    files: Arc<HashMap<PathBuf, (Duration, Vec<u8>)>>,
}

impl DelayedSource {
    fn new(files: Vec<(&str, u64, Vec<u8>)>) -> Self {
        let files = files
            .into_iter()
            .map(|(name, delay_ms, bytes)| (PathBuf::from(name), (Duration::from_millis(delay_ms), bytes)))
            .collect();
        Self {
            files: Arc::new(files),
        }
    }
}

impl FileSource for DelayedSource {
    async fn len(&self, path: &Path) -> std::io::Result<u64> {
        match self.files.get(path) {
            Some((_, bytes)) => Ok(bytes.len() as u64),
            None => Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")),
        }
    }

    async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let Some((delay, bytes)) = self.files.get(path).cloned() else {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
        };
        tokio::time::sleep(delay).await;
        Ok(bytes)
    }
}

#[tokio::test]
async fn upload_one_file_into_empty_list() {
    let dir = TempDir::new().unwrap();
    let bytes = png_bytes(4, 3);
    let path = write_file(&dir, "cover.png", &bytes);

    let outcome = read_selection(FsSource, vec![path], &UploadConfig::default()).await;
    assert!(outcome.failures.is_empty());

    let list = outcome.apply(&ImageList::default()).unwrap();
    assert_eq!(list.len(), 1);

    let entry = list.get(0).unwrap();
    assert_eq!(entry.name, "cover.png");
    assert_eq!(entry.uri.mime(), "image/png");
    assert!(entry.uri.as_str().starts_with("data:image/png;base64,"));
    assert_eq!(entry.uri.decode_bytes().unwrap(), bytes);
}

#[tokio::test]
async fn upload_appends_after_existing_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "new.png", &png_bytes(2, 2));

    let previous: ImageList = ["a", "b"]
        .iter()
        .map(|n| ImageEntry::new(*n, DataUri::encode("image/png", n.as_bytes())))
        .collect();

    let outcome = read_selection(FsSource, vec![path], &UploadConfig::default()).await;
    let next = outcome.apply(&previous).unwrap();

    assert_eq!(&next.as_slice()[..2], previous.as_slice());
    assert_eq!(names_of(&next), vec!["a", "b", "new.png"]);
}

#[tokio::test(start_paused = true)]
async fn out_of_order_completions_keep_selection_order() {
    let png = png_bytes(1, 1);
    let source = DelayedSource::new(vec![
        ("first.png", 300, png.clone()),
        ("second.png", 10, png.clone()),
        ("third.png", 120, png),
    ]);
    let paths = vec!["first.png".into(), "second.png".into(), "third.png".into()];

    let outcome = read_selection(source, paths, &UploadConfig::default()).await;
    let list = outcome.apply(&ImageList::default()).unwrap();
    assert_eq!(names_of(&list), vec!["first.png", "second.png", "third.png"]);
}

#[tokio::test]
async fn failures_do_not_discard_siblings() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.png", &png_bytes(2, 2));
    let text = write_file(&dir, "notes.txt", b"just some words");
    let empty = write_file(&dir, "blank.png", b"");
    let missing = dir.path().join("missing.png");

    let outcome = read_selection(
        FsSource,
        vec![text, good, empty, missing],
        &UploadConfig::default(),
    )
    .await;

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].name, "good.png");
    assert_eq!(outcome.failures.len(), 3);
    assert!(outcome
        .failures
        .iter()
        .any(|e| matches!(e, UploadError::UnsupportedFormat { .. })));
    assert!(outcome.failures.iter().any(|e| matches!(e, UploadError::Empty { .. })));
    assert!(outcome.failures.iter().any(|e| matches!(e, UploadError::Read { .. })));
}

#[tokio::test]
async fn all_failures_leave_list_untouched() {
    let dir = TempDir::new().unwrap();
    let text = write_file(&dir, "notes.txt", b"not an image");

    let outcome = read_selection(FsSource, vec![text], &UploadConfig::default()).await;
    assert!(outcome.apply(&ImageList::default()).is_none());
    assert_eq!(outcome.failures.len(), 1);
}

#[tokio::test]
async fn empty_selection_is_empty_outcome() {
    let outcome = read_selection(FsSource, Vec::new(), &UploadConfig::default()).await;
    assert!(outcome.is_empty());
}

#[tokio::test]
async fn size_limit_rejects_large_files() {
    let dir = TempDir::new().unwrap();
    let bytes = png_bytes(16, 16);
    let path = write_file(&dir, "big.png", &bytes);

    let config = UploadConfig::default().with_max_bytes(8);
    let err = read_entry(&FsSource, &path, &config).await.unwrap_err();
    match err {
        UploadError::TooLarge { size, limit, .. } => {
            assert_eq!(size, bytes.len() as u64);
            assert_eq!(limit, 8);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

/// Reports one size up front and serves another, counting what it hands out
#[derive(Clone)]
struct CountingSource {
    reported: u64,
    bytes: Arc<Vec<u8>>,
    served: Arc<AtomicU64>,
}

impl CountingSource {
    fn new(reported: u64, bytes: Vec<u8>) -> Self {
        Self {
            reported,
            bytes: Arc::new(bytes),
            served: Arc::new(AtomicU64::new(0)),
        }
    }

    fn served(&self) -> u64 {
        self.served.load(Ordering::SeqCst)
    }
}

impl FileSource for CountingSource {
    async fn len(&self, _path: &Path) -> std::io::Result<u64> {
        Ok(self.reported)
    }

    async fn read(&self, _path: &Path) -> std::io::Result<Vec<u8>> {
        self.served.fetch_add(self.bytes.len() as u64, Ordering::SeqCst);
        Ok(self.bytes.as_ref().clone())
    }
}

#[tokio::test]
async fn oversized_files_are_rejected_before_reading() {
    let source = CountingSource::new(64 * 1024 * 1024, vec![0u8; 4096]);
    let config = UploadConfig::default().with_max_bytes(8);

    let err = read_entry(&source, Path::new("huge.png"), &config)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        UploadError::TooLarge { size, limit: 8, .. } if size == 64 * 1024 * 1024
    ));
    assert_eq!(source.served(), 0);
}

#[tokio::test]
async fn size_limit_still_applies_when_file_grows() {
    let bytes = png_bytes(16, 16);
    let source = CountingSource::new(4, bytes.clone());
    let config = UploadConfig::default().with_max_bytes(8);

    let err = read_entry(&source, Path::new("growing.png"), &config)
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { size, .. } if size == bytes.len() as u64));
    assert_eq!(source.served(), bytes.len() as u64);
}

#[tokio::test]
async fn identical_files_become_distinct_entries() {
    let dir = TempDir::new().unwrap();
    let bytes = png_bytes(3, 3);
    let a = write_file(&dir, "a.png", &bytes);
    let b = write_file(&dir, "b.png", &bytes);

    let outcome = read_selection(FsSource, vec![a, b], &UploadConfig::default()).await;
    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.entries[0].uri, outcome.entries[1].uri);
    assert_ne!(outcome.entries[0].id, outcome.entries[1].id);
}

#[tokio::test]
async fn svg_files_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "icon.svg",
        br#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"/>"#,
    );

    let entry = read_entry(&FsSource, &path, &UploadConfig::default()).await.unwrap();
    assert_eq!(entry.uri.mime(), "image/svg+xml");
}
