//! Shared test utilities for building year-organized photo trees.
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_photo(tmp.path(), "2021", "anna_bob.jpg", 1_000);
//! let years = walk(tmp.path()).unwrap();
//! assert_eq!(filenames(&years[0]), vec!["anna_bob.jpg"]);
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use crate::walk::YearEntry;

/// Bytes written into every fixture photo. Only the extension matters to the
/// scanner, so these need not be a valid image.
pub const PHOTO_BYTES: &[u8] = b"\x89PNG fake image";

/// Create `<root>/<year>/<filename>` with [`PHOTO_BYTES`] and set its
/// modification time to `mtime_secs` seconds after the epoch.
pub fn write_photo(root: &Path, year: &str, filename: &str, mtime_secs: u64) -> PathBuf {
    write_file(root, year, filename, PHOTO_BYTES, mtime_secs)
}

/// Like [`write_photo`] with explicit contents.
pub fn write_file(
    root: &Path,
    year: &str,
    filename: &str,
    contents: &[u8],
    mtime_secs: u64,
) -> PathBuf {
    let dir = root.join(year);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(filename);
    fs::write(&path, contents).unwrap();
    set_mtime(&path, mtime_secs);
    path
}

pub fn set_mtime(path: &Path, mtime_secs: u64) {
    set_mtime_precise(path, Duration::from_secs(mtime_secs));
}

/// Set the modification time to `since_epoch`, sub-second precision kept.
pub fn set_mtime_precise(path: &Path, since_epoch: Duration) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(UNIX_EPOCH + since_epoch)
        .unwrap();
}

/// Filenames of a year's items in walk order.
pub fn filenames(year: &YearEntry) -> Vec<&str> {
    year.items.iter().map(|i| i.filename.as_str()).collect()
}
