//! Year directory discovery.
//!
//! Stage 1 of the pipeline. Lists the year directories under the scan root
//! and the image files inside each one:
//!
//! ```text
//! photos/                    # Scan root
//! ├── 2021/                  # Year directory (exactly four digits)
//! │   ├── anna_bob.jpg
//! │   ├── notes.txt          # Not an image, ignored
//! │   └── carl.PNG
//! ├── 2022/
//! │   └── dana.webp
//! ├── 19999/                 # Five digits, ignored
//! └── misc/                  # Not a year, ignored
//! ```
//!
//! Years come out in ascending order; images within a year are ordered by
//! modification time, oldest first, with ties kept in listing order.
//!
//! ## Failure policy
//!
//! Failing to read the root or a year directory aborts the scan. Failing to
//! stat a single entry does not: the entry is skipped and a warning is logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot read root directory {path}: {source}")]
    Root { path: PathBuf, source: io::Error },
    #[error("cannot read year directory {path}: {source}")]
    Year { path: PathBuf, source: io::Error },
}

/// Extensions recognized as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// One year directory and its images, oldest first.
#[derive(Debug, Clone)]
pub struct YearEntry {
    pub year: String,
    pub items: Vec<PhotoItem>,
}

/// An image file found inside a year directory.
#[derive(Debug, Clone)]
pub struct PhotoItem {
    pub filename: String,
    pub full_path: PathBuf,
    /// Full-precision modification time, the sort key within a year.
    pub modified: SystemTime,
}

/// Scan `root` for year directories and their images.
pub fn walk(root: &Path) -> Result<Vec<YearEntry>, WalkError> {
    let mut years = Vec::new();
    for year in year_names(root)? {
        let dir = root.join(&year);
        let items = collect_items(&dir)?;
        debug!(year = %year, photos = items.len(), "scanned year directory");
        years.push(YearEntry { year, items });
    }
    Ok(years)
}

fn year_names(root: &Path) -> Result<Vec<String>, WalkError> {
    let root_err = |source| WalkError::Root {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(root_err)? {
        let entry = entry.map_err(root_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_year_name(&name) && entry.file_type().map_err(root_err)?.is_dir() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

fn collect_items(dir: &Path) -> Result<Vec<PhotoItem>, WalkError> {
    let year_err = |source| WalkError::Year {
        path: dir.to_path_buf(),
        source,
    };

    let mut items = Vec::new();
    for entry in fs::read_dir(dir).map_err(year_err)? {
        let entry = entry.map_err(year_err)?;
        let full_path = entry.path();
        let filename = entry.file_name().to_string_lossy().into_owned();

        let metadata = match fs::metadata(&full_path) {
            Ok(m) => m,
            Err(e) => {
                warn!("could not read {}: {}", full_path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() || !is_image_name(&filename) {
            continue;
        }
        let modified = match metadata.modified() {
            Ok(t) => t,
            Err(e) => {
                warn!("could not read {}: {}", full_path.display(), e);
                continue;
            }
        };

        items.push(PhotoItem {
            filename,
            full_path,
            modified,
        });
    }

    items.sort_by_key(|item| item.modified);
    Ok(items)
}

/// Exactly four ASCII digits.
pub fn is_year_name(name: &str) -> bool {
    name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `filename` ends in `.<ext>` for a known image extension.
///
/// Works on the raw name rather than [`Path::extension`] so that a file
/// literally called `.jpg` still counts.
pub fn is_image_name(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}
