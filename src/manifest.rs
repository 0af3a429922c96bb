//! Manifest construction and serialization.
//!
//! Stage 2 of the pipeline. Turns the walker's year list into the JSON
//! document that is the tool's only output. Two shapes exist:
//!
//! ## Reference mode (default)
//!
//! ```json
//! {
//!   "years": [
//!     {
//!       "year": "2021",
//!       "photos": [
//!         { "filename": "anna_bob.jpg", "path": "photos/2021/anna_bob.jpg", "persons": ["Anna", "Bob"] }
//!       ]
//!     }
//!   ],
//!   "root": "photos"
//! }
//! ```
//!
//! `path` is relative to the working directory the tool runs in.
//!
//! ## Embed mode (`--embed`)
//!
//! ```json
//! {
//!   "years": [
//!     {
//!       "year": "2021",
//!       "photos": [
//!         { "persons": ["Anna", "Bob"], "data": "data:image/jpeg;base64,/9j/4AAQ..." }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! No paths and no `root`: once the bytes are inline the manifest stands alone.
//!
//! ## Failure policy
//!
//! Any image that cannot be read in embed mode fails the whole build. The
//! output file is only written after the manifest is complete, so a failed
//! run leaves any previous manifest untouched.

use crate::config::OutputFormat;
use crate::paths;
use crate::persons::extract_persons;
use crate::walk::{PhotoItem, YearEntry};
use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(io::Error),
    #[error("cannot read image {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// The manifest document.
///
/// Field order is the JSON key order: `years` first, `root` last.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub years: Vec<YearNode>,
    /// Scan root as given on the command line; reference mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct YearNode {
    pub year: String,
    pub photos: Vec<PhotoRecord>,
}

/// One photo, in whichever shape the run produces.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PhotoRecord {
    Embedded {
        persons: Vec<String>,
        /// `data:<mime>;base64,<bytes>`
        data: String,
    },
    Referenced {
        filename: String,
        path: String,
        persons: Vec<String>,
    },
}

impl PhotoRecord {
    pub fn persons(&self) -> &[String] {
        match self {
            Self::Embedded { persons, .. } | Self::Referenced { persons, .. } => persons,
        }
    }
}

impl Manifest {
    /// Total photos across all years.
    pub fn photo_count(&self) -> usize {
        self.years.iter().map(|y| y.photos.len()).sum()
    }
}

/// Build the manifest for `years`, scanned from `root`.
pub fn build(root: &str, years: &[YearEntry], embed: bool) -> Result<Manifest, BuildError> {
    let mut nodes = Vec::with_capacity(years.len());
    for entry in years {
        let photos = entry
            .items
            .iter()
            .map(|item| build_record(item, embed))
            .collect::<Result<Vec<_>, _>>()?;
        nodes.push(YearNode {
            year: entry.year.clone(),
            photos,
        });
    }

    Ok(Manifest {
        years: nodes,
        root: (!embed).then(|| root.to_string()),
    })
}

fn build_record(item: &PhotoItem, embed: bool) -> Result<PhotoRecord, BuildError> {
    let persons = extract_persons(&item.filename);

    if embed {
        let bytes = fs::read(&item.full_path).map_err(|source| BuildError::Read {
            path: item.full_path.clone(),
            source,
        })?;
        Ok(PhotoRecord::Embedded {
            persons,
            data: data_url(mime_type(&item.filename), &bytes),
        })
    } else {
        let path = paths::relative_to_cwd(&item.full_path).map_err(BuildError::CurrentDir)?;
        Ok(PhotoRecord::Referenced {
            filename: item.filename.clone(),
            path,
            persons,
        })
    }
}

/// MIME type from the file extension; anything unrecognized is JPEG.
///
/// A leading dot starts a hidden name, not an extension: `.png` is JPEG.
pub fn mime_type(filename: &str) -> &'static str {
    let ext = match filename.rfind('.') {
        Some(dot) if dot > 0 => filename[dot + 1..].to_ascii_lowercase(),
        _ => String::new(),
    };
    match ext.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Serialize the manifest. No trailing newline.
pub fn render(manifest: &Manifest, format: OutputFormat) -> Result<String, BuildError> {
    let json = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(manifest)?,
        OutputFormat::Compact => serde_json::to_string(manifest)?,
    };
    Ok(json)
}

/// Render and write the manifest to `out`, replacing any existing file.
pub fn write(manifest: &Manifest, out: &Path, format: OutputFormat) -> Result<(), BuildError> {
    let json = render(manifest, format)?;
    fs::write(out, json).map_err(|source| BuildError::Write {
        path: out.to_path_buf(),
        source,
    })
}
