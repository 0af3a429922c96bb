//! CLI output formatting.
//!
//! Every run ends with one summary line on stdout:
//!
//! ```text
//! Generated photos.json with 42 photos. formatted
//! Generated photos.json with 42 photos. (compact)
//! ```
//!
//! With `--verbose` the summary is preceded by an overview of the manifest,
//! one header per year and one line per photo with its persons. Reference-mode
//! photos get an indented `Source:` line:
//!
//! ```text
//! Years
//! 2021 (2 photos)
//!     001 Anna, Bob
//!         Source: photos/2021/anna_bob.jpg
//!     002 Unknown
//!         Source: photos/2021/IMG_0042.jpg
//! 2022 (0 photos)
//! ```
//!
//! Format functions are pure and return strings; the `print_*` wrappers do
//! the writing. Warnings and errors go to stderr through the log subscriber
//! and `main`, never through this module.

use crate::config::OutputFormat;
use crate::manifest::{Manifest, PhotoRecord};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "photo" } else { "photos" }
}

/// The final line of a successful run.
pub fn format_summary(out: &Path, photo_count: usize, format: OutputFormat) -> String {
    format!(
        "Generated {} with {} photos. {}",
        out.display(),
        photo_count,
        format.label()
    )
}

/// Per-year overview of a built manifest.
pub fn format_overview(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Years".to_string()];

    for year in &manifest.years {
        let n = year.photos.len();
        lines.push(format!("{} ({} {})", year.year, n, plural(n)));

        for (i, photo) in year.photos.iter().enumerate() {
            lines.push(format!(
                "{}{} {}",
                indent(1),
                format_index(i + 1),
                photo.persons().join(", ")
            ));
            if let PhotoRecord::Referenced { path, .. } = photo {
                lines.push(format!("{}Source: {}", indent(2), path));
            }
        }
    }

    lines
}

pub fn print_summary(out: &Path, photo_count: usize, format: OutputFormat) {
    println!("{}", format_summary(out, photo_count, format));
}

pub fn print_overview(manifest: &Manifest) {
    for line in format_overview(manifest) {
        println!("{}", line);
    }
}
