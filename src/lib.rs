//! # Yearbook
//!
//! Catalogs a photo collection organized by year folders into one JSON
//! manifest. Your filesystem is the data source: four-digit directories are
//! years, image files inside them are photos, and the people in each photo
//! are read from its filename.
//!
//! # Pipeline
//!
//! ```text
//! 1. Walk    root/      →  years + images   (filesystem → ordered items)
//! 2. Build   items      →  Manifest         (persons, paths or base64 data)
//! 3. Write   Manifest   →  photos.json      (pretty or compact JSON)
//! ```
//!
//! Every run rebuilds the manifest from scratch. Image bytes are never
//! decoded; a file is a photo if its extension says so.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Stage 1 — finds year directories and lists their images by modification time |
//! | [`manifest`] | Stage 2 — builds the manifest and serializes it |
//! | [`persons`] | Filename → person names (`John_Doe.jpg` → `John`, `Doe`) |
//! | [`paths`] | Lexical relative paths for reference-mode manifests |
//! | [`config`] | Run configuration built from the command line |
//! | [`output`] | CLI output formatting — summary line and per-year overview |
//!
//! # Design Decisions
//!
//! ## Two Output Shapes
//!
//! A manifest either references images by path (small, needs the files next
//! to it) or embeds them as `data:` URLs (large, self-contained). The two
//! record shapes never mix within a run, and [`manifest::PhotoRecord`] makes
//! the mix unrepresentable.
//!
//! ## Lenient Walk, Strict Build
//!
//! A file that cannot be stat'ed while walking is skipped with a warning;
//! the rest of the collection is still worth cataloging. A file that cannot
//! be read while embedding aborts the run, because a manifest missing image
//! data is worse than no new manifest at all.

pub mod config;
pub mod manifest;
pub mod output;
pub mod paths;
pub mod persons;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
