//! Run configuration.
//!
//! Everything the pipeline needs to know arrives on the command line. The
//! binary parses the flags once into a [`RunConfig`] and passes it down by
//! reference; there is no config file and no environment lookup.
//!
//! | Flag | Field | Default |
//! |------|-------|---------|
//! | `--root`, `-r` | [`RunConfig::root`] | `.` |
//! | `--out`, `-o` | [`RunConfig::out`] | `photos.json` |
//! | `--embed`, `-e` | [`RunConfig::embed`] | off |
//! | `--compact`, `-c` | [`RunConfig::format`] | pretty |
//! | `--verbose`, `-v` | [`RunConfig::verbose`] | off |

use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_OUT: &str = "photos.json";

/// How the manifest JSON is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Two-space indented.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

impl OutputFormat {
    pub fn from_compact_flag(compact: bool) -> Self {
        if compact { Self::Compact } else { Self::Pretty }
    }

    /// Label used in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pretty => "formatted",
            Self::Compact => "(compact)",
        }
    }
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory containing the year folders.
    pub root: PathBuf,
    /// Manifest destination, overwritten on success.
    pub out: PathBuf,
    /// Inline base64 image data instead of relative paths.
    pub embed: bool,
    pub format: OutputFormat,
    /// Print the per-year overview and debug events.
    pub verbose: bool,
}

impl RunConfig {
    /// The root exactly as given, for the manifest's `root` field.
    pub fn root_label(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    /// Log filter directive for the subscriber.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            out: PathBuf::from(DEFAULT_OUT),
            embed: false,
            format: OutputFormat::default(),
            verbose: false,
        }
    }
}
