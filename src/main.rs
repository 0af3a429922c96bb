use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use yearbook::config::{self, OutputFormat, RunConfig};
use yearbook::manifest::{self, Manifest};
use yearbook::{output, walk};

#[derive(Parser)]
#[command(name = "yearbook")]
#[command(about = "Catalog year-organized photo folders into a JSON manifest")]
#[command(long_about = "\
Catalog year-organized photo folders into a JSON manifest

Every directory under the root named with exactly four digits is a year.
Images inside it (jpg, jpeg, png, gif, webp, bmp) are listed oldest first,
and the people in each photo are read from its filename.

Layout:

  photos/
  ├── 2021/
  │   ├── anna_bob.jpg        # persons: Anna, Bob
  │   └── IMG_0042.png        # persons: Img
  └── 2022/
      └── mary-anne, bob.png  # persons: Mary, Anne, Bob

By default photos are referenced by their path relative to the current
directory. With --embed the image bytes are inlined as base64 data URLs.")]
#[command(version)]
#[command(args_override_self = true)]
struct Cli {
    /// Directory containing the year folders
    #[arg(short, long, default_value = config::DEFAULT_ROOT)]
    root: PathBuf,

    /// Manifest file to write (overwritten)
    #[arg(short, long, default_value = config::DEFAULT_OUT)]
    out: PathBuf,

    /// Embed base64 image data instead of paths
    #[arg(short, long)]
    embed: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(short, long)]
    compact: bool,

    /// Print a per-year overview and debug events
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            out: cli.out,
            embed: cli.embed,
            format: OutputFormat::from_compact_flag(cli.compact),
            verbose: cli.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 like every other failure; help and version exit 0.
            if let Err(io) = e.print() {
                eprintln!("Error: {io}");
                return ExitCode::FAILURE;
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = RunConfig::from(cli);

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&config) {
        Ok(manifest) => {
            if config.verbose {
                output::print_overview(&manifest);
            }
            output::print_summary(&config.out, manifest.photo_count(), config.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Scan, build and write. Nothing is written unless every step before it succeeds.
fn run(config: &RunConfig) -> Result<Manifest, Box<dyn std::error::Error>> {
    let years = walk::walk(&config.root)?;
    let manifest = manifest::build(&config.root_label(), &years, config.embed)?;
    manifest::write(&manifest, &config.out, config.format)?;
    Ok(manifest)
}
