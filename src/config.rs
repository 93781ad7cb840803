//! CLI configuration for exif-peek.
//!
//! A single flat configuration struct parsed by clap. Flags that make sense
//! in scripted use can also come from environment variables with the
//! `EXIF_PEEK_` prefix.

use std::path::PathBuf;

use clap::Parser;

/// Extract camera metadata from a JPEG's EXIF segment.
///
/// Reads the file into memory, locates the APP1 segment, decodes the
/// EXIF/TIFF directory, and prints the manufacturer, camera model, and
/// capture date when present.
#[derive(Parser, Debug, Clone)]
#[command(name = "exif-peek")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the JPEG file to inspect.
    pub image: PathBuf,

    /// Print the result as JSON instead of a human-readable report.
    #[arg(long, default_value_t = false, env = "EXIF_PEEK_JSON")]
    pub json: bool,

    /// Also list every decoded IFD entry (tag, type, count, value/offset).
    #[arg(long, default_value_t = false)]
    pub entries: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false, env = "EXIF_PEEK_VERBOSE")]
    pub verbose: bool,
}

// =============================================================================
// Tests
// =============================================================================
