//! exif-peek - camera metadata from JPEG EXIF segments.
//!
//! This binary is the thin boundary around the decoder: it reads the file,
//! runs the decode, formats the result, and maps outcomes to exit codes.
//! The decoder itself never terminates the process.

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exif_peek::{load_file, read_metadata, CameraMetadata, Config, ExifError};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    let data = match load_file(&config.image) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {}: {}", config.image.display(), e);
            return ExitCode::FAILURE;
        }
    };
    debug!(bytes = data.len(), "loaded {}", config.image.display());

    match read_metadata(&data) {
        Ok(metadata) => {
            print_metadata(&metadata, &config);
            ExitCode::SUCCESS
        }
        // A JPEG without EXIF data is a property of the file, not a failure.
        Err(ExifError::SegmentNotFound) => {
            println!("{}: no EXIF metadata", config.image.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to decode {}: {}", config.image.display(), e);
            ExitCode::FAILURE
        }
    }
}

/// Render the decoded metadata to stdout.
fn print_metadata(metadata: &CameraMetadata, config: &Config) {
    if config.json {
        // CameraMetadata derives Serialize over plain fields; this cannot fail
        println!("{}", serde_json::to_string_pretty(metadata).unwrap());
        return;
    }

    if metadata.is_empty() {
        println!(
            "{}: EXIF present, but no camera fields found",
            config.image.display()
        );
    }
    if let Some(ref make) = metadata.manufacturer {
        println!("Manufacturer: {}", make);
    }
    if let Some(ref model) = metadata.camera_model {
        println!("Camera model: {}", model);
    }
    if let Some(ref date) = metadata.date_taken {
        println!("Date taken:   {}", date);
    }

    if config.entries {
        println!();
        println!("Decoded IFD entries:");
        for entry in &metadata.entries {
            println!(
                "  tag 0x{:04X}  type {:>2}  count {:>6}  value/offset {}",
                entry.tag, entry.field_type, entry.count, entry.value_or_offset
            );
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exif_peek=debug"
    } else {
        "exif_peek=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
