//! # exif-peek
//!
//! Extracts camera metadata (manufacturer, model, capture date) from the
//! EXIF/TIFF structure embedded in JPEG files.
//!
//! The decoder is a pure function over an in-memory byte buffer: it locates
//! the APP1 segment, validates the EXIF header, detects the TIFF byte order,
//! and walks the Image File Directory, resolving recognized tags to strings.
//! Every multi-byte read and value slice is bounds-checked first, so corrupt
//! or hostile input fails with a typed error instead of reading out of
//! bounds.
//!
//! ## Architecture
//!
//! - [`io`] - file loading and primitive endian reads
//! - [`mod@format`] - JPEG segment scanning and EXIF/TIFF parsing
//! - [`metadata`] - the decode pipeline and its output types
//! - [`error`] - the decode error taxonomy
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust
//! use exif_peek::{read_metadata, ExifError};
//!
//! let buffer: &[u8] = &[0x00, 0x00]; // not a JPEG
//! assert_eq!(read_metadata(buffer), Err(ExifError::InvalidContainer));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod metadata;

// Re-export commonly used types
pub use config::Config;
pub use error::ExifError;
pub use format::jpeg::find_exif_payload;
pub use format::tiff::{
    read_ascii, ByteOrder, ExifHeader, ExifTag, FieldType, Ifd, IfdEntry, EXIF_HEADER_SIZE,
    EXIF_SIGNATURE, IFD_ENTRY_SIZE, TIFF_REGION_START,
};
pub use io::load_file;
pub use metadata::{read_metadata, CameraMetadata, RawEntry};
