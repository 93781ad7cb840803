//! File loading and primitive byte reads.
//!
//! The decoder core is a pure function over an in-memory buffer; this module
//! is the collaborator that produces that buffer. Opening, reading, and
//! closing the file happen here, and failures stay `std::io::Error`; they
//! never enter the decode error taxonomy.

use std::fs;
use std::io;
use std::path::Path;

use bytes::Bytes;

/// Read the complete contents of a file into an immutable buffer.
///
/// The returned [`Bytes`] owns the data for the whole decode lifetime;
/// the decoder only borrows slices into it.
pub fn load_file(path: &Path) -> io::Result<Bytes> {
    let data = fs::read(path)?;
    Ok(Bytes::from(data))
}

// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// The TIFF region of an EXIF segment is either little-endian or big-endian,
// determined by the magic bytes in its header. Every multi-byte read in the
// decoder goes through these helpers, selected via `ByteOrder`.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
