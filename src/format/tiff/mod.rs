//! EXIF/TIFF parser.
//!
//! EXIF reuses the TIFF binary layout: a byte-order-sensitive header
//! followed by an Image File Directory of fixed-size tagged entries.
//!
//! # Key Concepts
//!
//! - **Byte order**: the TIFF region declares its endianness (II =
//!   little-endian, MM = big-endian) right after the EXIF signature. All
//!   multi-byte values must be read respecting that order.
//!
//! - **Relative offsets**: every offset in the region (the first-IFD
//!   pointer and each entry's value offset) is relative to the TIFF region
//!   start (the byte after the 6-byte signature), not to the file start.
//!
//! - **IFD (Image File Directory)**: a 2-byte entry count followed by
//!   12-byte entries, each a tag/type/count/value-or-offset quadruplet.

mod parser;
mod tags;
mod values;

pub use parser::{
    ByteOrder, ExifHeader, Ifd, IfdEntry, EXIF_HEADER_SIZE, EXIF_SIGNATURE, IFD_ENTRY_SIZE,
    TIFF_REGION_START,
};
pub use tags::{ExifTag, FieldType};
pub use values::read_ascii;
