//! EXIF/TIFF header and IFD structure parsing.
//!
//! # EXIF Header Structure (14 bytes)
//!
//! ```text
//! Bytes 0-5:   "Exif\0\0" signature
//! Bytes 6-7:   Byte order ("II" = little-endian, "MM" = big-endian)
//! Bytes 8-9:   Reserved (the TIFF 0x002A magic; not validated)
//! Bytes 10-13: Offset to first IFD (4 bytes, in the declared byte order)
//! ```
//!
//! The TIFF region starts at byte 6, immediately after the signature. Every
//! offset inside the region (the first-IFD pointer and each entry's value
//! offset) is relative to that position, not to the start of the file.
//!
//! # IFD Structure
//!
//! ```text
//! Bytes 0-1: Entry count (u16)
//! Then count × 12-byte entries:
//!   Bytes 0-1:  Tag (u16)
//!   Bytes 2-3:  Field type (u16)
//!   Bytes 4-7:  Value count (u32)
//!   Bytes 8-11: Value offset (u32, relative to the TIFF region start)
//! ```

use crate::error::ExifError;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

use super::tags::FieldType;

// =============================================================================
// Constants
// =============================================================================

/// EXIF payload signature: ASCII "Exif" followed by two zero bytes.
pub const EXIF_SIGNATURE: [u8; 6] = *b"Exif\0\0";

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: [u8; 2] = *b"II";

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: [u8; 2] = *b"MM";

/// Size of the EXIF header in bytes (signature through first-IFD offset).
pub const EXIF_HEADER_SIZE: usize = 14;

/// Offset of the TIFF region within the EXIF payload.
pub const TIFF_REGION_START: usize = 6;

/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

/// Size of the entry count field at the start of an IFD.
const IFD_COUNT_SIZE: usize = 2;

// =============================================================================
// Bounds-checked slicing
// =============================================================================

/// Take `len` bytes at `offset`, or fail with `TruncatedData`.
///
/// Every multi-byte read and value slice in the decoder goes through this
/// check before the bytes are touched.
pub(crate) fn slice_at(data: &[u8], offset: usize, len: usize) -> Result<&[u8], ExifError> {
    data.get(offset..)
        .and_then(|tail| tail.get(..len))
        .ok_or(ExifError::TruncatedData {
            offset,
            needed: len,
            available: data.len().saturating_sub(offset),
        })
}

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of the TIFF region.
///
/// Determined once per decode from the magic bytes after the EXIF signature
/// and fixed for the entire IFD traversal; all multi-byte values must be
/// read respecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }
}

// =============================================================================
// ExifHeader
// =============================================================================

/// Parsed EXIF header.
///
/// Contains what the IFD walker needs to start:
/// - Byte order for reading all subsequent values
/// - Offset of the first IFD, relative to the TIFF region start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExifHeader {
    /// Byte order for all multi-byte values in the TIFF region
    pub byte_order: ByteOrder,

    /// Offset of the first IFD, relative to the TIFF region start
    pub first_ifd_offset: u32,
}

impl ExifHeader {
    /// Parse an EXIF header from a slice beginning at the EXIF signature.
    ///
    /// # Errors
    /// - `TruncatedData` if the slice is shorter than the 14-byte header
    /// - `MalformedHeader` if the signature is not `"Exif\0\0"`
    /// - `UnknownByteOrder` if the order magic is neither `II` nor `MM`
    pub fn parse(data: &[u8]) -> Result<Self, ExifError> {
        let header = slice_at(data, 0, EXIF_HEADER_SIZE)?;

        if header[..6] != EXIF_SIGNATURE {
            return Err(ExifError::MalformedHeader);
        }

        let byte_order = match [header[6], header[7]] {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(ExifError::UnknownByteOrder(header[6], header[7])),
        };

        // Bytes 8-9 hold the TIFF 0x002A magic. The layout reserves them and
        // the decoder does not reject files over their value.
        let first_ifd_offset = byte_order.read_u32(&header[10..14]);

        Ok(ExifHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// IfdEntry
// =============================================================================

/// A single decoded IFD entry: the fixed 12-byte tag/type/count/offset record.
///
/// `value_or_offset` is resolved by [`super::values::read_ascii`] as an
/// offset into the TIFF region; see that function for the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    /// Tag identifier
    pub tag: u16,

    /// Declared field type, if recognized
    pub field_type: Option<FieldType>,

    /// Raw field type value (kept for diagnostics when unrecognized)
    pub field_type_raw: u16,

    /// Number of values of the declared type
    pub count: u32,

    /// Value offset, relative to the TIFF region start
    pub value_or_offset: u32,
}

impl IfdEntry {
    /// Decode one 12-byte entry record.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 12 bytes; callers bounds-check via
    /// [`slice_at`] first.
    fn parse(bytes: &[u8], byte_order: ByteOrder) -> Self {
        let field_type_raw = byte_order.read_u16(&bytes[2..4]);
        IfdEntry {
            tag: byte_order.read_u16(&bytes[0..2]),
            field_type: FieldType::from_u16(field_type_raw),
            field_type_raw,
            count: byte_order.read_u32(&bytes[4..8]),
            value_or_offset: byte_order.read_u32(&bytes[8..12]),
        }
    }
}

// =============================================================================
// Ifd
// =============================================================================

/// A fully decoded Image File Directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ifd {
    /// Entries in directory order
    pub entries: Vec<IfdEntry>,
}

impl Ifd {
    /// Decode the IFD at `ifd_offset` within the TIFF region.
    ///
    /// Reads the 2-byte entry count, then each 12-byte entry, all in the
    /// active byte order. The walk is a single linear pass; no entry depends
    /// on another's resolution order.
    ///
    /// # Errors
    /// `TruncatedData` if the count field or any entry record extends past
    /// the region. The failure is terminal: no partial entry list is
    /// returned.
    pub fn parse(
        tiff_region: &[u8],
        ifd_offset: usize,
        byte_order: ByteOrder,
    ) -> Result<Self, ExifError> {
        let count = byte_order.read_u16(slice_at(tiff_region, ifd_offset, IFD_COUNT_SIZE)?);

        let mut entries = Vec::with_capacity(count as usize);
        for i in 0..count as usize {
            let entry_offset = ifd_offset + IFD_COUNT_SIZE + i * IFD_ENTRY_SIZE;
            let record = slice_at(tiff_region, entry_offset, IFD_ENTRY_SIZE)?;
            entries.push(IfdEntry::parse(record, byte_order));
        }

        Ok(Ifd { entries })
    }
}

// =============================================================================
// Tests
// =============================================================================
