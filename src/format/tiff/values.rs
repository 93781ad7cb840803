//! IFD entry value resolution.
//!
//! The tags this decoder extracts are all variable-length ASCII strings.
//! Their bytes live elsewhere in the TIFF region, with the entry's last
//! field giving the location.

use crate::error::ExifError;

use super::parser::{slice_at, IfdEntry};

/// Resolve an entry's ASCII string value from the TIFF region.
///
/// `value_or_offset` is treated uniformly as an offset relative to the TIFF
/// region start, and the value is the `count`-byte slice found there. The
/// TIFF specification stores values of 4 bytes or fewer inline in the entry
/// instead; that case cannot arise for the tags in scope, whose values are
/// always multi-byte strings, so this function must not be pointed at an
/// inline-sized tag without revisiting the rule.
///
/// Trailing NUL bytes are stripped (EXIF ASCII counts include the
/// terminator) and the bytes are decoded as UTF-8, replacing invalid
/// sequences.
///
/// # Errors
/// `TruncatedData` if `[offset, offset + count)` extends past the region.
pub fn read_ascii(tiff_region: &[u8], entry: &IfdEntry) -> Result<String, ExifError> {
    let bytes = slice_at(tiff_region, entry.value_or_offset as usize, entry.count as usize)?;

    let end = bytes
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);

    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tiff::tags::FieldType;

    fn ascii_entry(offset: u32, count: u32) -> IfdEntry {
        IfdEntry {
            tag: 0x010F,
            field_type: Some(FieldType::Ascii),
            field_type_raw: 2,
            count,
            value_or_offset: offset,
        }
    }

    #[test]
    fn test_read_ascii_basic() {
        let mut region = vec![0u8; 10];
        region.extend_from_slice(b"Canon");

        let value = read_ascii(&region, &ascii_entry(10, 5)).unwrap();
        assert_eq!(value, "Canon");
    }

    #[test]
    fn test_read_ascii_strips_nul_terminator() {
        let mut region = vec![0u8; 10];
        region.extend_from_slice(b"NIKON D90\0");

        let value = read_ascii(&region, &ascii_entry(10, 10)).unwrap();
        assert_eq!(value, "NIKON D90");
    }

    #[test]
    fn test_read_ascii_all_nul() {
        let region = vec![0u8; 8];
        let value = read_ascii(&region, &ascii_entry(2, 4)).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_read_ascii_empty_count() {
        let region = vec![0u8; 4];
        let value = read_ascii(&region, &ascii_entry(2, 0)).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_read_ascii_span_past_end() {
        let region = vec![0u8; 16];

        // offset + count exceeds the region by one byte
        let result = read_ascii(&region, &ascii_entry(12, 5));
        assert_eq!(
            result,
            Err(ExifError::TruncatedData {
                offset: 12,
                needed: 5,
                available: 4,
            })
        );
    }

    #[test]
    fn test_read_ascii_offset_past_end() {
        let region = vec![0u8; 4];

        let result = read_ascii(&region, &ascii_entry(100, 1));
        assert!(matches!(result, Err(ExifError::TruncatedData { .. })));
    }

    #[test]
    fn test_read_ascii_huge_count_does_not_overflow() {
        let region = vec![0u8; 4];

        // A hostile count near u32::MAX must fail cleanly, not wrap
        let result = read_ascii(&region, &ascii_entry(2, u32::MAX));
        assert!(matches!(result, Err(ExifError::TruncatedData { .. })));
    }

    #[test]
    fn test_read_ascii_invalid_utf8_is_replaced() {
        let mut region = vec![0u8; 4];
        region.extend_from_slice(&[b'S', b'O', 0xFF, b'Y']);

        let value = read_ascii(&region, &ascii_entry(4, 4)).unwrap();
        assert_eq!(value, "SO\u{FFFD}Y");
    }

    #[test]
    fn test_read_ascii_interior_nul_is_kept() {
        // Only trailing NULs are stripped; embedded ones stay visible
        let mut region = vec![0u8; 4];
        region.extend_from_slice(&[b'A', 0x00, b'B', 0x00]);

        let value = read_ascii(&region, &ascii_entry(4, 4)).unwrap();
        assert_eq!(value, "A\0B");
    }
}
