//! Camera metadata extraction pipeline.
//!
//! Wires the decode stages together: segment locator → EXIF header reader →
//! IFD walker → tag dispatch. Each stage is a pure function of its input
//! slice; this module owns the re-slicing between them and the diagnostic
//! logging, nothing else.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ExifError;
use crate::format::jpeg;
use crate::format::tiff::{
    read_ascii, ExifHeader, ExifTag, FieldType, Ifd, IfdEntry, EXIF_HEADER_SIZE, TIFF_REGION_START,
};

// =============================================================================
// Output Types
// =============================================================================

/// One decoded IFD entry, kept for diagnostic visibility.
///
/// Every entry in the directory appears here, recognized or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawEntry {
    /// Tag identifier
    pub tag: u16,

    /// Raw field type value
    pub field_type: u16,

    /// Number of values of the declared type
    pub count: u32,

    /// Value offset, relative to the TIFF region start
    pub value_or_offset: u32,
}

impl From<&IfdEntry> for RawEntry {
    fn from(entry: &IfdEntry) -> Self {
        RawEntry {
            tag: entry.tag,
            field_type: entry.field_type_raw,
            count: entry.count,
            value_or_offset: entry.value_or_offset,
        }
    }
}

/// Camera metadata decoded from a JPEG's EXIF segment.
///
/// Each field is optional: a tag absent from the IFD yields no entry, not an
/// error. `entries` always carries the full decoded directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CameraMetadata {
    /// Camera manufacturer (tag 0x010F)
    pub manufacturer: Option<String>,

    /// Camera model (tag 0x0110)
    pub camera_model: Option<String>,

    /// Capture timestamp (tag 0x9003)
    pub date_taken: Option<String>,

    /// All decoded IFD entries, in directory order
    pub entries: Vec<RawEntry>,
}

impl CameraMetadata {
    /// True when none of the recognized fields were present.
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_none() && self.camera_model.is_none() && self.date_taken.is_none()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Decode camera metadata from a complete JPEG byte buffer.
///
/// A pure function of the buffer: decoding the same bytes twice yields
/// identical results, and the buffer is only borrowed for the duration of
/// the call.
///
/// # Errors
/// Any variant of [`ExifError`]; in particular `SegmentNotFound` when the
/// JPEG is valid but carries no APP1 segment. The caller decides whether
/// that is fatal or merely "no metadata". Every failure is terminal: no
/// partially decoded result is returned.
pub fn read_metadata(data: &[u8]) -> Result<CameraMetadata, ExifError> {
    let payload_offset = jpeg::find_exif_payload(data)?.ok_or(ExifError::SegmentNotFound)?;

    let payload = data
        .get(payload_offset..)
        .ok_or(ExifError::TruncatedData {
            offset: payload_offset,
            needed: EXIF_HEADER_SIZE,
            available: 0,
        })?;

    let header = ExifHeader::parse(payload)?;
    debug!(
        byte_order = ?header.byte_order,
        ifd_offset = header.first_ifd_offset,
        "parsed EXIF header"
    );

    // ExifHeader::parse guarantees the payload covers the full header, so
    // the TIFF region start is in bounds.
    let tiff_region = &payload[TIFF_REGION_START..];
    let ifd = Ifd::parse(
        tiff_region,
        header.first_ifd_offset as usize,
        header.byte_order,
    )?;

    let mut metadata = CameraMetadata::default();
    for entry in &ifd.entries {
        debug!(
            tag = format_args!("0x{:04X}", entry.tag),
            field_type = entry.field_type_raw,
            count = entry.count,
            value_or_offset = entry.value_or_offset,
            value_bytes = entry
                .field_type
                .map(|ft| ft.size_in_bytes() as u64 * entry.count as u64),
            "decoded IFD entry"
        );
        metadata.entries.push(RawEntry::from(entry));

        let Some(tag) = ExifTag::from_u16(entry.tag) else {
            continue;
        };

        if entry.field_type != Some(FieldType::Ascii) {
            warn!(
                tag = tag.name(),
                field_type = entry.field_type_raw,
                "recognized tag does not declare an ASCII value, skipping"
            );
            continue;
        }

        let value = read_ascii(tiff_region, entry)?;
        match tag {
            ExifTag::Make => metadata.manufacturer = Some(value),
            ExifTag::Model => metadata.camera_model = Some(value),
            ExifTag::DateTimeOriginal => metadata.date_taken = Some(value),
        }
    }

    Ok(metadata)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal JPEG wrapper: SOI + APP1 + length + payload.
    fn wrap_in_jpeg(payload: &[u8]) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1];
        data.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
        data.extend_from_slice(payload);
        data
    }

    /// EXIF payload with one little-endian Make entry for "Canon".
    fn canon_payload() -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(b"Exif\0\0");
        payload.extend_from_slice(b"II");
        payload.extend_from_slice(&[0x2A, 0x00]); // TIFF magic
        payload.extend_from_slice(&8u32.to_le_bytes()); // IFD at region offset 8
        payload.extend_from_slice(&1u16.to_le_bytes()); // Entry count
        payload.extend_from_slice(&0x010Fu16.to_le_bytes()); // Make
        payload.extend_from_slice(&2u16.to_le_bytes()); // ASCII
        payload.extend_from_slice(&5u32.to_le_bytes()); // Count = 5
        payload.extend_from_slice(&22u32.to_le_bytes()); // Value at region offset 22
        payload.extend_from_slice(b"Canon");
        payload
    }

    #[test]
    fn test_read_metadata_manufacturer() {
        let data = wrap_in_jpeg(&canon_payload());

        let metadata = read_metadata(&data).unwrap();
        assert_eq!(metadata.manufacturer.as_deref(), Some("Canon"));
        assert_eq!(metadata.camera_model, None);
        assert_eq!(metadata.date_taken, None);
        assert_eq!(metadata.entries.len(), 1);
    }

    #[test]
    fn test_read_metadata_is_idempotent() {
        let data = wrap_in_jpeg(&canon_payload());

        let first = read_metadata(&data).unwrap();
        let second = read_metadata(&data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_metadata_no_segment() {
        let data = [0xFF, 0xD8, 0xFF, 0xD9];
        assert_eq!(read_metadata(&data), Err(ExifError::SegmentNotFound));
    }

    #[test]
    fn test_read_metadata_not_a_jpeg() {
        let data = b"GIF89a";
        assert_eq!(read_metadata(data), Err(ExifError::InvalidContainer));
    }

    #[test]
    fn test_read_metadata_marker_at_buffer_end() {
        // APP1 marker with nothing after it: the payload offset lands past
        // the end of the buffer and must surface as TruncatedData
        let data = [0xFF, 0xD8, 0xFF, 0xE1];
        assert!(matches!(
            read_metadata(&data),
            Err(ExifError::TruncatedData { .. })
        ));
    }

    #[test]
    fn test_read_metadata_non_ascii_recognized_tag_is_skipped() {
        let mut payload = canon_payload();
        // Rewrite the entry's field type from ASCII (2) to SHORT (3); the
        // type field sits 2 bytes into the entry record at payload offset 16.
        payload[18] = 3;

        let data = wrap_in_jpeg(&payload);
        let metadata = read_metadata(&data).unwrap();
        assert_eq!(metadata.manufacturer, None);
        assert_eq!(metadata.entries.len(), 1);
        assert_eq!(metadata.entries[0].field_type, 3);
    }

    #[test]
    fn test_is_empty() {
        let mut metadata = CameraMetadata::default();
        assert!(metadata.is_empty());

        metadata.camera_model = Some("D90".to_string());
        assert!(!metadata.is_empty());
    }
}
