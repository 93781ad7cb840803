use thiserror::Error;

/// Errors that can occur while decoding EXIF metadata from a JPEG buffer.
///
/// Every variant is terminal for a single decode attempt: the input is static
/// bytes, so retrying cannot change the outcome. File I/O failures are not
/// part of this taxonomy; they surface as `std::io::Error` at the boundary
/// that reads the file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExifError {
    /// Buffer does not start with the JPEG start-of-image marker (FF D8)
    #[error("not a JPEG file: missing start-of-image marker")]
    InvalidContainer,

    /// No APP1 (EXIF) segment is present in the JPEG stream
    #[error("no APP1 segment found: file carries no EXIF metadata")]
    SegmentNotFound,

    /// APP1 payload does not begin with the "Exif\0\0" signature
    #[error("malformed EXIF header: signature mismatch")]
    MalformedHeader,

    /// TIFF byte-order magic is neither "II" nor "MM"
    #[error("unknown TIFF byte order: expected II or MM, got {0:02X} {1:02X}")]
    UnknownByteOrder(u8, u8),

    /// A read or slice would exceed the buffer bounds
    #[error("truncated data: need {needed} bytes at offset {offset}, only {available} available")]
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },
}
