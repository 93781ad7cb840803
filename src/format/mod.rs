//! Binary format handling: JPEG segment scanning and EXIF/TIFF parsing.
//!
//! Everything in this module is a pure function over borrowed byte slices:
//! no I/O, no shared state, and every read bounds-checked before access.

pub mod jpeg;
pub mod tiff;
