mod file_source;

pub use file_source::{load_file, read_u16_be, read_u16_le, read_u32_be, read_u32_le};
