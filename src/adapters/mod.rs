// Adapters layer: concrete registration sources.

pub mod manifest_file;
pub mod memory;
