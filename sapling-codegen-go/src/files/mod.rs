//! Files written by the Go generator.

pub use sapling_core::GENERATED_HEADER;

mod go_file;

pub use go_file::GoFile;
