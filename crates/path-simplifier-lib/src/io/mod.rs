//! CSV input and output for paths
//!
//! Input files need a header row with a latitude column (any header containing
//! `lat`) and a longitude column (any header containing `lon` or `lng`). Output
//! files always use the two columns `lat,lng`.

mod reader;
mod writer;

pub use reader::{read_path, read_path_from_reader};
pub use writer::{write_path, write_path_to_writer};
