//! Command implementations for the lzw CLI.

pub mod compress;
pub mod decompress;
pub mod inspect;

pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use inspect::cmd_inspect;

use std::path::{Path, PathBuf};

/// `<input>.<extension>` next to the input file.
fn default_output(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
