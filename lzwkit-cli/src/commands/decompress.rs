//! Decompress command implementation.

use super::default_output;
use lzwkit::{LzwConfig, LzwDecoder};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    size: usize,
    output: Option<&Path>,
    config: LzwConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, "out"));

    let reader = BufReader::new(File::open(input)?);
    let mut decoder = LzwDecoder::new(config)?;
    let data = decoder.decode_from(reader, size)?;
    fs::write(&output, &data)?;

    if data.len() < size {
        eprintln!(
            "Warning: stream ended after {} of {} expected bytes",
            data.len(),
            size
        );
    }
    println!(
        "{} -> {}: {} bytes",
        input.display(),
        output.display(),
        data.len()
    );
    Ok(())
}
