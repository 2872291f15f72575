//! Compress command implementation.

use super::default_output;
use log::debug;
use lzwkit::{LzwConfig, LzwEncoder};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    config: LzwConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, "lzw"));

    debug!("compressing {} with {:?}", input.display(), config);
    let mut writer = BufWriter::new(File::create(&output)?);
    let mut encoder = LzwEncoder::new(config)?;
    let written = encoder.encode_to(&data, &mut writer)?;
    writer.flush()?;

    println!(
        "{} -> {}: {} -> {} bytes",
        input.display(),
        output.display(),
        data.len(),
        written
    );
    Ok(())
}
