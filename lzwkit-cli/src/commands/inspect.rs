//! Inspect command implementation.

use crate::stats::{StatsObserver, StreamStats};
use lzwkit::{LzwConfig, LzwDecoder};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct InspectReport<'a> {
    file: String,
    byte_order: &'static str,
    initial_code_width: u8,
    early_limit: bool,
    tiff_mode: bool,
    #[serde(flatten)]
    stats: &'a StreamStats,
}

pub fn cmd_inspect(
    input: &Path,
    size: usize,
    json: bool,
    config: LzwConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let mut decoder = LzwDecoder::with_observer(config, StatsObserver::new())?;
    let decoded = decoder.decode(&data, size)?;
    let stats = decoder.into_observer().into_stats(decoded.len());

    if json {
        let report = InspectReport {
            file: input.display().to_string(),
            byte_order: config.byte_order.name(),
            initial_code_width: config.initial_code_width,
            early_limit: config.early_limit,
            tiff_mode: config.tiff_mode,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", data.len());
    println!(
        "Parameters: {}, {}-bit literals, early limit {}, TIFF mode {}",
        config.byte_order.name(),
        config.initial_code_width,
        config.early_limit,
        config.tiff_mode
    );

    println!();
    println!("Codes:");
    println!("  Codes read: {}", stats.codes);
    println!("  Clear codes: {}", stats.clear_codes);
    println!("  Explicit EOI: {}", if stats.saw_eoi { "yes" } else { "no" });
    println!("  Table entries: {}", stats.entries_added);
    println!("  Longest entry: {} bytes", stats.longest_entry);
    println!("  Widest code: {} bits", stats.max_code_width);

    println!();
    println!("Data:");
    println!("  Bytes read: {}", stats.bytes_read);
    println!("  Bytes produced: {}", stats.bytes_written);
    if stats.bytes_written > 0 {
        println!(
            "  Compression ratio: {:.1}%",
            (1.0 - stats.bytes_read as f64 / stats.bytes_written as f64) * 100.0
        );
    }
    Ok(())
}

