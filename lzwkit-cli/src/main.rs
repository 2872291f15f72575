//! lzw - compress, decompress and inspect raw LZW streams
//!
//! Streams are headerless: the decoder needs the same stream parameters the
//! encoder used and the expected output size.

mod commands;
mod logging;
mod stats;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_inspect};
use lzwkit::{ByteOrder, LzwConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lzw")]
#[command(author, version, about = "Variable-width LZW codec for TIFF and GIF streams")]
#[command(long_about = "
Reads and writes raw LZW code streams as found in TIFF strips and GIF image
data blocks (after the sub-block framing is removed).

Examples:
  lzw compress strip.raw -o strip.lzw
  lzw compress pixels.raw --style gif -o pixels.lzw
  lzw decompress strip.lzw --size 65536 -o strip.raw
  lzw inspect pixels.lzw --style gif --size 4096 --json
")]
struct Cli {
    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into an LZW stream
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to <input>.lzw)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        stream: StreamArgs,
    },

    /// Decompress an LZW stream
    #[command(alias = "d")]
    Decompress {
        /// LZW stream to decompress
        input: PathBuf,

        /// Expected size of the decompressed data in bytes
        #[arg(short, long)]
        size: usize,

        /// Output file (defaults to <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        stream: StreamArgs,
    },

    /// Decode a stream and report code statistics
    #[command(alias = "i")]
    Inspect {
        /// LZW stream to inspect
        input: PathBuf,

        /// Expected size of the decompressed data in bytes
        #[arg(short, long)]
        size: usize,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        #[command(flatten)]
        stream: StreamArgs,
    },
}

/// Stream parameters shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct StreamArgs {
    /// Preset to start from
    #[arg(long, value_enum, default_value = "tiff")]
    style: Style,

    /// Bit packing order (overrides the preset)
    #[arg(long, value_enum)]
    order: Option<Order>,

    /// Literal width in bits; codes start one bit wider
    #[arg(long)]
    min_code_size: Option<u8>,

    /// Grow the code width one code early (TIFF encoders)
    #[arg(long)]
    early_limit: Option<bool>,

    /// Treat a stream that runs out of bytes as ending in EOI
    #[arg(long)]
    tiff_mode: Option<bool>,
}

impl StreamArgs {
    fn config(&self) -> Result<LzwConfig, Box<dyn std::error::Error>> {
        let mut config = match self.style {
            Style::Tiff => LzwConfig::TIFF,
            Style::Gif => LzwConfig::GIF,
        };
        if let Some(order) = self.order {
            config = config.with_byte_order(order.into());
        }
        if let Some(width) = self.min_code_size {
            config.initial_code_width = width;
        }
        if let Some(early) = self.early_limit {
            config = config.with_early_limit(early);
        }
        if let Some(tiff) = self.tiff_mode {
            config = config.with_tiff_mode(tiff);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Stream preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// MSB-first, early change, EOI optional
    Tiff,
    /// LSB-first, standard change
    Gif,
}

/// Bit packing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    /// Most significant bit first
    Msb,
    /// Least significant bit first
    Lsb,
}

impl From<Order> for ByteOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Msb => ByteOrder::MsbFirst,
            Order::Lsb => ByteOrder::LsbFirst,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            stream,
        } => stream
            .config()
            .and_then(|config| cmd_compress(&input, output.as_deref(), config)),
        Commands::Decompress {
            input,
            size,
            output,
            stream,
        } => stream
            .config()
            .and_then(|config| cmd_decompress(&input, size, output.as_deref(), config)),
        Commands::Inspect {
            input,
            size,
            json,
            stream,
        } => stream
            .config()
            .and_then(|config| cmd_inspect(&input, size, json, config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
