//! Throughput benchmarks for lzwkit
//!
//! - Compression/decompression speed for GIF and TIFF configurations
//! - Several data patterns, from uniform to pseudo-random
//! - Comparison against the weezl crate on the same inputs

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzwkit::{LzwConfig, LzwDecoder, LzwEncoder};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// LCG output, no patterns (forces frequent table resets)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Grayscale gradient, like an image tile
    pub fn image_like(size: usize) -> Vec<u8> {
        let side = (size as f64).sqrt() as usize;
        let mut data: Vec<u8> = (0..side * side)
            .map(|i| {
                let (x, y) = (i % side, i / side);
                (((x * 255 / side) + (y * 255 / side)) / 2) as u8
            })
            .collect();
        data.resize(size, 128);
        data
    }
}

const SIZE: usize = 256 * 256;

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("image", test_data::image_like as PatternGenerator),
];

const CONFIGS: [(&str, LzwConfig); 2] = [("gif", LzwConfig::GIF), ("tiff", LzwConfig::TIFF)];

fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (config_name, config) in CONFIGS {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(SIZE);
            let mut encoder = LzwEncoder::new(config).unwrap();

            group.throughput(Throughput::Bytes(SIZE as u64));
            group.bench_with_input(
                BenchmarkId::new(config_name, pattern_name),
                &data,
                |b, data| {
                    b.iter(|| black_box(encoder.encode(black_box(data)).unwrap()));
                },
            );
        }
    }

    group.finish();
}

fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (config_name, config) in CONFIGS {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(SIZE);
            let compressed = LzwEncoder::new(config).unwrap().encode(&data).unwrap();
            let mut decoder = LzwDecoder::new(config).unwrap();

            group.throughput(Throughput::Bytes(SIZE as u64));
            group.bench_with_input(
                BenchmarkId::new(config_name, pattern_name),
                &compressed,
                |b, compressed| {
                    b.iter(|| black_box(decoder.decode(black_box(compressed), SIZE).unwrap()));
                },
            );
        }
    }

    group.finish();
}

/// Compare with weezl on GIF-style streams
fn bench_compare_weezl(c: &mut Criterion) {
    use weezl::BitOrder;
    use weezl::decode::Decoder as WeezlDecoder;
    use weezl::encode::Encoder as WeezlEncoder;

    let mut group = c.benchmark_group("compare_weezl");

    for (pattern_name, generator) in PATTERNS {
        let data = generator(SIZE);
        group.throughput(Throughput::Bytes(SIZE as u64));

        group.bench_with_input(
            BenchmarkId::new("lzwkit_compress", pattern_name),
            &data,
            |b, data| {
                b.iter(|| black_box(lzwkit::compress_gif(black_box(data)).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("weezl_compress", pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut encoder = WeezlEncoder::new(BitOrder::Lsb, 8);
                    black_box(encoder.encode(black_box(data)).ok())
                });
            },
        );

        let compressed = lzwkit::compress_gif(&data).unwrap();
        group.bench_with_input(
            BenchmarkId::new("lzwkit_decompress", pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| black_box(lzwkit::decompress_gif(black_box(compressed), SIZE).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("weezl_decompress", pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let mut decoder = WeezlDecoder::new(BitOrder::Lsb, 8);
                    black_box(decoder.decode(black_box(compressed)).ok())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_compare_weezl,
);
criterion_main!(benches);
