use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lz76_rs::{naive_complexity, SuffixArrayFactorizer, SuffixAutomatonFactorizer};

const MEMORY_LIMIT: usize = 1_000_000_000;

/// Generate repetitive text data
fn generate_repetitive_text(size: usize) -> Vec<u8> {
    let pattern = "the quick brown fox jumps over the lazy dog ";
    pattern.repeat(size / pattern.len()).into_bytes()
}

/// Generate source code-like data
fn generate_source_code(size: usize) -> Vec<u8> {
    let patterns = [
        "fn main() {\n",
        "    let x = 42;\n",
        "    println!(\"Hello, world!\");\n",
        "    if x > 0 {\n",
        "        return x;\n",
        "    }\n",
        "}\n",
    ];

    let mut result = String::new();
    let mut i = 0;
    while result.len() < size {
        result.push_str(patterns[i % patterns.len()]);
        i += 1;
    }
    result.truncate(size);
    result.into_bytes()
}

/// Generate low-repetition data (simulating base64)
fn generate_low_repetition(size: usize) -> Vec<u8> {
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut seed = 12345u64;

    (0..size)
        .map(|_| {
            // Simple LCG random
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            chars[(seed % chars.len() as u64) as usize]
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion, group_name: &str, sizes: &[usize], generate: fn(usize) -> Vec<u8>) {
    let mut group = c.benchmark_group(group_name);

    for size in sizes.iter() {
        let data = generate(*size);

        group.bench_with_input(BenchmarkId::new("Naive", size), &data, |b, data| {
            b.iter(|| black_box(naive_complexity(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("SuffixArray", size), &data, |b, data| {
            b.iter(|| black_box(SuffixArrayFactorizer::new(black_box(data)).count()));
        });

        group.bench_with_input(BenchmarkId::new("SuffixAutomaton", size), &data, |b, data| {
            b.iter(|| {
                let factorizer = SuffixAutomatonFactorizer::new(black_box(data), MEMORY_LIMIT)
                    .expect("benchmark input fits the memory limit");
                black_box(factorizer.count())
            });
        });
    }

    group.finish();
}

fn bench_repetitive(c: &mut Criterion) {
    bench_strategies(c, "repetitive_text", &[1_000, 10_000, 100_000], generate_repetitive_text);
}

fn bench_source_code(c: &mut Criterion) {
    bench_strategies(c, "source_code", &[1_000, 10_000, 50_000], generate_source_code);
}

fn bench_low_repetition(c: &mut Criterion) {
    bench_strategies(c, "low_repetition", &[1_000, 10_000, 50_000], generate_low_repetition);
}

criterion_group!(benches, bench_repetitive, bench_source_code, bench_low_repetition);
criterion_main!(benches);
