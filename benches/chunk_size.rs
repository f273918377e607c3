//! Sweep of the chunk width, the central tuning knob of the wavefront
//! kernel: wide chunks amortize synchronization, narrow chunks reduce
//! wavefront lag. The optimum is hardware-dependent.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use wavedither::{WavefrontConfig, wavefront_dither};

fn bench_chunk_sweep(c: &mut Criterion) {
    let size = 1024usize;
    let mut rng = StdRng::seed_from_u64(42);
    let mut pixels = vec![0u8; size * size];
    rng.fill_bytes(&mut pixels);

    let threads = num_cpus::get().min(8);
    let mut group = c.benchmark_group(format!("chunk_sweep_{threads}t"));
    group.sample_size(20);

    for chunk in [16usize, 32, 64, 128, 256, 512] {
        let config = WavefrontConfig::new(threads, chunk);
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk),
            &chunk,
            |b, _| {
                b.iter(|| {
                    wavefront_dither(black_box(&pixels), size, size, &config)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_chunk_sweep);
criterion_main!(benches);
