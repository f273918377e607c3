use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use wavedither::{WavefrontConfig, sequential_dither, wavefront_dither};

fn random_image(width: usize, height: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pixels = vec![0u8; width * height];
    rng.fill_bytes(&mut pixels);
    pixels
}

fn worker_counts() -> Vec<usize> {
    let mut counts = vec![2, 4];
    let hardware = num_cpus::get();
    if !counts.contains(&hardware) {
        counts.push(hardware);
    }
    counts
}

fn bench_sequential_vs_wavefront(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_vs_wavefront");
    group.sample_size(20);

    for size in [512usize, 1024, 2048] {
        let pixels = random_image(size, size);

        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    sequential_dither(black_box(&pixels), size, size).unwrap()
                })
            },
        );

        for threads in worker_counts() {
            let config = WavefrontConfig::new(threads, 128);
            group.bench_with_input(
                BenchmarkId::new(format!("wavefront_{threads}t"), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        wavefront_dither(black_box(&pixels), size, size, &config)
                            .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_vs_wavefront);
criterion_main!(benches);
