//! End-to-end demo: load an image, dither it sequentially and with the
//! wavefront kernel at increasing worker counts, verify the outputs
//! match and report the speedup.
//!
//! ```sh
//! cargo run --release --example dither_image -- input.png [output-base]
//! ```

use std::time::Instant;

use image::GrayImage;
use wavedither::{WavefrontConfig, sequential_dither, wavefront_dither};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .expect("usage: dither_image <input-image> [output-base]");
    let base = args.next().unwrap_or_else(|| "dithered".to_string());

    let gray = image::open(&input)
        .expect("failed to open input image")
        .to_luma8();
    let (width, height) = gray.dimensions();
    let (width, height) = (width as usize, height as usize);
    let pixels = gray.into_raw();
    println!("Image size: {width} x {height} pixels");

    let start = Instant::now();
    let reference = sequential_dither(&pixels, width, height).unwrap();
    let sequential_time = start.elapsed();
    println!("Sequential: {:.2} ms", sequential_time.as_secs_f64() * 1e3);

    save(&reference, width, height, &format!("{base}_sequential.png"));

    println!("{:<8} | {:<12} | {:<8}", "Workers", "Time (ms)", "Speedup");
    let max_workers = num_cpus::get();
    let mut best: Option<Vec<u8>> = None;
    for threads in 1..=max_workers {
        let config = WavefrontConfig::new(threads, wavedither::DEFAULT_CHUNK);

        let start = Instant::now();
        let parallel = wavefront_dither(&pixels, width, height, &config).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(parallel, reference, "kernels diverged at {threads} workers");
        println!(
            "{:<8} | {:<12.2} | {:<8.2}x",
            threads,
            elapsed.as_secs_f64() * 1e3,
            sequential_time.as_secs_f64() / elapsed.as_secs_f64()
        );
        best = Some(parallel);
    }

    if let Some(parallel) = best {
        save(&parallel, width, height, &format!("{base}_wavefront.png"));
    }
    println!("Outputs saved with basename: {base}");
}

fn save(pixels: &[u8], width: usize, height: usize, path: &str) {
    GrayImage::from_raw(width as u32, height as u32, pixels.to_vec())
        .expect("output grid has the wrong size")
        .save(path)
        .expect("failed to save output image");
}
