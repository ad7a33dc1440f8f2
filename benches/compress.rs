use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// A smooth gradient with some high frequency noise on top, so both
// degenerate and regular blocks show up.
fn test_image(width: usize, height: usize) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let noise = ((x * 7919 + y * 104729) % 17) as u8;
            rgba.extend_from_slice(&[
                (x * 255 / width) as u8 ^ noise,
                (y * 255 / height) as u8,
                ((x + y) * 127 / (width + height)) as u8 | noise,
                0xFF,
            ]);
        }
    }
    rgba
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for size in [64usize, 256, 512] {
        let rgba = test_image(size, size);
        group.throughput(Throughput::Bytes(rgba.len() as u64));
        group.bench_with_input(BenchmarkId::new("sequential", size), &rgba, |b, rgba| {
            b.iter(|| fastdxt::compress(size, size, black_box(rgba)).unwrap())
        });
        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &rgba, |b, rgba| {
            b.iter(|| fastdxt::par_compress(size, size, black_box(rgba)).unwrap())
        });
    }
    group.finish();
}

fn bench_transparent(c: &mut Criterion) {
    c.bench_function("transparent_image 512", |b| {
        b.iter(|| fastdxt::transparent_image(black_box(512), black_box(512)))
    });
}

criterion_group!(benches, bench_compress, bench_transparent);
criterion_main!(benches);
