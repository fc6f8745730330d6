use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{imageops, RgbImage};

use box_resample::{aligned_stride, ImageRef, PixelType, Resampler, ScaleFactor};

const SRC_WIDTH: u32 = 2048;
const SRC_HEIGHT: u32 = 1536;
const RATIOS: [u32; 4] = [1, 2, 4, 8];

fn source_image() -> RgbImage {
    RgbImage::from_fn(SRC_WIDTH, SRC_HEIGHT, |x, y| {
        image::Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8])
    })
}

fn bench_variants(c: &mut Criterion) {
    let src = source_image();
    let src_image = ImageRef::from_rgb_image(&src).unwrap();
    let mut resampler = Resampler::new();

    let mut group = c.benchmark_group("Box filter RGB");
    group.sample_size(20);
    for ratio in RATIOS {
        let (dst_width, dst_height) = (SRC_WIDTH / ratio, SRC_HEIGHT / ratio);
        let rgb_stride = aligned_stride(dst_width, PixelType::U8x3);
        let rgb565_stride = aligned_stride(dst_width, PixelType::Rgb565);
        let scale = ScaleFactor::square(ratio).unwrap();

        group.bench_with_input(BenchmarkId::new("var", ratio), &ratio, |b, _| {
            b.iter(|| {
                let res = resampler
                    .resample_integer_rgb(&src_image, dst_width, dst_height, rgb_stride)
                    .unwrap();
                black_box(res);
            })
        });
        group.bench_with_input(BenchmarkId::new("const", ratio), &ratio, |b, _| {
            b.iter(|| {
                let res = resampler
                    .resample_fast_rgb(&src_image, scale, rgb_stride)
                    .unwrap();
                black_box(res);
            })
        });
        group.bench_with_input(BenchmarkId::new("var 565", ratio), &ratio, |b, _| {
            b.iter(|| {
                let res = resampler
                    .resample_integer_rgb565(&src_image, dst_width, dst_height, rgb565_stride)
                    .unwrap();
                black_box(res);
            })
        });
        // Area-averaging downscale of "image" crate, for reference
        group.bench_with_input(BenchmarkId::new("image thumbnail", ratio), &ratio, |b, _| {
            b.iter(|| {
                black_box(imageops::thumbnail(&src, dst_width, dst_height));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
