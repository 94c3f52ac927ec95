use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use woundscan::{classify, ph_to_level, sample_image, RgbSample, SamplerConfig};

fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode benchmark fixture");
    bytes
}

fn benchmark_classification(c: &mut Criterion) {
    c.bench_function("classify_rgb_grid", |b| {
        b.iter(|| {
            for r in (0..=255u8).step_by(15) {
                for g in (0..=255u8).step_by(15) {
                    for bl in (0..=255u8).step_by(15) {
                        black_box(classify(RgbSample::new(r, g, bl)));
                    }
                }
            }
        })
    });

    c.bench_function("ph_to_level", |b| {
        b.iter(|| black_box(ph_to_level(black_box(7.65))))
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    let config = SamplerConfig::default();
    let small = solid_png(100, 100, [33, 150, 243]);
    let large = solid_png(1920, 1080, [33, 150, 243]);

    c.bench_function("sample_image_100x100", |b| {
        b.iter(|| sample_image(black_box(&small), &config))
    });

    c.bench_function("sample_image_1920x1080", |b| {
        b.iter(|| sample_image(black_box(&large), &config))
    });
}

criterion_group!(benches, benchmark_classification, benchmark_sampling);
criterion_main!(benches);
