use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qrframe::{generate, ECLevel, QRBuilder};

fn bench_generate_url(c: &mut Criterion) {
    c.bench_function("generate_example_com_l", |b| {
        b.iter(|| generate(black_box("https://example.com"), black_box("L")))
    });
}

fn bench_generate_version_10(c: &mut Criterion) {
    let data = vec![0xA5u8; 200];
    c.bench_function("generate_200_bytes_h", |b| {
        b.iter(|| QRBuilder::new(black_box(data.as_slice())).ec_level(ECLevel::H).build_frame())
    });
}

fn bench_generate_version_40(c: &mut Criterion) {
    let data = vec![b'x'; 2953];
    c.bench_function("generate_2953_bytes_l", |b| {
        b.iter(|| QRBuilder::new(black_box(data.as_slice())).ec_level(ECLevel::L).build_frame())
    });
}

fn bench_render_text(c: &mut Criterion) {
    let frame = generate("https://example.com", "L").unwrap();
    c.bench_function("render_text_example_com", |b| {
        b.iter(|| black_box(&frame).to_text("#", " ", 0))
    });
}

criterion_group!(
    benches,
    bench_generate_url,
    bench_generate_version_10,
    bench_generate_version_40,
    bench_render_text
);
criterion_main!(benches);
