use bitmapper_core::{LumaGrid, PackingConfig, Remainder, pack};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn pack_display(c: &mut Criterion) {
    // Typical 128x64 OLED frame with a diagonal gradient
    let grid = LumaGrid::from_fn(128, 64, |x, y| ((x + y) % 64) as f32 / 63.0);

    let mut group = c.benchmark_group("pack");
    for bits in [1u8, 4, 8, 16] {
        let config = PackingConfig::unchecked(bits);
        group.bench_function(format!("{bits}_bits"), |b| {
            b.iter(|| pack(black_box(&grid), black_box(&config)))
        });
    }
    let flush = PackingConfig::unchecked(7).with_remainder(Remainder::Flush);
    group.bench_function("7_bits_flush", |b| {
        b.iter(|| pack(black_box(&grid), black_box(&flush)))
    });
    group.finish();
}

criterion_group!(benches, pack_display);
criterion_main!(benches);
