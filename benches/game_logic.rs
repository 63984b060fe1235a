use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_bricks::core::{MainField, Scene};
use tui_bricks::types::{FieldSetting, Side, SquareKind};

fn full_field(dim: usize) -> MainField {
    let mut field = MainField::new(dim);
    for col in 0..dim {
        for _ in 0..dim {
            field.place(Side::Top, col, SquareKind::Red).unwrap();
        }
    }
    field
}

fn bench_find_combinations(c: &mut Criterion) {
    let field = full_field(10);
    c.bench_function("find_combinations_full_10x10", |b| {
        b.iter(|| black_box(&field).find_combinations())
    });
}

fn bench_throw_and_undo(c: &mut Criterion) {
    let mut scene = Scene::new(FieldSetting::default()).unwrap();
    c.bench_function("throw_and_undo", |b| {
        b.iter(|| {
            scene.throw_square(black_box(Side::Top), 3).unwrap();
            scene.back_to_previous_state();
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut scene = Scene::new(FieldSetting::default()).unwrap();
    c.bench_function("restart", |b| {
        b.iter(|| {
            scene.restart();
        })
    });
}

criterion_group!(
    benches,
    bench_find_combinations,
    bench_throw_and_undo,
    bench_restart
);
criterion_main!(benches);
