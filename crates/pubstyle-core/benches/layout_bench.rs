use pubstyle_core::{CmsLabel, Decorations, Margins, Position, RecordingSurface};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_layout");
    let margins = Margins::default();
    for position in Position::ALL {
        let label = CmsLabel::new().with_position(position).with_sublabel_text("Preliminary");
        group.bench_function(format!("cms_{position}"), |b| {
            b.iter(|| black_box(label.layout(black_box(&margins))));
        });
    }
    group.bench_function("decorations_recording", |b| {
        let decorations = Decorations::new("35.9 fb^{-1} (13 TeV)", Position::Outside, "Simulation");
        let mut surface = RecordingSurface::new(margins);
        b.iter(|| {
            surface.calls.clear();
            black_box(decorations.draw(&mut surface));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
