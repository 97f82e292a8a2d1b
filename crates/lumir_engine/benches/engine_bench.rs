use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lumir_base::CalendarDate;
use lumir_engine::{compute, compute_at};

fn report_bench(c: &mut Criterion) {
    let reference = CalendarDate {
        year: 2025,
        month: 8,
        day: 15,
    };

    let mut group = c.benchmark_group("report");
    group.bench_function("compute_at", |b| {
        b.iter(|| {
            compute_at(
                black_box("03/01/2003"),
                black_box("Nguyễn Hữu Thành Trung"),
                reference,
            )
        })
    });
    group.bench_function("compute_today", |b| {
        b.iter(|| compute(black_box("29/11/1988"), black_box("Trần Thị Mỹ Duyên"), None))
    });
    group.finish();
}

criterion_group!(benches, report_bench);
criterion_main!(benches);
