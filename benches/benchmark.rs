use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use qsprintf::{Arg, OutputFormat, vformat};

fn vformat_benchmark(c: &mut Criterion) {
    let args = black_box([Arg::from(42), Arg::from(42), Arg::from(42)]);
    c.bench_function("vformat widths & zero-fill", |b| {
        b.iter(|| {
            let line = vformat("%5d|%-5d|%05d", &args).unwrap();
            black_box(line);
        })
    });

    let parsed = OutputFormat::new("%5d|%-5d|%05d");
    c.bench_function("render pre-parsed format", |b| {
        b.iter(|| {
            let mut dest = String::new();
            parsed.render_into(&mut dest, &args).unwrap();
            black_box(dest);
        })
    });
}

criterion_group!(benches, vformat_benchmark);
criterion_main!(benches);
