//! Benchmark suite for the template render path.
//!
//! Isolates rendering from parsing and storage so the substitution loop can
//! be measured on its own.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sensor_template::{Measurement, TemplateConfig};

fn record(index: usize) -> Measurement {
    Measurement {
        parameter: format!("Parameter{index}"),
        unit: "C".to_string(),
        value: format!("{}.5", index),
    }
}

fn records(count: usize) -> Vec<Measurement> {
    (0..count).map(record).collect()
}

/// Benchmark the factory template against growing record batches
fn bench_render_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_batch_size");
    let config = TemplateConfig::default();

    for count in [1usize, 10, 100] {
        let batch = records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_records"), |b| {
            b.iter(|| {
                let output = config.render(black_box(&batch));
                black_box(output)
            })
        });
    }

    group.finish();
}

/// Benchmark token density: bodies with none, some, and repeated tokens
fn bench_render_token_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_token_density");
    let batch = records(10);

    let plain = TemplateConfig {
        start: String::new(),
        end: String::new(),
        body: "no tokens here%N%".to_string(),
    };
    group.bench_function("no_tokens", |b| {
        b.iter(|| black_box(plain.render(black_box(&batch))))
    });

    let dense = TemplateConfig {
        start: "%N%".to_string(),
        end: "%N%".to_string(),
        body: "%PARAMETER% %PARAMETER% %UNIT% %UNIT% %VALUE% %VALUE%%N%".to_string(),
    };
    group.bench_function("repeated_tokens", |b| {
        b.iter(|| black_box(dense.render(black_box(&batch))))
    });

    group.finish();
}

criterion_group!(benches, bench_render_batch_sizes, bench_render_token_density);
criterion_main!(benches);
