use criterion::{criterion_group, criterion_main, Criterion};
use gazetteer_core::loader::lines::{Delimiter, RowReader};
use gazetteer_core::loader::{cities::parse_city, AdmissionFilter};
use gazetteer_core::score::score;
use gazetteer_core::{DataConfig, KnowledgeBase, ReferenceLocation};
use std::hint::black_box;
use std::io::Cursor;
use std::path::PathBuf;

const HOME: ReferenceLocation = ReferenceLocation::new(47.37, 8.54);

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn bench_score(c: &mut Criterion) {
    c.bench_function("score", |b| {
        b.iter(|| score(black_box(35.6895), black_box(139.69171), black_box(8_336_599), &HOME))
    });
}

fn bench_filter_rows(c: &mut Criterion) {
    let text = std::fs::read(fixture_dir().join("cities.txt")).expect("fixture");
    let filter = AdmissionFilter::new(HOME);
    c.bench_function("parse_and_admit_fixture", |b| {
        b.iter(|| {
            RowReader::new(Cursor::new(text.as_slice()), Delimiter::TAB)
                .filter_map(|row| parse_city(&row.ok()?).ok())
                .filter(|city| filter.check(city).is_admitted())
                .count()
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let data = DataConfig {
        dir: fixture_dir(),
        cities: "cities.txt".into(),
        ..DataConfig::default()
    };
    c.bench_function("load_fixture", |b| {
        b.iter(|| KnowledgeBase::load(&data, HOME).expect("fixture loads"))
    });
}

criterion_group!(benches, bench_score, bench_filter_rows, bench_load);
criterion_main!(benches);
