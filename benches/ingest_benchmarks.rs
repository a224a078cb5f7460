use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weather_exporter::{RawReadings, ReadingSet, WeatherMetrics};

const FULL_UPDATE: [(&str, &str); 12] = [
    ("ID", "KXYZ123"),
    ("baromin", "29.92"),
    ("tempf", "71.3"),
    ("dewptf", "55.0"),
    ("humidity", "57"),
    ("windspeedmph", "4.5"),
    ("windgustmph", "9.2"),
    ("winddir", "230"),
    ("rainin", "0.00"),
    ("dailyrainin", "0.12"),
    ("indoortempf", "69.8"),
    ("indoorhumidity", "41"),
];

/// Benchmark parsing and converting a complete upload
fn bench_reading_conversion(c: &mut Criterion) {
    c.bench_function("reading_conversion", |b| {
        b.iter(|| {
            let raw = RawReadings::from_pairs(black_box(FULL_UPDATE));
            ReadingSet::from_raw(&raw)
        })
    });
}

/// Benchmark recording a reading set under the store lock
fn bench_record(c: &mut Criterion) {
    let metrics = WeatherMetrics::new().expect("Should create metric store");
    let readings = ReadingSet::from_raw(&RawReadings::from_pairs(FULL_UPDATE));

    c.bench_function("record_update", |b| {
        b.iter(|| metrics.record(black_box("KXYZ123"), &readings))
    });
}

/// Benchmark rendering the exposition for growing station counts
fn bench_render(c: &mut Criterion) {
    let readings = ReadingSet::from_raw(&RawReadings::from_pairs(FULL_UPDATE));

    for stations in [1, 10, 100].iter() {
        let metrics = WeatherMetrics::new().expect("Should create metric store");
        for i in 0..*stations {
            metrics.record(&format!("station{}", i), &readings);
        }

        c.bench_with_input(BenchmarkId::new("render", stations), stations, |b, _| {
            b.iter(|| metrics.render().expect("Should render"))
        });
    }
}

criterion_group!(benches, bench_reading_conversion, bench_record, bench_render);
criterion_main!(benches);
