//! Pipeline benchmarks: a year of daily observations through the hot
//! paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swaps_core::table::{Table, Value};
use swaps_core::types::{Date, SwapTypeChoice, Tenor};
use swaps_engine::queries::{rate_levels, rate_volume, RateLevelsParams, RateVolumeParams};
use swaps_engine::stages::reshape;
use swaps_store::{columns, sheets, MemoryStore};

fn year_of_rates() -> Table {
    let mut table = Table::new([
        columns::CURVE_DATE,
        columns::SWAP_TYPE,
        columns::METRIC,
        columns::RATE,
    ]);
    let start = Date::parse("2024-04-15").unwrap().into_inner();
    for day in 0..250 {
        let d = Date::from(start + chrono::Days::new(day));
        for (ty, metric) in [
            ("OIS", "2s10s"),
            ("OIS", "10"),
            ("Libor", "2s10s"),
            ("Libor", "10"),
        ] {
            table
                .push_row(vec![
                    Value::Date(d),
                    Value::from(ty),
                    Value::from(metric),
                    Value::from(0.03 + 0.00001 * day as f64),
                ])
                .unwrap();
        }
    }
    table
}

fn year_of_trading() -> Table {
    let mut table = Table::new([
        columns::SPOT_DATE,
        columns::SWAP_TYPE,
        columns::BUCKET,
        columns::NOTIONAL,
        columns::PV01,
    ]);
    let start = Date::parse("2024-04-15").unwrap().into_inner();
    for day in 0..250 {
        let d = Date::from(start + chrono::Days::new(day));
        for ty in ["OIS", "Libor"] {
            table
                .push_row(vec![
                    Value::Date(d),
                    Value::from(ty),
                    Value::from("7-10"),
                    Value::from(500.0 + day as f64),
                    Value::from(5.0),
                ])
                .unwrap();
        }
    }
    table
}

fn bench_pivot(c: &mut Criterion) {
    let table = year_of_rates();
    c.bench_function("pivot_year_of_levels", |b| {
        b.iter(|| {
            reshape::pivot(
                black_box(&table),
                columns::CURVE_DATE,
                &[columns::SWAP_TYPE, columns::METRIC],
                columns::RATE,
            )
            .unwrap()
        })
    });
}

fn bench_rate_levels(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    store.insert("usd_swaps", sheets::INTEREST_RATES, year_of_rates());
    let params = RateLevelsParams {
        swap_type: SwapTypeChoice::Both,
        tenors: vec![Tenor::Spread2s10s, Tenor::Y10],
        ..RateLevelsParams::default()
    };
    c.bench_function("rate_levels_year", |b| {
        b.iter(|| rate_levels(black_box(&store), black_box(&params)).unwrap())
    });
}

fn bench_rate_volume(c: &mut Criterion) {
    let mut store = MemoryStore::new();
    store.insert("usd_swaps", sheets::TRADING_DATA, year_of_trading());
    let params = RateVolumeParams::default();
    c.bench_function("rate_volume_year", |b| {
        b.iter(|| rate_volume(black_box(&store), black_box(&params)).unwrap())
    });
}

criterion_group!(benches, bench_pivot, bench_rate_levels, bench_rate_volume);
criterion_main!(benches);
