use criterion::{criterion_group, criterion_main, Criterion};
use geotop_core::transform::{rank_cities, RankOptions};
use geotop_core::{CityRecord, CountryLookup, RegionSet};
use std::hint::black_box;

const CODES: [(&str, &str); 6] = [
    ("FR", "France"),
    ("ES", "Spain"),
    ("DE", "Germany"),
    ("IT", "Italy"),
    ("NG", "Nigeria"),
    ("EG", "Egypt"),
];

fn synthetic_cities(n: u64) -> Vec<CityRecord> {
    (0..n)
        .map(|i| CityRecord {
            geonameid: i,
            name: format!("city-{i}"),
            asciiname: format!("city-{i}"),
            alternatenames: String::new(),
            latitude: (i % 180) as f64 - 90.0,
            longitude: (i % 360) as f64 - 180.0,
            feature_class: "P".into(),
            feature_code: "PPL".into(),
            country_code: CODES[(i % CODES.len() as u64) as usize].0.into(),
            cc2: String::new(),
            admin1: "01".into(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            population: (i * 7919) % 2_000_000,
            elevation: String::new(),
            dem: "0".into(),
            timezone: "UTC".into(),
            modification_date: "2024-01-01".into(),
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let cities = synthetic_cities(200_000);
    let lookup: CountryLookup = CODES
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();
    let regions = RegionSet::from_names(["france", "spain", "germany", "nigeria"]);
    let opts = RankOptions {
        top_n: 20,
        min_population: 50_000,
    };

    c.bench_function("rank_cities_200k", |b| {
        b.iter(|| {
            let table = rank_cities(black_box(cities.clone()), &lookup, &regions, opts);
            black_box(table.len())
        })
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
