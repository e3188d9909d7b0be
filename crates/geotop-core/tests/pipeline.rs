use geotop_core::{pipeline, Fetcher, GeoError, PipelineConfig, SoftOutcome, Source};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const COUNTRY_URL: &str = "https://geo.test/countryInfo.txt";
const CITIES_URL: &str = "https://geo.test/cities500.zip";

const COUNTRY_INFO: &str = "#ISO\tISO3\tISO-Numeric\tfips\tCountry\n\
FR\tFRA\t250\tFR\tFrance\n\
ES\tESP\t724\tSP\tSpain\n\
DE\tDEU\t276\tGM\tGermany\n";

/// Serves canned bodies and records every URL asked for.
#[derive(Default)]
struct MemoryFetcher {
    bodies: HashMap<String, Vec<u8>>,
    calls: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    fn with(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> geotop_core::Result<Vec<u8>> {
        self.calls.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| GeoError::NotFound(format!("404 {url}")))
    }
}

fn city_line(id: u64, name: &str, cc: &str, pop: &str) -> String {
    format!(
        "{id}\t{name}\t{name}\t\t45.5\t4.25\tP\tPPLA\t{cc}\t\tA1\t\t\t\t{pop}\t\t100\tEurope/Test\t2024-05-01\n"
    )
}

fn cities_zip(lines: &[String]) -> Vec<u8> {
    let mut zw = ZipWriter::new(Cursor::new(Vec::new()));
    zw.start_file("cities500.txt", SimpleFileOptions::default())
        .unwrap();
    for line in lines {
        zw.write_all(line.as_bytes()).unwrap();
    }
    zw.finish().unwrap().into_inner()
}

fn scenario_lines() -> Vec<String> {
    vec![
        city_line(1, "Paris", "FR", "2000000"),
        city_line(2, "Marseille", "FR", "1500000"),
        city_line(3, "Vence", "FR", "40000"),
        city_line(4, "Madrid", "ES", "3000000"),
        city_line(5, "Berlin", "DE", "3500000"),
        city_line(6, "Nowhere", "FR", "N/A"),
    ]
}

fn config_in(dir: &Path, regions: &str) -> PipelineConfig {
    let region_list = dir.join("regions.txt");
    std::fs::write(&region_list, regions).unwrap();
    PipelineConfig {
        reference: Source::Url(COUNTRY_URL.into()),
        dataset: Source::Url(CITIES_URL.into()),
        region_list,
        csv_out: dir.join("out/cities.csv"),
        xlsx_out: None,
        top_n: 2,
        min_population: 50_000,
    }
}

fn fetcher_for(lines: &[String]) -> MemoryFetcher {
    MemoryFetcher::default()
        .with(COUNTRY_URL, COUNTRY_INFO.as_bytes().to_vec())
        .with(CITIES_URL, cities_zip(lines))
}

#[test]
fn france_spain_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "France\nSpain\n");
    let fetcher = fetcher_for(&scenario_lines());

    let report = pipeline::run(&cfg, &fetcher).unwrap();
    assert_eq!(report.stats.rows, 3);
    assert_eq!(report.stats.countries, 2);
    assert!(matches!(report.xlsx, SoftOutcome::Disabled));
    assert_eq!(
        *fetcher.calls.borrow(),
        vec![COUNTRY_URL.to_string(), CITIES_URL.to_string()]
    );

    let csv = std::fs::read_to_string(&report.csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,name,asciiname,country_code,country_name,admin1,latitude,longitude,population,timezone",
            "1,Paris,Paris,FR,France,A1,45.5,4.25,2000000,Europe/Test",
            "2,Marseille,Marseille,FR,France,A1,45.5,4.25,1500000,Europe/Test",
            "4,Madrid,Madrid,ES,Spain,A1,45.5,4.25,3000000,Europe/Test",
        ]
    );
}

#[test]
fn output_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "france\nspain\ngermany\n");
    let fetcher = fetcher_for(&scenario_lines());

    pipeline::run(&cfg, &fetcher).unwrap();
    let first = std::fs::read(&cfg.csv_out).unwrap();

    cfg.csv_out = dir.path().join("out/again.csv");
    pipeline::run(&cfg, &fetcher).unwrap();
    let second = std::fs::read(&cfg.csv_out).unwrap();

    assert_eq!(first, second);
}

#[test]
fn unknown_code_is_kept_under_its_code() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "XK\n");
    let fetcher = fetcher_for(&[city_line(10, "Pristina", "XK", "160000")]);

    pipeline::run(&cfg, &fetcher).unwrap();
    let csv = std::fs::read_to_string(&cfg.csv_out).unwrap();
    assert!(csv.contains("10,Pristina,Pristina,XK,XK,"), "{csv}");
}

#[test]
fn unparsable_population_counts_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "Germany\nSpain\n");
    cfg.top_n = 20;
    let lines = vec![
        city_line(20, "Ghosttown", "DE", "N/A"),
        city_line(21, "Madrid", "ES", "3000000"),
    ];
    let fetcher = fetcher_for(&lines);

    let report = pipeline::run(&cfg, &fetcher).unwrap();
    assert_eq!(report.stats.rows, 1);
    let csv = std::fs::read_to_string(&cfg.csv_out).unwrap();
    assert!(!csv.contains("Germany"), "{csv}");

    // Without a floor the row survives, with population 0.
    cfg.min_population = 0;
    pipeline::run(&cfg, &fetcher).unwrap();
    let csv = std::fs::read_to_string(&cfg.csv_out).unwrap();
    assert!(csv.contains("20,Ghosttown,Ghosttown,DE,Germany,A1,45.5,4.25,0,"), "{csv}");
}

#[test]
fn missing_region_list_fails_before_any_download() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "France\n");
    cfg.region_list = dir.path().join("missing.txt");
    let fetcher = fetcher_for(&scenario_lines());

    let err = pipeline::run(&cfg, &fetcher).unwrap_err();
    assert!(matches!(err, GeoError::NotFound(_)));
    assert!(fetcher.calls.borrow().is_empty());
    assert!(!cfg.csv_out.exists());
}

#[test]
fn failed_dataset_fetch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "France\n");
    let fetcher =
        MemoryFetcher::default().with(COUNTRY_URL, COUNTRY_INFO.as_bytes().to_vec());

    assert!(pipeline::run(&cfg, &fetcher).is_err());
    assert!(!cfg.csv_out.exists());
}

#[test]
fn schema_mismatch_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), "France\n");
    let mut lines = scenario_lines();
    lines.push("99\tBroken\tBroken\n".to_string());
    let fetcher = fetcher_for(&lines);

    let err = pipeline::run(&cfg, &fetcher).unwrap_err();
    assert!(matches!(err, GeoError::Schema { line: 7, .. }), "{err}");
    assert!(!cfg.csv_out.exists());
}

#[test]
fn local_sources_need_no_fetcher() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "Spain\n");
    let info = dir.path().join("countryInfo.txt");
    let zip = dir.path().join("cities500.zip");
    std::fs::write(&info, COUNTRY_INFO).unwrap();
    std::fs::write(&zip, cities_zip(&scenario_lines())).unwrap();
    cfg.reference = Source::Path(info);
    cfg.dataset = Source::Path(zip);

    let fetcher = MemoryFetcher::default();
    let report = pipeline::run(&cfg, &fetcher).unwrap();
    assert_eq!(report.stats.rows, 1);
    assert!(fetcher.calls.borrow().is_empty());
}

#[test]
fn spreadsheet_failure_does_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "France\n");
    let blocked = dir.path().join("blocked.xlsx");
    std::fs::create_dir(&blocked).unwrap();
    cfg.xlsx_out = Some(blocked);

    let report = pipeline::run(&cfg, &fetcher_for(&scenario_lines())).unwrap();
    assert!(matches!(report.xlsx, SoftOutcome::Failed { .. }));
    assert!(cfg.csv_out.is_file());
}

/// Invariants over a larger synthetic dump: membership, per-country cap,
/// descending population inside a group, ascending group order.
#[test]
fn ranking_invariants_hold() {
    let codes = ["FR", "ES", "DE", "IT", "XK"];
    let lines: Vec<String> = (0..400u64)
        .map(|i| {
            let cc = codes[(i * 7 % 5) as usize];
            let pop = (i * 7919) % 300_000;
            city_line(i, &format!("c{i}"), cc, &pop.to_string())
        })
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config_in(dir.path(), "france\nspain\nIT\nxk\n");
    cfg.top_n = 5;
    cfg.min_population = 100_000;
    pipeline::run(&cfg, &fetcher_for(&lines)).unwrap();

    let mut rdr = csv::Reader::from_path(&cfg.csv_out).unwrap();
    let rows: Vec<(String, u64)> = rdr
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[4].to_string(), r[8].parse().unwrap())
        })
        .collect();

    assert!(!rows.is_empty());
    for pair in rows.windows(2) {
        let ((a_name, a_pop), (b_name, b_pop)) = (&pair[0], &pair[1]);
        assert!(a_name <= b_name, "groups out of order: {a_name} > {b_name}");
        if a_name == b_name {
            assert!(a_pop >= b_pop, "{a_name}: {a_pop} before {b_pop}");
        }
    }

    let mut per_country: HashMap<&str, usize> = HashMap::new();
    for (name, pop) in &rows {
        assert!(*pop >= 100_000);
        assert!(["France", "Spain", "IT", "XK"].contains(&name.as_str()), "{name}");
        *per_country.entry(name.as_str()).or_default() += 1;
    }
    assert!(per_country.values().all(|&n| n <= 5));
    assert!(!per_country.contains_key("Germany"));
}
