use hurdat::process::observation::OUTPUT_COLUMNS;
use hurdat::{pipeline, HurdatError, OutputFormat, PipelineConfig};
use reqwest::Client;
use std::{fs, path::Path};
use tempfile::tempdir;
use tracing_subscriber::{fmt, EnvFilter};

const FIXTURE: &str = include_str!("fixtures/hurdat2_sample.txt");

fn init_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("info,hurdat=debug"))
        .with_test_writer()
        .try_init();
}

fn offline_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Config whose cache already holds the fixture; the URL is never contacted.
fn cached_config(dir: &Path, output: &str) -> PipelineConfig {
    let cache_path = dir.join("hurdat_raw.csv");
    fs::write(&cache_path, FIXTURE).unwrap();
    PipelineConfig {
        source_url: "http://127.0.0.1:9/unreachable.txt".into(),
        cache_path,
        output_path: dir.join(output),
        output_format: OutputFormat::Csv,
    }
}

fn read_rows(path: &Path) -> (Vec<String>, Vec<csv::StringRecord>) {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(String::from).collect();
    let rows = rdr.records().map(Result::unwrap).collect();
    (headers, rows)
}

fn column(headers: &[String], name: &str) -> usize {
    headers.iter().position(|h| h == name).unwrap()
}

#[tokio::test]
async fn cached_source_produces_normalized_table() {
    init_logging();
    let tmp = tempdir().unwrap();
    let cfg = cached_config(tmp.path(), "cleaned.csv");

    let summary = pipeline::run_with_client(&offline_client(), &cfg)
        .await
        .unwrap();
    assert!(summary.cache_hit);
    assert_eq!(summary.storms, 3);
    assert_eq!(summary.observations, 20);
    assert_eq!(summary.count_mismatches, 0);
    assert_eq!(summary.hurricanes, 2);

    let (headers, rows) = read_rows(&cfg.output_path);
    assert_eq!(headers.len(), OUTPUT_COLUMNS.len() + 1);
    assert_eq!(headers[0], "");
    assert_eq!(&headers[1..], &OUTPUT_COLUMNS[..]);
    assert_eq!(rows.len(), 20);

    // the 1851 storm: 14 observations, all carrying its header
    let id = column(&headers, "identifier");
    let name = column(&headers, "name");
    let first: Vec<_> = rows.iter().take_while(|r| &r[id] == "AL011851").collect();
    assert_eq!(first.len(), 14);
    assert!(first.iter().all(|r| &r[name] == "UNNAMED"));

    // index column counts rows from zero
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0], i.to_string());
        assert_eq!(row.len(), headers.len());
    }

    let david = rows.iter().find(|r| &r[id] == "AL051979").unwrap();
    assert_eq!(&david[column(&headers, "timestamp")], "1979-09-04 18:00:00");
    assert_eq!(&david[column(&headers, "cat5")], "True");
    assert_eq!(&david[column(&headers, "lat_f")], "31.5");
    assert_eq!(&david[column(&headers, "lon_f")], "-80.0");

    let unreported = rows
        .iter()
        .find(|r| &r[column(&headers, "max_wind")] == "-99")
        .unwrap();
    assert_eq!(&unreported[column(&headers, "ts_flag")], "");
    assert_eq!(&unreported[column(&headers, "is_tropical")], "False");

    let southern = rows.iter().find(|r| &r[id] == "SH011980").unwrap();
    assert_eq!(&southern[column(&headers, "hour")], "6");
    assert_eq!(&southern[column(&headers, "lat_f")], "-15.0");
    assert_eq!(&southern[column(&headers, "lon_f")], "0.0");
}

#[tokio::test]
async fn flags_are_monotonic_in_output() {
    let tmp = tempdir().unwrap();
    let cfg = cached_config(tmp.path(), "cleaned.csv");
    pipeline::run_with_client(&offline_client(), &cfg)
        .await
        .unwrap();

    let (headers, rows) = read_rows(&cfg.output_path);
    let order = ["ts_flag", "cat1", "cat2", "cat3", "cat4", "cat5"].map(|c| column(&headers, c));
    for row in &rows {
        for pair in order.windows(2) {
            if &row[pair[1]] == "True" {
                assert_eq!(&row[pair[0]], "True");
            }
        }
    }
}

#[tokio::test]
async fn rerun_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let cfg = cached_config(tmp.path(), "cleaned.csv");
    let client = offline_client();

    pipeline::run_with_client(&client, &cfg).await.unwrap();
    let first = fs::read(&cfg.output_path).unwrap();
    pipeline::run_with_client(&client, &cfg).await.unwrap();
    let second = fs::read(&cfg.output_path).unwrap();
    assert_eq!(first, second);

    // the cache itself is only ever read
    assert_eq!(fs::read_to_string(&cfg.cache_path).unwrap(), FIXTURE);
}

#[tokio::test]
async fn parquet_output() {
    let tmp = tempdir().unwrap();
    let mut cfg = cached_config(tmp.path(), "cleaned.parquet");
    cfg.output_format = OutputFormat::Parquet;

    let summary = pipeline::run_with_client(&offline_client(), &cfg)
        .await
        .unwrap();
    assert_eq!(summary.observations, 20);

    let file = fs::File::open(&cfg.output_path).unwrap();
    let reader = parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
    assert_eq!(rows, 20);
}

#[tokio::test]
async fn malformed_coordinate_aborts_without_output() {
    let tmp = tempdir().unwrap();
    let cfg = cached_config(tmp.path(), "cleaned.csv");
    fs::write(
        &cfg.cache_path,
        FIXTURE.replacen("28.0N", "28.0Q", 1),
    )
    .unwrap();

    let err = pipeline::run_with_client(&offline_client(), &cfg)
        .await
        .unwrap_err();
    assert!(matches!(err, HurdatError::MalformedCoordinate { line: 2, .. }));
    assert!(!cfg.output_path.exists());
}
