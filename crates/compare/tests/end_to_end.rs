//! File-based comparison from harness JSON and artifact directory to reports.

use std::fs;
use std::path::Path;

use arraybench_compare::report::json::read_unified_json;
use arraybench_compare::{compare, write_reports, ArtifactSource, HarnessFile, ReportFormat, Status};

const HARNESS: &str = r#"[
  {"name": "a + b (int32)", "category": "Add", "suite": "Arithmetic", "dtype": "int32",
   "n": 10000000, "mean_ms": 12.0, "stddev_ms": 0.2, "min_ms": 11.8, "max_ms": 12.5,
   "iterations": 10, "throughput": 1.0e10, "timestamp": "2026-01-01T00:00:00Z"},
  {"name": "np.sum axis=0 (float64)", "category": "Sum", "suite": "Reduction", "dtype": "float64",
   "n": 10000000, "mean_ms": 4.0, "stddev_ms": 0.1, "min_ms": 3.9, "max_ms": 4.2,
   "iterations": 10, "throughput": 0.0, "timestamp": "2026-01-01T00:00:00Z"},
  {"name": "np.sqrt (float32)", "category": "Math", "suite": "Unary", "dtype": "float32",
   "n": 10000000, "mean_ms": 3.0, "iterations": 10},
  {"name": "np.mean (float64)", "dtype": "float64", "n": 10000000, "mean_ms": 1.0}
]"#;

const ARITHMETIC_REPORT: &str = r#"{
  "Title": "Arithmetic",
  "Benchmarks": [
    {"Method": "Add_Elementwise", "MethodTitle": "'a + b'", "Parameters": "N=10000000&DType=Int32",
     "Statistics": {"Mean": 18000000.0, "StandardDeviation": 100000.0}},
    {"Method": "Add_Elementwise", "Parameters": "N=1000&DType=Int32",
     "Statistics": {"Mean": 900.0}},
    {"Method": "Sqrt", "Parameters": "N=10000000, DType=Single",
     "Statistics": {"Mean": 33000000.0, "StdDev": 10.0}},
    {"Method": "Broken", "Parameters": "N=ten&DType=Int32", "Statistics": {"Mean": 1.0}}
  ]
}"#;

const REDUCTION_REPORT: &str = r#"{
  "Benchmarks": [
    {"Method": "Custom", "MethodTitle": "'np.sum(a, axis=0)'", "Parameters": "N=10000000&DType=Double",
     "Statistics": {"Mean": 2000000.0}}
  ]
}"#;

fn setup(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let harness = dir.join("harness.json");
    fs::write(&harness, HARNESS).unwrap();

    let artifacts = dir.join("artifacts");
    fs::create_dir_all(&artifacts).unwrap();
    fs::write(artifacts.join("Arithmetic-report.json"), ARITHMETIC_REPORT).unwrap();
    fs::write(artifacts.join("Reduction-report-full-compressed.json"), REDUCTION_REPORT).unwrap();
    fs::write(artifacts.join("Ignored-report.csv"), "Method,Mean").unwrap();
    fs::write(artifacts.join("Corrupt-report.json"), "{").unwrap();

    (harness, artifacts)
}

#[test]
fn test_end_to_end_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let (harness, artifacts) = setup(dir.path());

    let unified = compare(&HarnessFile::new(&harness), &ArtifactSource::new(&artifacts, 10_000_000));
    assert_eq!(unified.len(), 4);

    assert_eq!(unified[0].operation(), "a + b (int32)");
    assert_eq!(unified[0].candidate_ms(), Some(18.0));
    assert_eq!(unified[0].ratio(), Some(1.5));
    assert_eq!(unified[0].status(), Status::Close);

    assert_eq!(unified[1].candidate_ms(), Some(2.0));
    assert_eq!(unified[1].ratio(), Some(0.5));
    assert_eq!(unified[1].status(), Status::Faster);

    assert_eq!(unified[2].candidate_ms(), Some(33.0));
    assert_eq!(unified[2].status(), Status::MuchSlower);

    assert_eq!(unified[3].candidate_ms(), None);
    assert_eq!(unified[3].status(), Status::NoData);
    assert_eq!(unified[3].suite(), "");
}

#[test]
fn test_end_to_end_reports() {
    let dir = tempfile::tempdir().unwrap();
    let (harness, artifacts) = setup(dir.path());
    let unified = compare(&HarnessFile::new(&harness), &ArtifactSource::new(&artifacts, 10_000_000));

    let base = dir.path().join("out").join("benchmark-report");
    let written = write_reports(&unified, &base, ReportFormat::All).unwrap();
    assert_eq!(written.len(), 3);

    let reloaded = read_unified_json(&written[0]).unwrap();
    assert_eq!(reloaded, unified);

    let csv = fs::read_to_string(&written[1]).unwrap();
    assert!(csv.starts_with("Operation,Suite,Category,DType,N,Baseline (ms),Candidate (ms),Ratio,Status"));
    assert_eq!(csv.lines().count(), 5);

    let markdown = fs::read_to_string(&written[2]).unwrap();
    assert!(markdown.contains("**Summary:** 4 ops | ✅ 1 | 🟡 1 | 🟠 0 | 🔴 1 | ⚪ 1"));
    assert!(markdown.contains("### General"));
}

#[test]
fn test_different_comparison_size() {
    let dir = tempfile::tempdir().unwrap();
    let (harness, artifacts) = setup(dir.path());
    let unified = compare(&HarnessFile::new(&harness), &ArtifactSource::new(&artifacts, 1000));

    assert_eq!(unified[0].candidate_ms(), Some(0.0009));
    assert!(unified[1..].iter().all(|r| r.status() == Status::NoData));
}

#[test]
fn test_missing_inputs_degrade_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let unified = compare(
        &HarnessFile::new(dir.path().join("absent.json")),
        &ArtifactSource::new(dir.path().join("absent"), 10_000_000),
    );
    assert!(unified.is_empty());
}

#[test]
fn test_later_file_wins_on_collision() {
    let dir = tempfile::tempdir().unwrap();
    let harness = dir.path().join("harness.json");
    fs::write(&harness, HARNESS).unwrap();

    let artifacts = dir.path().join("artifacts");
    fs::create_dir_all(&artifacts).unwrap();
    let report = |mean: f64| {
        format!(r#"{{"Benchmarks": [{{"Method": "Add_Elementwise", "Parameters": "N=10000000&DType=Int32", "Statistics": {{"Mean": {mean}}}}}]}}"#)
    };
    fs::write(artifacts.join("A-report.json"), report(24_000_000.0)).unwrap();
    fs::write(artifacts.join("B-report.json"), report(6_000_000.0)).unwrap();

    let unified = compare(&HarnessFile::new(&harness), &ArtifactSource::new(&artifacts, 10_000_000));
    assert_eq!(unified[0].candidate_ms(), Some(6.0));
    assert_eq!(unified[0].status(), Status::Faster);
}
