use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, seed_records, setup_test_db, temp_out, wm};

const TWO_DAYS: &str = r#"[
    {"id": 1, "amount": 500, "timestamp": 1704103200000, "date": "2024-01-01"},
    {"id": 2, "amount": 250, "timestamp": 1704189600000, "date": "2024-01-02"},
    {"id": 3, "amount": 710, "timestamp": 1704193200000, "date": "2024-01-02"}
]"#;

#[test]
fn test_export_json_payload_shape() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    wm().args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let content = fs::read_to_string(&out).expect("output file written");
    let days: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");

    let days = days.as_array().expect("top-level array");
    assert_eq!(days.len(), 2);

    // most recent date first, totals summed per group
    assert_eq!(days[0]["date"], "2024-01-02");
    assert_eq!(days[0]["totalMl"], 960);
    assert_eq!(days[0]["items"].as_array().unwrap().len(), 2);
    assert!(days[0]["formattedDate"].as_str().unwrap().contains("02/01"));
    assert!(days[0]["items"][0]["time"].is_string());

    assert_eq!(days[1]["date"], "2024-01-01");
    assert_eq!(days[1]["totalMl"], 500);
}

#[test]
fn test_export_csv_flattens_records() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    wm().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("output file written");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "date,time,amount_ml");
    assert_eq!(lines.len(), 4); // header + 3 records
    assert!(lines[1].starts_with("2024-01-02,"));
    assert!(lines[3].starts_with("2024-01-01,"));
}

#[test]
fn test_export_text_renders_grouped_view() {
    let db_path = setup_test_db("export_text");
    let out = temp_out("export_text", "txt");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    wm().args(["--db", &db_path, "export", "--format", "text", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("output file written");
    assert!(content.contains("(2024-01-02)"));
    assert!(content.contains("960 ml"));
    assert!(content.contains("500 ml"));
}

#[test]
fn test_export_period_filter() {
    let db_path = setup_test_db("export_period");
    let out = temp_out("export_period", "json");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    wm().args([
        "--db",
        &db_path,
        "export",
        "--file",
        &out,
        "--period",
        "2024-01-01",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("output file written");
    let days: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(days.as_array().unwrap().len(), 1);
    assert_eq!(days[0]["date"], "2024-01-01");
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "json");
    init_db(&db_path);

    wm().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    wm().args(["--db", &db_path, "export", "--file", "out.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_requires_file_or_clipboard() {
    let db_path = setup_test_db("export_no_target");
    init_db(&db_path);

    wm().args(["--db", &db_path, "export"]).assert().failure();
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "json");
    init_db(&db_path);
    seed_records(&db_path, TWO_DAYS);

    fs::write(&out, "old content").unwrap();

    // stdin is empty, so the overwrite prompt falls through to "no"
    wm().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");

    wm().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with('['));
}
