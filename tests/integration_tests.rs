use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, parse_added_id, seed_records, setup_test_db, wm};

#[test]
fn test_add_positive_amount_shows_in_today() {
    let db_path = setup_test_db("add_positive");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "250"])
        .assert()
        .success()
        .stdout(contains("Logged 250 ml"));

    wm().args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("250 ml of 3000 ml"));
}

#[test]
fn test_add_zero_amount_is_rejected() {
    let db_path = setup_test_db("add_zero");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "0"])
        .assert()
        .success()
        .stdout(contains("must be a positive number"));

    wm().args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("0 ml of 3000 ml"))
        .stdout(contains("No water logged today yet"));
}

#[test]
fn test_add_negative_amount_is_rejected() {
    let db_path = setup_test_db("add_negative");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "-50"])
        .assert()
        .success()
        .stdout(contains("must be a positive number"));
}

#[test]
fn test_add_accumulates_todays_total() {
    let db_path = setup_test_db("add_accumulates");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "250"]).assert().success();
    wm().args(["--db", &db_path, "add", "500"]).assert().success();

    wm().args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("750 ml of 3000 ml"));
}

#[test]
fn test_del_existing_record() {
    let db_path = setup_test_db("del_existing");
    init_db(&db_path);

    let output = wm()
        .args(["--db", &db_path, "add", "300"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = parse_added_id(&String::from_utf8_lossy(&output));

    wm().args(["--db", &db_path, "del", &id.to_string()])
        .assert()
        .success()
        .stdout(contains(format!("Record {} deleted", id)));

    wm().args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("0 ml of 3000 ml"));
}

#[test]
fn test_del_unknown_id_is_a_noop() {
    let db_path = setup_test_db("del_unknown");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "300"]).assert().success();

    wm().args(["--db", &db_path, "del", "424242"])
        .assert()
        .success()
        .stdout(contains("No record with id 424242"));

    wm().args(["--db", &db_path, "today"])
        .assert()
        .success()
        .stdout(contains("300 ml of 3000 ml"));
}

#[test]
fn test_goal_default_and_update() {
    let db_path = setup_test_db("goal_update");
    init_db(&db_path);

    wm().args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("Daily goal: 3000 ml"));

    wm().args(["--db", &db_path, "goal", "--set", "2500"])
        .assert()
        .success()
        .stdout(contains("Daily goal set to 2500 ml"));

    wm().args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("Daily goal: 2500 ml"));
}

#[test]
fn test_goal_rejects_non_positive() {
    let db_path = setup_test_db("goal_non_positive");
    init_db(&db_path);

    wm().args(["--db", &db_path, "goal", "--set", "0"])
        .assert()
        .success()
        .stdout(contains("must be a positive number"));

    wm().args(["--db", &db_path, "goal"])
        .assert()
        .success()
        .stdout(contains("Daily goal: 3000 ml"));
}

#[test]
fn test_quick_defaults_and_add_sorted() {
    let db_path = setup_test_db("quick_add");
    init_db(&db_path);

    wm().args(["--db", &db_path, "quick"])
        .assert()
        .success()
        .stdout(contains("250 ml, 500 ml, 710 ml, 1000 ml"));

    wm().args(["--db", &db_path, "quick", "--add", "300"])
        .assert()
        .success()
        .stdout(contains("250 ml, 300 ml, 500 ml, 710 ml, 1000 ml"));
}

#[test]
fn test_quick_rejects_duplicate() {
    let db_path = setup_test_db("quick_duplicate");
    init_db(&db_path);

    wm().args(["--db", &db_path, "quick", "--add", "500"])
        .assert()
        .success()
        .stdout(contains("already present"));

    wm().args(["--db", &db_path, "quick"])
        .assert()
        .success()
        .stdout(contains("250 ml, 500 ml, 710 ml, 1000 ml"));
}

#[test]
fn test_quick_remove() {
    let db_path = setup_test_db("quick_remove");
    init_db(&db_path);

    wm().args(["--db", &db_path, "quick", "--remove", "710"])
        .assert()
        .success()
        .stdout(contains("Quick amount 710 ml removed"));

    wm().args(["--db", &db_path, "quick"])
        .assert()
        .success()
        .stdout(contains("250 ml, 500 ml, 1000 ml"));

    wm().args(["--db", &db_path, "quick", "--remove", "9999"])
        .assert()
        .success()
        .stdout(contains("No quick amount 9999 ml"));
}

#[test]
fn test_history_groups_most_recent_date_first() {
    let db_path = setup_test_db("history_order");
    init_db(&db_path);

    seed_records(
        &db_path,
        r#"[
            {"id": 1, "amount": 500, "timestamp": 1704103200000, "date": "2024-01-01"},
            {"id": 2, "amount": 250, "timestamp": 1704189600000, "date": "2024-01-02"}
        ]"#,
    );

    let output = wm()
        .args(["--db", &db_path, "history"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8_lossy(&output).to_string();

    let newer = stdout.find("2024-01-02").expect("newer date missing");
    let older = stdout.find("2024-01-01").expect("older date missing");
    assert!(newer < older, "most recent date must come first");
    assert!(stdout.contains("250 ml total"));
    assert!(stdout.contains("500 ml total"));
}

#[test]
fn test_history_period_filter() {
    let db_path = setup_test_db("history_period");
    init_db(&db_path);

    seed_records(
        &db_path,
        r#"[
            {"id": 1, "amount": 500, "timestamp": 1704103200000, "date": "2024-01-01"},
            {"id": 2, "amount": 250, "timestamp": 1706868000000, "date": "2024-02-02"}
        ]"#,
    );

    wm().args(["--db", &db_path, "history", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("500 ml total"))
        .stdout(contains("2024-02-02").not());
}

#[test]
fn test_history_invalid_period_fails() {
    let db_path = setup_test_db("history_bad_period");
    init_db(&db_path);

    wm().args(["--db", &db_path, "history", "--period", "next-tuesday"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "250"]).assert().success();
    wm().args(["--db", &db_path, "goal", "--set", "2000"])
        .assert()
        .success();

    wm().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("goal"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);

    wm().args(["--db", &db_path, "add", "250"]).assert().success();

    wm().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Intake records"));

    wm().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
