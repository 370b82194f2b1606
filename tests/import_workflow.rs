// tests/import_workflow.rs

//! End-to-end import: export file -> prepared batch -> SQLite store.

mod common;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use common::{SCENARIO_CSV, setup_test_db, write_export};
use credimport::config::parse_config_string;
use credimport::db::models::{ImportRun, StoredCredential};
use credimport::{
    CsvPasswordImporter, ExistingPasswordMatchDetector, ImportStatus, ImportSummary, MatchPolicy,
    ParseResult, PasswordImporter, SqliteCredentialStore, spawn_import,
};
use std::sync::Arc;

fn prepare(path: &std::path::Path) -> (usize, Vec<credimport::CredentialRecord>) {
    match CsvPasswordImporter::default().read_csv_file(path) {
        ParseResult::Success {
            found_in_source,
            records,
        } => (found_in_source, records),
        ParseResult::Error(e) => panic!("unexpected parse error: {}", e),
    }
}

fn importer(db_path: &str) -> PasswordImporter<SqliteCredentialStore> {
    PasswordImporter::new(
        SqliteCredentialStore::open(db_path).unwrap(),
        ExistingPasswordMatchDetector::default(),
    )
}

#[test]
fn test_import_export_file() {
    let (temp_dir, db_path) = setup_test_db();
    let path = write_export(&temp_dir, "export.csv", SCENARIO_CSV);

    let (found, records) = prepare(&path);
    assert_eq!(found, 3);
    assert_eq!(records.len(), 1);

    let outcome = importer(&db_path).import_passwords(&records).unwrap();
    assert_eq!(outcome.saved_ids.len(), 1);
    assert!(outcome.duplicates.is_empty());
    assert_eq!(outcome.total_count, 1);

    let summary = ImportSummary::from_outcome(found, &outcome);
    assert_eq!(summary.to_string(), "Found 3 passwords; imported 1");

    let conn = credimport::db::open(&db_path).unwrap();
    let saved = StoredCredential::find_by_domain(&conn, "a.com").unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].username.as_deref(), Some("bob"));
    assert_eq!(saved[0].password.as_deref(), Some("pw1"));
    assert_eq!(saved[0].title.as_deref(), Some("A"));
}

#[test]
fn test_reimport_reports_duplicates() {
    let (temp_dir, db_path) = setup_test_db();
    let path = write_export(&temp_dir, "export.csv", SCENARIO_CSV);
    let (_, records) = prepare(&path);

    importer(&db_path).import_passwords(&records).unwrap();
    let second = importer(&db_path).import_passwords(&records).unwrap();

    assert!(second.saved_ids.is_empty());
    assert_eq!(second.duplicates, records);

    let conn = credimport::db::open(&db_path).unwrap();
    assert_eq!(StoredCredential::count(&conn).unwrap(), 1);
}

#[test]
fn test_changed_password_follows_match_policy() {
    let (temp_dir, db_path) = setup_test_db();
    let first = write_export(
        &temp_dir,
        "first.csv",
        "name,url,username,password,note\nA,https://a.com,bob,old,\n",
    );
    let second = write_export(
        &temp_dir,
        "second.csv",
        "name,url,username,password,note\nA,https://A.com/login,bob,new,\n",
    );

    importer(&db_path).import_passwords(&prepare(&first).1).unwrap();

    // Same site and username: skipped by default
    let outcome = importer(&db_path).import_passwords(&prepare(&second).1).unwrap();
    assert_eq!(outcome.duplicates.len(), 1);

    // Password must match as well: saved as a new credential
    let config = parse_config_string("[duplicates]\nmatch_password = true\n").unwrap();
    assert_eq!(config.duplicates.policy(), MatchPolicy::DomainUsernameAndPassword);
    let strict = PasswordImporter::new(
        SqliteCredentialStore::open(&db_path).unwrap(),
        ExistingPasswordMatchDetector::new(config.duplicates.policy()),
    );
    let outcome = strict.import_passwords(&prepare(&second).1).unwrap();
    assert_eq!(outcome.saved_ids.len(), 1);
}

#[test]
fn test_malformed_rows_are_skipped() {
    let (temp_dir, db_path) = setup_test_db();
    let csv = "name,url,username,password,note\n\
A,https://a.com,alice,pw,\n\
broken row\n\
B,https://b.com,carol,pw2\n\
C,https://c.com,dave,pw3,note,extra,fields\n";
    let path = write_export(&temp_dir, "export.csv", csv);

    let (found, records) = prepare(&path);
    assert_eq!(found, 2);

    let outcome = importer(&db_path).import_passwords(&records).unwrap();
    assert_eq!(outcome.saved_ids.len(), 2);

    let conn = credimport::db::open(&db_path).unwrap();
    let domains: Vec<String> = StoredCredential::list_all(&conn)
        .unwrap()
        .into_iter()
        .map(|c| c.domain)
        .collect();
    assert!(domains.contains(&"a.com".to_string()));
    assert!(domains.contains(&"b.com".to_string()));
}

#[test]
fn test_blob_import() {
    let (_temp_dir, db_path) = setup_test_db();
    let uri = format!("data:text/csv;base64,{}", STANDARD.encode(SCENARIO_CSV));

    let ParseResult::Success { records, .. } = CsvPasswordImporter::default().read_csv_blob(&uri)
    else {
        panic!("expected blob to decode");
    };

    let outcome = importer(&db_path).import_passwords(&records).unwrap();
    assert_eq!(outcome.saved_ids.len(), 1);
}

#[test]
fn test_record_import_run() {
    let (temp_dir, db_path) = setup_test_db();
    let path = write_export(&temp_dir, "export.csv", SCENARIO_CSV);
    let (found, records) = prepare(&path);

    let importer = importer(&db_path);
    let outcome = importer.import_passwords(&records).unwrap();

    let mut run = ImportRun::from_outcome("export.csv", found, &outcome);
    importer
        .with_store(|store| run.insert(store.connection()))
        .unwrap()
        .unwrap();

    let conn = credimport::db::open(&db_path).unwrap();
    let runs = ImportRun::list_recent(&conn, 10).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].found_in_source, 3);
    assert_eq!(runs[0].saved_count, 1);
    assert!(runs[0].finished_at.is_some());
}

#[test]
fn test_record_interrupted_run_beside_open_store() {
    let (temp_dir, db_path) = setup_test_db();
    let path = write_export(&temp_dir, "export.csv", SCENARIO_CSV);
    let (found, records) = prepare(&path);

    // Hold the importer (and its store connection) open, as an interrupted
    // run does, and record the partial outcome through a second connection
    let importer = importer(&db_path);
    importer.import_passwords(&records[..1]).unwrap();
    let partial = importer.last_status().unwrap().outcome().clone();

    let mut run = ImportRun::from_outcome("export.csv", found, &partial);
    run.cancelled = true;
    let conn = credimport::db::open(&db_path).unwrap();
    run.insert(&conn).unwrap();

    let runs = ImportRun::list_recent(&conn, 10).unwrap();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].cancelled);
    assert_eq!(runs[0].saved_count, 1);
}

#[tokio::test]
async fn test_background_import_publishes_final_status() {
    let (temp_dir, db_path) = setup_test_db();
    let csv = "name,url,username,password,note\n\
A,https://a.com,alice,pw,\n\
B,https://b.com,bob,pw,\n\
C,https://c.com,carol,pw,\n";
    let path = write_export(&temp_dir, "export.csv", csv);
    let (_, records) = prepare(&path);

    let importer = Arc::new(importer(&db_path));
    let outcome = spawn_import(Arc::clone(&importer), records)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(outcome.saved_ids.len(), 3);

    // A subscriber arriving after the run still sees the final state
    let status = importer.status();
    assert_eq!(*status.borrow(), Some(ImportStatus::Finished(outcome)));
}
