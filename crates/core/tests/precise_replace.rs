use std::fs;

use rewire_core::locations::{LocationList, LocationRecord};
use rewire_core::precise::{apply_locations, detect_current_address, replace_plain, Detection};
use tempfile::tempdir;

const URL_PATTERN: &str = r"http://\d{1,3}(\.\d{1,3}){3}:3000";

fn list(files: &[&str]) -> LocationList {
    LocationList::new(files.iter().map(|f| LocationRecord::new(*f, 1, URL_PATTERN)).collect())
}

#[test]
fn replace_plain_counts_every_occurrence() {
    let (out, count) = replace_plain("a 1.2.3.4 b 1.2.3.4", "1.2.3.4", "5.6.7.8");
    assert_eq!(out, "a 5.6.7.8 b 5.6.7.8");
    assert_eq!(count, 2);
}

#[test]
fn rewrites_auth_service_end_to_end() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("services")).unwrap();
    let auth = root.join("services/authService.ts");
    fs::write(&auth, "const API_BASE = 'http://192.168.15.14:3000';\n").unwrap();

    let report =
        apply_locations(root, &list(&["services/authService.ts"]), "192.168.15.14", "192.168.1.50");

    assert_eq!(
        fs::read_to_string(&auth).unwrap(),
        "const API_BASE = 'http://192.168.1.50:3000';\n"
    );
    assert_eq!(report.total_replacements, 1);
    assert_eq!(report.modified_files, vec!["services/authService.ts".to_string()]);
    assert_eq!(report.changes[0].replacements, 1);
    assert!(report.stale_records.is_empty());
}

#[test]
fn listed_file_without_old_address_is_not_written() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let path = root.join("config.ts");
    fs::write(&path, "const API = 'http://10.0.0.1:3000';\n").unwrap();
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    let report = apply_locations(root, &list(&["config.ts"]), "192.168.15.14", "192.168.1.50");

    assert_eq!(report.total_replacements, 0);
    assert!(report.modified_files.is_empty());
    assert_eq!(report.untouched_files, vec!["config.ts".to_string()]);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn undecodable_files_are_reported_as_failed() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let path = root.join("api.ts");
    let mut bytes = b"const API = 'http://192.168.15.14:3000';\n".to_vec();
    bytes.push(0xff);
    fs::write(&path, &bytes).unwrap();

    let report = apply_locations(root, &list(&["api.ts"]), "192.168.15.14", "192.168.1.50");

    assert_eq!(report.failed_files, vec!["api.ts".to_string()]);
    assert!(report.untouched_files.is_empty());
    assert!(report.changes.is_empty());
    assert_eq!(report.total_replacements, 0);
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn missing_files_are_reported_and_skipped() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("present.ts"), "fetch('http://192.168.15.14:3000')\n").unwrap();

    let report = apply_locations(
        root,
        &list(&["absent.ts", "present.ts"]),
        "192.168.15.14",
        "192.168.1.50",
    );

    assert_eq!(report.missing_files, vec!["absent.ts".to_string()]);
    assert_eq!(report.modified_files, vec!["present.ts".to_string()]);
    assert_eq!(report.total_replacements, 1);
}

#[test]
fn duplicate_records_rewrite_a_file_once() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("sync.ts"),
        "a('http://192.168.15.14:3000')\nb('http://192.168.15.14:3000')\n",
    )
    .unwrap();

    let report = apply_locations(root, &list(&["sync.ts", "sync.ts"]), "192.168.15.14", "10.0.0.2");

    assert_eq!(report.total_replacements, 2);
    assert_eq!(report.modified_files, vec!["sync.ts".to_string()]);
    assert_eq!(report.changes.len(), 1);
}

#[test]
fn stale_patterns_are_flagged_without_blocking() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("api.ts"), "const HOST = '192.168.15.14';\n").unwrap();

    let report = apply_locations(
        root,
        &LocationList::new(vec![LocationRecord::new("api.ts", 7, URL_PATTERN)]),
        "192.168.15.14",
        "10.0.0.2",
    );

    assert_eq!(report.stale_records, vec!["api.ts:7".to_string()]);
    assert_eq!(report.total_replacements, 1);
}

#[test]
fn detects_first_192_168_address_in_sample_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("services")).unwrap();
    fs::write(
        root.join("services/adminServices.ts"),
        "// 10.0.0.1\nconst API = 'http://192.168.15.14:3000';\n",
    )
    .unwrap();

    let detection = detect_current_address(root, "services/adminServices.ts");
    assert_eq!(detection, Detection::Found("192.168.15.14".into()));
    assert_eq!(detection.address(), Some("192.168.15.14"));
}

#[test]
fn detection_reports_missing_or_unmatched_sample() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    assert_eq!(detect_current_address(root, "services/authService.ts"), Detection::MissingFile);

    fs::write(root.join("auth.ts"), "const API = 'http://10.241.191.119:3000';\n").unwrap();
    let detection = detect_current_address(root, "auth.ts");
    assert_eq!(detection, Detection::NoMatch);
    assert_eq!(detection.address(), None);
}
