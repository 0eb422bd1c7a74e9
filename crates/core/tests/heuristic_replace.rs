use std::fs;

use rewire_core::replace::{replace_in_content, replace_in_file, try_replace_in_file};
use tempfile::tempdir;

#[test]
fn rewrites_http_url() {
    let (out, counts) =
        replace_in_content("get('http://192.168.1.5/x')", "192.168.1.5", "10.0.0.9").unwrap();
    assert_eq!(out, "get('http://10.0.0.9/x')");
    assert!(!out.contains("192.168.1.5"));
    assert_eq!(counts.http, 1);
    assert_eq!(counts.total(), 1);
}

#[test]
fn scheme_match_is_case_insensitive() {
    let content = "A='HTTP://192.168.1.5' B='Https://192.168.1.5'";
    let (out, counts) = replace_in_content(content, "192.168.1.5", "10.0.0.9").unwrap();
    assert_eq!(out, "A='http://10.0.0.9' B='https://10.0.0.9'");
    assert_eq!(counts.http, 1);
    assert_eq!(counts.https, 1);
    assert_eq!(counts.bare, 0);
}

#[test]
fn bare_addresses_are_rewritten_on_word_boundaries() {
    let content = "host: 192.168.1.5\nother: 192.168.1.55\n";
    let (out, counts) = replace_in_content(content, "192.168.1.5", "10.0.0.9").unwrap();
    assert_eq!(out, "host: 10.0.0.9\nother: 192.168.1.55\n");
    assert_eq!(counts.bare, 1);
}

#[test]
fn url_with_longer_address_is_left_alone() {
    let content = "'http://192.168.1.55:3000'";
    let (out, counts) = replace_in_content(content, "192.168.1.5", "10.0.0.9").unwrap();
    assert_eq!(out, content);
    assert_eq!(counts.total(), 0);
}

#[test]
fn dollar_signs_in_new_address_are_literal() {
    let (out, _) = replace_in_content("http://1.2.3.4", "1.2.3.4", "$1").unwrap();
    assert_eq!(out, "http://$1");
}

#[test]
fn second_application_is_a_no_op() {
    let content = "const API = 'http://192.168.1.5:3000'; // 192.168.1.5\n";
    let (once, first) = replace_in_content(content, "192.168.1.5", "10.0.0.9").unwrap();
    let (twice, second) = replace_in_content(&once, "192.168.1.5", "10.0.0.9").unwrap();
    assert_eq!(first.total(), 2);
    assert_eq!(second.total(), 0);
    assert_eq!(once, twice);
}

#[test]
fn file_is_rewritten_only_when_something_changed() {
    let dir = tempdir().unwrap();
    let hit = dir.path().join("api.ts");
    let miss = dir.path().join("other.ts");
    fs::write(&hit, "const BASE = 'https://192.168.1.5';\n").unwrap();
    fs::write(&miss, "const BASE = 'https://192.168.1.6';\n").unwrap();
    let miss_modified = fs::metadata(&miss).unwrap().modified().unwrap();

    assert_eq!(replace_in_file(&hit, "192.168.1.5", "10.0.0.9"), 1);
    assert_eq!(replace_in_file(&miss, "192.168.1.5", "10.0.0.9"), 0);

    assert_eq!(fs::read_to_string(&hit).unwrap(), "const BASE = 'https://10.0.0.9';\n");
    assert_eq!(fs::read_to_string(&miss).unwrap(), "const BASE = 'https://192.168.1.6';\n");
    assert_eq!(fs::metadata(&miss).unwrap().modified().unwrap(), miss_modified);
}

#[test]
fn missing_file_counts_as_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ts");
    assert_eq!(replace_in_file(&path, "192.168.1.5", "10.0.0.9"), 0);
    let err = try_replace_in_file(&path, "192.168.1.5", "10.0.0.9").unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
    assert!(!path.exists());
}
