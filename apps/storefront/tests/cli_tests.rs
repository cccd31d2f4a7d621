//! Integration tests for the `folio` binary.
//!
//! Every test points the storefront at a closed local port, so nothing
//! here depends on the public catalog being up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

/// Writes a storefront.toml pointing at an unreachable catalog.
fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("storefront.toml");
    fs::write(
        &path,
        format!(
            "[catalog]\nbase_url = \"{}\"\nrequest_timeout_secs = 5\n",
            UNREACHABLE_API
        ),
    )
    .expect("Failed to write config");
    path
}

fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_API_URL")
        .env_remove("FOLIO_CONFIG")
        .env_remove("FOLIO_REQUEST_TIMEOUT_SECS")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(write_config(dir));
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("books"))
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("shop"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn test_non_numeric_book_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["book", "abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Book not found"))
        .stderr(predicate::str::contains("Error: Book not found: abc"));
}

#[test]
fn test_unreachable_catalog_book_is_not_found() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["book", "5"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Book not found"));
}

#[test]
fn test_unreachable_catalog_lists_nothing() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["books", "--search", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing found"));
}

#[test]
fn test_invalid_draft_is_rejected_before_submission() {
    let dir = TempDir::new().unwrap();
    let draft = dir.path().join("draft.json");
    fs::write(
        &draft,
        r#"{
            "title": "",
            "author": "Ion Creangă",
            "genre": "Memoir",
            "language": "Romanian",
            "year": "3000",
            "imageUrl": "https://example.com/amintiri.jpg",
            "editions": [{ "edition": "Paperback", "price": "", "currency": "MDL", "inStock": true }]
        }"#,
    )
    .unwrap();

    folio(&dir)
        .arg("submit")
        .arg(&draft)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("title: Title is required"))
        .stdout(predicate::str::contains(
            "year: Year cannot be later than the current year",
        ))
        .stdout(predicate::str::contains("price-0: Price must be greater than 0"))
        .stderr(predicate::str::contains("Book form has 3 invalid field(s)"));
}

#[test]
fn test_missing_draft_file_fails() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["submit", "/no/such/draft.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot read draft file"));
}

#[test]
fn test_invalid_api_url_fails_configuration() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["books", "--api-url", "ftp://books.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load storefront configuration"));
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_CONFIG")
        .args(["--config", "/no/such/storefront.toml", "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_shop_session_on_stdin() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("shop")
        .write_stdin("help\ncart\nadd abc\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Folio"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("The cart is empty"))
        .stdout(predicate::str::contains("Book not found: abc"))
        .stdout(predicate::str::contains("[cart: 0] > "));
}
