//! Integration tests for the `hotel` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to run the find-room,
//! occupied, occupancy and book subcommands against a JSON fixture with
//! "today" pinned to 2026-03-16.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

const TODAY: &str = "2026-03-16";

/// Helper: path to the hotel.json fixture.
fn hotel_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/hotel.json")
}

/// Helper: copy the fixture to a scratch file the test may modify.
fn scratch_copy(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hotel-cli-test-{name}.json"));
    std::fs::copy(hotel_json_path(), &path).expect("fixture must be copyable");
    path
}

/// Helper: `hotel --data <fixture> --today 2026-03-16`.
fn hotel() -> Command {
    let mut cmd = Command::cargo_bin("hotel").unwrap();
    cmd.env_remove("HOTEL_DATA")
        .env_remove("RUST_LOG")
        .args(["--data", hotel_json_path(), "--today", TODAY]);
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// find-room
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_room_skips_booked_room() {
    // Room 1 is booked 17-21; room 2 only has an inactive booking until the 19th.
    hotel()
        .args(["find-room", "--start", "2026-03-17", "--end", "2026-03-19"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn find_room_prints_sentinel_when_full() {
    hotel()
        .args(["find-room", "--start", "2026-03-20", "--end", "2026-03-21"])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn find_room_start_today_fails() {
    hotel()
        .args(["find-room", "--start", TODAY, "--end", "2026-03-18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn find_room_reversed_range_fails() {
    hotel()
        .args(["find-room", "--start", "2026-03-18", "--end", "2026-03-17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before start date"));
}

#[test]
fn find_room_reads_data_path_from_env() {
    Command::cargo_bin("hotel")
        .unwrap()
        .env("HOTEL_DATA", hotel_json_path())
        .args(["--today", TODAY])
        .args(["find-room", "--start", "2026-03-26", "--end", "2026-03-27"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn missing_data_file_argument_fails() {
    Command::cargo_bin("hotel")
        .unwrap()
        .env_remove("HOTEL_DATA")
        .args(["find-room", "--start", "2026-03-26", "--end", "2026-03-27"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data file given"));
}

#[test]
fn unreadable_data_file_fails() {
    Command::cargo_bin("hotel")
        .unwrap()
        .args(["--data", "/nonexistent/hotel.json", "--today", TODAY])
        .args(["find-room", "--start", "2026-03-26", "--end", "2026-03-27"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read data file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// occupied / occupancy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn occupied_lists_fully_booked_dates() {
    hotel()
        .args(["occupied", "--start", "2026-03-17", "--end", "2026-03-26"])
        .assert()
        .success()
        .stdout("2026-03-20\n2026-03-21\n");
}

#[test]
fn occupied_with_no_full_dates_prints_nothing() {
    hotel()
        .args(["occupied", "--start", "2026-03-22", "--end", "2026-03-30"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn occupancy_prints_counts_per_day() {
    hotel()
        .args(["occupancy", "--start", "2026-03-19", "--end", "2026-03-20"])
        .assert()
        .success()
        .stdout("2026-03-19 1/2\n2026-03-20 2/2\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// book
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn book_saves_new_active_booking() {
    let path = scratch_copy("book-valid");

    Command::cargo_bin("hotel")
        .unwrap()
        .args(["--data", path.to_str().unwrap(), "--today", TODAY])
        .args(["book", "--customer", "7", "--room", "2"])
        .args(["--start", "2026-03-26", "--end", "2026-03-27"])
        .assert()
        .success()
        .stdout("4\n");

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let bookings = saved["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 4);
    assert_eq!(bookings[3]["customer_id"], 7);
    assert_eq!(bookings[3]["room_id"], 2);
    assert_eq!(bookings[3]["start_date"], "2026-03-26");
    assert_eq!(bookings[3]["is_active"], true);
    assert_eq!(saved["rooms"].as_array().unwrap().len(), 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn book_sentinel_room_is_rejected_and_file_untouched() {
    let path = scratch_copy("book-sentinel");
    let before = std::fs::read_to_string(&path).unwrap();

    Command::cargo_bin("hotel")
        .unwrap()
        .args(["--data", path.to_str().unwrap(), "--today", TODAY])
        .args(["book", "--customer", "1", "--room", "-1"])
        .args(["--start", "2026-03-26", "--end", "2026-03-27"])
        .assert()
        .code(2)
        .stdout("rejected\n");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn book_overlapping_room_is_rejected_and_file_untouched() {
    // Room 1 is booked 17-21 in the fixture.
    let path = scratch_copy("book-overlap");
    let before = std::fs::read_to_string(&path).unwrap();

    Command::cargo_bin("hotel")
        .unwrap()
        .args(["--data", path.to_str().unwrap(), "--today", TODAY])
        .args(["book", "--customer", "9", "--room", "1"])
        .args(["--start", "2026-03-21", "--end", "2026-03-23"])
        .assert()
        .code(2)
        .stdout("rejected\n");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn book_past_dates_fails() {
    let path = scratch_copy("book-past");

    Command::cargo_bin("hotel")
        .unwrap()
        .args(["--data", path.to_str().unwrap(), "--today", TODAY])
        .args(["book", "--customer", "1", "--room", "1"])
        .args(["--start", "2026-03-10", "--end", "2026-03-12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));

    let _ = std::fs::remove_file(&path);
}
