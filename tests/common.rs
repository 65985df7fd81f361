#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use fitlog::utils::clock::Clock;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fitlog() -> Command {
    cargo_bin_cmd!("fitlog")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitlog_data", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitlog_out.{}", name, ext));
    fs::remove_file(&path).ok();
    fs::remove_dir_all(&path).ok();
    path
}

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, 0))
        .expect("valid timestamp")
}

/// Wall clock pinned by the test.
pub struct TestClock {
    now: Cell<NaiveDateTime>,
}

impl TestClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

impl Clock for TestClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Run `init` on a fresh data dir without touching the real config file
pub fn init_data_dir(dir: &PathBuf) {
    fitlog()
        .args(["--data-dir", dir.to_str().expect("utf-8 path"), "--test", "init"])
        .assert()
        .success();
}
