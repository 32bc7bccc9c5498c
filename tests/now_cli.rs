use assert_cmd::Command;
use chrono::{NaiveDateTime, Utc};
use predicates::prelude::*;

fn now() -> Command {
    Command::cargo_bin("now").unwrap()
}

#[test]
fn prints_fourteen_digit_utc_timestamp() {
    let before = Utc::now().timestamp();
    let output = now().output().unwrap();
    let after = Utc::now().timestamp();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.len(), 15, "{:?}", text);
    assert!(text.ends_with('\n'));

    let digits = &text[..14];
    assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{}", digits);

    let stamp = NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S")
        .unwrap()
        .and_utc()
        .timestamp();
    assert!(stamp >= before - 1 && stamp <= after + 1);
}

#[test]
fn ignores_host_timezone() {
    let output = now().env("TZ", "Pacific/Kiritimati").output().unwrap();
    let stamp = String::from_utf8(output.stdout).unwrap();
    let parsed = NaiveDateTime::parse_from_str(stamp.trim_end(), "%Y%m%d%H%M%S")
        .unwrap()
        .and_utc()
        .timestamp();

    assert!((parsed - Utc::now().timestamp()).abs() < 60);
}

#[test]
fn rejects_arguments() {
    now()
        .arg("extra")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("ERROR:").and(predicate::str::contains("extra")));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_one() {
    use std::process::Stdio;

    let full = std::fs::File::create("/dev/full").unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_now"))
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR: failed to write stdout"), "{}", stderr);
}
