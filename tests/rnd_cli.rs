use assert_cmd::Command;
use predicates::prelude::*;

const ALPHABET: &str = "23456789abcdefghjkmnpqrstvwxyz";

fn rnd() -> Command {
    Command::cargo_bin("rnd").unwrap()
}

fn token(args: &[&str]) -> String {
    let output = rnd().args(args).output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.ends_with('\n'), "{:?}", text);
    text.trim_end_matches('\n').to_string()
}

#[test]
fn token_has_requested_length() {
    for length in [0usize, 1, 10, 1024] {
        let value = token(&[&length.to_string()]);
        assert_eq!(value.len(), length);
        assert!(value.chars().all(|c| ALPHABET.contains(c)), "{}", value);
    }
}

#[test]
fn default_length_is_ten() {
    assert_eq!(token(&[]).len(), token(&["10"]).len());
    assert_eq!(token(&[]).len(), 10);
}

#[test]
fn zero_prints_empty_line() {
    rnd().arg("0").assert().success().stdout("\n");
}

#[test]
fn never_prints_ambiguous_characters() {
    let value = token(&["4096"]);
    for c in ['0', '1', 'i', 'l', 'o', 'u'] {
        assert!(!value.contains(c), "{}", c);
    }
}

#[test]
fn repeated_runs_differ() {
    assert_ne!(token(&["8"]), token(&["8"]));
}

#[test]
fn invalid_arguments_fail_without_output() {
    for args in [vec!["-1"], vec!["abc"], vec!["5", "5"]] {
        rnd()
            .args(&args)
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::starts_with("ERROR:"));
    }
}

#[test]
fn diagnostic_names_the_offending_value() {
    rnd()
        .arg("hello")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("hello").and(predicate::str::contains("--help")));

    rnd()
        .args(["5", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument").and(predicate::str::contains('7')));
}

#[test]
fn count_and_first_char_alpha() {
    let output = rnd()
        .args(["--count", "20", "--first-char-alpha", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    for line in lines {
        assert_eq!(line.len(), 5);
        assert!(line.chars().next().unwrap().is_ascii_lowercase(), "{}", line);
    }
}

#[test]
fn integer_kind_prints_integer() {
    token(&["--u32"]).parse::<u32>().unwrap();
    token(&["--int64"]).parse::<i64>().unwrap();
}

#[test]
fn version_exits_zero() {
    rnd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(unix)]
#[test]
fn huge_length_streams_until_reader_leaves() {
    use std::io::Read;
    use std::process::Stdio;

    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_rnd"))
        .arg("100000000000000")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let mut head = vec![0u8; 64 * 1024];
    stdout.read_exact(&mut head).unwrap();
    assert!(head.iter().all(|&b| ALPHABET.as_bytes().contains(&b)));
    drop(stdout);

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));
}

#[cfg(target_os = "linux")]
#[test]
fn write_failure_exits_one() {
    use std::process::Stdio;

    for args in [vec![], vec!["--u64"]] {
        let full = std::fs::File::create("/dev/full").unwrap();
        let output = std::process::Command::new(env!("CARGO_BIN_EXE_rnd"))
            .args(&args)
            .stdout(Stdio::from(full))
            .stderr(Stdio::piped())
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("ERROR: failed to write stdout"), "{}", stderr);
    }
}
