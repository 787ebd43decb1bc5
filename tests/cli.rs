use std::process::{Command, Output};

fn dmy(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dmy"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_formats_date() {
    let out = dmy(&["1", "2", "2023"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"1/2/2023\n");
}

#[test]
fn test_negative_values() {
    let out = dmy(&["-5", "12", "2020"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"-5/12/2020\n");
}

#[test]
fn test_malformed_args_coerce_to_zero() {
    let out = dmy(&["7", "abc", "1999"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"7/0/1999\n");

    let out = dmy(&["31x", "12", "20.5"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"31/12/20\n");
}

#[test]
fn test_no_args_fails_with_usage() {
    let out = dmy(&[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn test_too_few_args_fails_with_usage() {
    let out = dmy(&["1", "2"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn test_too_many_args_fails() {
    let out = dmy(&["1", "2", "2023", "extra"]);
    assert!(!out.status.success());
}
