#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use optguard_guard::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
guard:
  max_value_sise: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    let s = cfg.settings();
    assert_eq!(s.max_value_size, 1_048_576);
    assert!(!s.strict);
}

#[test]
fn debug_flag_drives_strict_default() {
    let cfg = config::load_from_str("version: 1\ndebug: true\n").expect("must parse");
    assert!(cfg.settings().strict);

    let cfg = config::load_from_str(
        "version: 1\ndebug: true\nguard:\n  strict: false\n  max_value_size: 10\n",
    )
    .expect("must parse");
    let s = cfg.settings();
    assert!(!s.strict);
    assert_eq!(s.max_value_size, 10);
}

#[test]
fn wrong_version_and_zero_limit_fail() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");

    let err = config::load_from_str("version: 1\nguard:\n  max_value_size: 0\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
