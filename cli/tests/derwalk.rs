use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::path::PathBuf;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn testdata(name: &str) -> String {
    project_root()
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn derwalk() -> Command {
    let mut cmd = Command::cargo_bin("derwalk").unwrap();
    cmd.current_dir(project_root());
    cmd
}

fn stdout_of(args: &[&str]) -> Vec<u8> {
    derwalk().args(args).assert().success().get_output().stdout.clone()
}

#[test]
fn test_no_arguments_prints_usage() {
    derwalk()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("usage: "))
        .stdout(predicate::str::ends_with(" <der file>\n"))
        .stdout(predicate::str::contains("(").not());
}

#[test]
fn test_sequence_with_integer() {
    derwalk()
        .arg(testdata("seq_int42.der"))
        .assert()
        .success()
        .stdout("([INTEGER], [42])\n");
}

#[test]
fn test_bare_integer() {
    derwalk()
        .arg(testdata("int42.der"))
        .assert()
        .success()
        .stdout("([INTEGER], [42])\n");
}

#[test]
fn test_extra_arguments_are_ignored() {
    let single = stdout_of(&[testdata("seq_int42.der").as_str()]);
    let with_extra = stdout_of(&[
        testdata("seq_int42.der").as_str(),
        testdata("ec.der").as_str(),
    ]);
    assert_eq!(single, with_extra);

    let with_missing = stdout_of(&[testdata("seq_int42.der").as_str(), "does-not-exist.der"]);
    assert_eq!(single, with_missing);
}

#[rstest]
#[case::short_flag(&["-x"])]
#[case::long_flag(&["--verbose"])]
#[case::known_flag_after_extra(&["extra.der", "-o", "json"])]
#[case::double_dash(&["--", "more"])]
fn test_extra_flags_are_ignored(#[case] extra: &[&str]) {
    let path = testdata("seq_int42.der");
    let single = stdout_of(&[path.as_str()]);

    let mut args = vec![path.as_str()];
    args.extend_from_slice(extra);
    assert_eq!(single, stdout_of(&args));
}

#[test]
fn test_missing_file() {
    derwalk()
        .arg(testdata("does-not-exist.der"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("FileAccess"));
}

#[test]
fn test_not_der() {
    derwalk()
        .arg(testdata("garbage.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_truncated_der() {
    derwalk()
        .arg(testdata("truncated.der"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ec_private_key_der() {
    derwalk()
        .arg(testdata("ec.der"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "([INTEGER, OCTET STRING, OBJECT IDENTIFIER, BIT STRING], [1, 0xf4780f9e",
        ))
        .stdout(predicate::str::contains("1.2.840.10045.3.1.7"));
}

#[test]
fn test_ec_private_key_pem_matches_der() {
    let der = stdout_of(&[testdata("ec.der").as_str()]);
    let pem = stdout_of(&[testdata("ec.pem").as_str()]);
    assert_eq!(der, pem);
}

#[test]
fn test_pkcs8_private_key() {
    derwalk()
        .arg(testdata("pkcs8.pem"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "([INTEGER, OBJECT IDENTIFIER, OBJECT IDENTIFIER, OCTET STRING], [0, 1.2.840.10045.2.1, 1.2.840.10045.3.1.7, 0x306b",
        ));
}

#[test]
fn test_pkcs8_private_key_parse_octets() {
    derwalk()
        .args(["--parse-octets", testdata("pkcs8.pem").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "([INTEGER, OBJECT IDENTIFIER, OBJECT IDENTIFIER, INTEGER, OCTET STRING, BIT STRING], [0, 1.2.840.10045.2.1, 1.2.840.10045.3.1.7, 1, 0xf4780f9e",
        ));
}

#[test]
fn test_json_tags_and_values_are_aligned() {
    let stdout = stdout_of(&["-o", "json", testdata("ec.der").as_str()]);
    let parsed: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    let tags = parsed["tags"].as_array().unwrap();
    let values = parsed["values"].as_array().unwrap();
    assert_eq!(4, tags.len());
    assert_eq!(tags.len(), values.len());
    assert_eq!("OBJECT IDENTIFIER", tags[2]);
    assert_eq!("1.2.840.10045.3.1.7", values[2]);
}

#[test]
fn test_yaml_output() {
    derwalk()
        .args(["--output", "yaml", testdata("seq_int42.der").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("tags:"))
        .stdout(predicate::str::contains("- INTEGER"));
}
