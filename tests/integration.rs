// Integration testing drives the CLI as a subprocess against temporary
// template and destination directories.
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_fixture(dir: &Path, common: &str, overrides: &str) {
    fs::create_dir_all(dir.join("template")).unwrap();
    fs::write(
        dir.join("template/cfg.txt"),
        "value=!SUBfooSUB! other=!SUBbarSUB!\n",
    )
    .unwrap();
    fs::write(dir.join("common.json"), common).unwrap();
    fs::write(dir.join("overrides.json"), overrides).unwrap();
}

fn expand_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("sweepgen").unwrap();

    cmd.arg("expand")
        .arg(dir.join("template"))
        .arg(dir.join("dest"))
        .arg(dir.join("common.json"))
        .arg(dir.join("overrides.json"));

    cmd
}

#[test]
fn expand_applies_common_and_override_substitutions() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1, "bar": 2}"#, r#"[{"foo": 10}, {}]"#);

    expand_cmd(dir.path()).assert().success();

    let run_0 = fs::read_to_string(dir.path().join("dest/run_0/cfg.txt")).unwrap();
    let run_1 = fs::read_to_string(dir.path().join("dest/run_1/cfg.txt")).unwrap();

    assert_eq!(run_0, "value=10 other=2\n");
    assert_eq!(run_1, "value=1 other=2\n");
}

#[test]
fn expand_creates_one_directory_per_run_specification() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1, "bar": 2}"#, r#"[{}, {}, {}]"#);

    expand_cmd(dir.path()).assert().success();

    for index in 0..3 {
        assert!(dir
            .path()
            .join(format!("dest/run_{}/cfg.txt", index))
            .is_file());
    }
    assert!(!dir.path().join("dest/run_3").exists());
}

#[test]
fn expand_twice_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 5, "bar": 6}"#, r#"[{"bar": 60}]"#);

    expand_cmd(dir.path()).assert().success();
    let first = fs::read_to_string(dir.path().join("dest/run_0/cfg.txt")).unwrap();

    expand_cmd(dir.path()).assert().success();
    let second = fs::read_to_string(dir.path().join("dest/run_0/cfg.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn token_free_files_are_copied_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1, "bar": 2}"#, r#"[{}]"#);
    fs::create_dir_all(dir.path().join("template/notes")).unwrap();
    fs::write(
        dir.path().join("template/notes/readme.txt"),
        "nothing to substitute\n",
    )
    .unwrap();

    expand_cmd(dir.path()).assert().success();

    let copied = fs::read_to_string(dir.path().join("dest/run_0/notes/readme.txt")).unwrap();

    assert_eq!(copied, "nothing to substitute\n");
}

#[test]
fn placeholders_without_values_stay_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1}"#, r#"[{}]"#);

    expand_cmd(dir.path()).assert().success();

    let run_0 = fs::read_to_string(dir.path().join("dest/run_0/cfg.txt")).unwrap();

    assert_eq!(run_0, "value=1 other=!SUBbarSUB!\n");
}

#[test]
fn prefix_flag_renames_run_directories() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1, "bar": 2}"#, r#"[{}]"#);

    expand_cmd(dir.path())
        .arg("--prefix")
        .arg("job_")
        .assert()
        .success();

    assert!(dir.path().join("dest/job_0/cfg.txt").is_file());
    assert!(!dir.path().join("dest/run_0").exists());
}

#[test]
fn missing_template_directory_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("common.json"), "{}").unwrap();
    fs::write(dir.path().join("overrides.json"), "[{}]").unwrap();

    expand_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("template directory not found"));

    assert!(!dir.path().join("dest").exists());
}

#[test]
fn malformed_overrides_fail_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), r#"{"foo": 1}"#, r#"{"foo": 1}"#);

    expand_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Parsing error"));

    assert!(!dir.path().join("dest").exists());
}

#[test]
fn scan_lists_keys_across_the_tree() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("template/nested")).unwrap();
    fs::write(
        dir.path().join("template/a.txt"),
        "!SUBalphaSUB! !SUB beta SUB!",
    )
    .unwrap();
    fs::write(
        dir.path().join("template/nested/b.txt"),
        "!SUBalphaSUB! !SUBgammaSUB!",
    )
    .unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("sweepgen").unwrap();

    cmd.arg("scan").arg(dir.path().join("template"));

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("alpha"))
        .stdout(predicates::str::contains("gamma"))
        .stdout(predicates::str::contains("beta").not());
}
