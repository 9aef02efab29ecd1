use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cli_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("userlist_server"))
}

fn names_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    writeln!(file, "Alice\nAdam\n\nBob\nCarl").unwrap();
    file
}

#[test]
fn query_subcommands() {
    let file = names_file();
    let path = file.path().to_str().unwrap();

    cli_cmd()
        .args(["count", "--names-file", path])
        .assert()
        .success()
        .stdout(predicate::str::diff("4\n"));

    cli_cmd()
        .args(["page", "--names-file", path, "--page", "1", "--size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Bob\""))
        .stdout(predicate::str::contains("\"hasPrevious\": true"));

    cli_cmd()
        .args(["letter", "a", "--names-file", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Adam\""))
        .stdout(predicate::str::contains("\"totalCount\": 2"));

    cli_cmd()
        .args(["search", "AL", "--names-file", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Alice\""))
        .stdout(predicate::str::contains("Carl").not());

    cli_cmd()
        .args(["alphabet", "--names-file", path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalLetters\": 3"));
}

#[test]
fn missing_bucket_fails() {
    let file = names_file();
    cli_cmd()
        .args(["bucket", "z", "--names-file", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no names start with letter 'Z'"));
}

#[test]
fn unreadable_names_file_aborts_startup() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.txt");
    cli_cmd()
        .args(["count", "--names-file", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to initialize user data"));
}

#[test]
fn default_names_file_works_from_any_directory() {
    let elsewhere = tempfile::tempdir().unwrap();
    cli_cmd()
        .current_dir(elsewhere.path())
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::diff("59\n"));
}
