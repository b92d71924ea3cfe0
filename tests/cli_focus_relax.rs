//! focus / relax / status against a temp hosts file.

mod common;

use assert_cmd::Command;
use focusfocus::cli::normalize_action;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn focusfocus(home: &Path, hosts: &Path) -> Command {
    let mut cmd = Command::cargo_bin("focusfocus").unwrap();
    cmd.env("FOCUSFOCUS_HOME", home)
        .env("FOCUSFOCUS_HOSTS_FILE", hosts)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn focus_then_relax() {
    let dir = common::temp_dir();
    let hosts = common::write_file(dir.path(), "hosts", "127.0.0.1\tlocalhost\n");
    let list = common::write_file(dir.path(), "sites.txt", "a.com\nb.com\n");

    focusfocus(dir.path(), &hosts)
        .args(["focus"])
        .arg(&list)
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));

    let content = fs::read_to_string(&hosts).unwrap();
    assert!(content.starts_with("# FocusFocusStart lines:2 Added:"));
    assert!(content.contains("127.0.0.1 a.com\n127.0.0.1 b.com\n# FocusFocusStop\n127.0.0.1\tlocalhost\n"));

    focusfocus(dir.path(), &hosts)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.com").and(predicate::str::contains("b.com")));

    focusfocus(dir.path(), &hosts)
        .arg("relax")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1\tlocalhost\n");

    focusfocus(dir.path(), &hosts)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not focused"));
}

#[test]
fn redirect_flag_overrides_default() {
    let dir = common::temp_dir();
    let hosts = common::write_file(dir.path(), "hosts", "");
    let list = common::write_file(dir.path(), "sites.txt", "a.com\n");

    focusfocus(dir.path(), &hosts)
        .args(["--redirect", "0.0.0.0", "focus"])
        .arg(&list)
        .assert()
        .success();

    assert!(fs::read_to_string(&hosts).unwrap().contains("0.0.0.0 a.com"));
}

#[test]
fn config_file_redirect_used() {
    let dir = common::temp_dir();
    common::write_file(dir.path(), "config.toml", "redirect = \"10.9.8.7\"\n");
    let hosts = common::write_file(dir.path(), "hosts", "");
    let list = common::write_file(dir.path(), "sites.txt", "a.com\n");

    focusfocus(dir.path(), &hosts)
        .arg("focus")
        .arg(&list)
        .assert()
        .success();

    assert!(fs::read_to_string(&hosts).unwrap().contains("10.9.8.7 a.com"));
}

#[test]
fn missing_hosts_file_exits_nonzero() {
    let dir = common::temp_dir();
    focusfocus(dir.path(), &dir.path().join("no-such-hosts"))
        .arg("relax")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_host_list_leaves_file_alone() {
    let dir = common::temp_dir();
    let hosts = common::write_file(dir.path(), "hosts", "127.0.0.1\tlocalhost\n");

    focusfocus(dir.path(), &hosts)
        .arg("focus")
        .arg(dir.path().join("no-such-list"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to load focus list"));

    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1\tlocalhost\n");
}

#[test]
fn malformed_block_is_not_touched() {
    let dir = common::temp_dir();
    let content = "# FocusFocusStart lines:1 Added:x\n127.0.0.1 a.com\n";
    let hosts = common::write_file(dir.path(), "hosts", content);

    focusfocus(dir.path(), &hosts)
        .arg("relax")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no end marker"));

    assert_eq!(fs::read_to_string(&hosts).unwrap(), content);
}

#[test]
fn action_is_case_insensitive() {
    let dir = common::temp_dir();
    let hosts = common::write_file(dir.path(), "hosts", "127.0.0.1\tlocalhost\n");
    let list = common::write_file(dir.path(), "sites.txt", "a.com\n");

    focusfocus(dir.path(), &hosts)
        .arg("Focus")
        .arg(&list)
        .assert()
        .success();
    assert!(fs::read_to_string(&hosts).unwrap().contains("127.0.0.1 a.com"));

    focusfocus(dir.path(), &hosts)
        .arg("RELAX")
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));
    assert_eq!(fs::read_to_string(&hosts).unwrap(), "127.0.0.1\tlocalhost\n");
}

#[test]
fn normalize_action_skips_options_and_values() {
    let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        normalize_action(args(&["ff", "--redirect", "X", "FOCUS", "List.TXT"])),
        args(&["ff", "--redirect", "X", "focus", "List.TXT"])
    );
    assert_eq!(
        normalize_action(args(&["ff", "--hosts-file=/H", "Status"])),
        args(&["ff", "--hosts-file=/H", "status"])
    );
    assert_eq!(normalize_action(args(&["ff"])), args(&["ff"]));
}
