use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository with `f.txt` ("hi") committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_tern_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("f.txt"),
        "hi".to_string(),
    ));

    run_tern_command(repository_dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    tern_commit(repository_dir.path(), "Initial commit GO BEARS!")
        .assert()
        .success();

    repository_dir
}

pub fn run_tern_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tern").expect("Failed to find tern binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn tern_commit(dir: &Path, message: &str) -> Command {
    run_tern_command(dir, &["commit", "-m", message])
}

pub fn read_control_file(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(".tern").join(name))
        .unwrap_or_else(|e| panic!("Failed to read .tern/{}: {}", name, e))
}

pub fn head_commit_id(dir: &Path) -> String {
    read_control_file(dir, "HEAD").trim().to_string()
}

pub fn current_branch(dir: &Path) -> String {
    read_control_file(dir, "current_branch").trim().to_string()
}
