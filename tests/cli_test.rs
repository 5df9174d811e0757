//! Integration tests for the CLI surface.
//!
//! These exercise argument parsing, help output, and the `info` command
//! end-to-end. `build` runs are not exercised here since they require a
//! container runtime; the build sequence is covered by unit tests against
//! mock collaborators.

use assert_cmd::Command;
use predicates::prelude::*;

fn cotainr() -> Command {
    Command::cargo_bin("cotainr").unwrap()
}

#[test]
fn cli_no_args_prints_help_and_succeeds() {
    cotainr()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Build Apptainer/Singularity containers for HPC systems in user space.",
        ));
}

#[test]
fn cli_no_args_output_matches_help_output() {
    let no_args = cotainr().output().unwrap();
    let help = cotainr().arg("--help").output().unwrap();

    assert!(no_args.status.success());
    assert!(help.status.success());
    assert_eq!(
        String::from_utf8_lossy(&no_args.stdout),
        String::from_utf8_lossy(&help.stdout)
    );
}

#[test]
fn cli_help_lists_both_subcommands() {
    cotainr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("Build a container."))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains(
            "Obtain info about the state of all required dependencies for building a container.",
        ));
}

#[test]
fn cli_shows_version() {
    cotainr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_prints_exactly_the_not_implemented_line() {
    cotainr()
        .arg("info")
        .assert()
        .success()
        .stdout("Sorry, no information about your system is available at this time.\n");
}

#[test]
fn info_help_shows_description_and_only_the_help_option() {
    let output = cotainr().args(["info", "--help"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains(
        "Obtain info about the state of all required dependencies for building a container."
    ));
    assert!(stdout.contains("Options:"));
    assert!(stdout.contains("-h, --help"));

    // The options section holds exactly one entry: -h/--help.
    let option_lines: Vec<&str> = stdout
        .lines()
        .skip_while(|line| !line.starts_with("Options:"))
        .skip(1)
        .take_while(|line| !line.trim().is_empty())
        .collect();
    assert_eq!(option_lines.len(), 1, "unexpected options: {option_lines:?}");
    assert!(option_lines[0].contains("-h, --help"));
}

#[test]
fn info_rejects_extra_arguments() {
    cotainr()
        .args(["info", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn build_help_shows_table_derived_help_strings() {
    cotainr()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path to the built container image"))
        .stdout(predicate::str::contains(
            "base image to use for the container which may be any valid apptainer/singularity",
        ))
        .stdout(predicate::str::contains(
            "path to a conda environment.yml file to install and activate in the container",
        ));
}

#[test]
fn build_without_base_image_fails_with_usage_error() {
    cotainr()
        .args(["build", "image.sif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--base-image"));
}

#[test]
fn build_without_any_arguments_fails() {
    cotainr().arg("build").assert().failure();
}

#[test]
fn unknown_subcommand_fails_with_usage_error() {
    cotainr()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unknown_flag_fails_with_usage_error() {
    cotainr()
        .args(["info", "--no-such-flag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}

#[test]
fn build_with_missing_conda_env_file_fails_before_any_sandbox_work() {
    let temp = tempfile::TempDir::new().unwrap();
    cotainr()
        .current_dir(temp.path())
        .args([
            "build",
            "image.sif",
            "--base-image",
            "docker://alpine:3.20",
            "--conda-env",
            "does_not_exist.yml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conda environment file not found"));
}
