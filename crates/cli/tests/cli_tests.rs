//! CLI surface smoke tests.

use assert_cmd::Command;

fn fleetctl() -> Command {
    Command::cargo_bin("fleetctl").unwrap()
}

#[test]
fn test_help_lists_every_resource() {
    let output = fleetctl().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for subcommand in [
        "agent-policy",
        "package-policy",
        "output",
        "server-host",
        "enrollment-tokens",
        "package",
    ] {
        assert!(
            stdout.contains(subcommand),
            "help output is missing {subcommand}"
        );
    }
}

#[test]
fn test_version_flag() {
    let output = fleetctl().arg("--version").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fleetctl"));
}

#[test]
fn test_package_policy_apply_requires_file_argument() {
    let output = fleetctl()
        .args(["package-policy", "apply"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--file") || stderr.contains("-f"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = fleetctl().arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
}
