use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn dockprune() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dockprune"))
}

#[test]
fn test_config_show_defaults() {
    let home = tempfile::tempdir().unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "show"])
        .env("HOME", home.path())
        .env_remove("DOCKPRUNE_PROMPT_ON_SYSTEM_PRUNE")
        .env_remove("DOCKPRUNE_TELEMETRY")
        .current_dir(home.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("prompt_on_system_prune: true"))
        .stdout(predicate::str::contains("enabled: false"));
}

#[test]
fn test_config_show_reads_global_file() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".dockprune.toml"),
        "[docker]\nprompt_on_system_prune = false\n",
    )
    .unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "show"])
        .env("HOME", home.path())
        .env_remove("DOCKPRUNE_PROMPT_ON_SYSTEM_PRUNE")
        .current_dir(home.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("prompt_on_system_prune: false"));
}

#[test]
fn test_config_local_overrides_global() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".dockprune.toml"),
        "[telemetry]\nenabled = true\n",
    )
    .unwrap();
    fs::write(
        work.path().join(".dockprune.toml"),
        "[docker]\nprompt_on_system_prune = false\n",
    )
    .unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "show"])
        .env("HOME", home.path())
        .env_remove("DOCKPRUNE_PROMPT_ON_SYSTEM_PRUNE")
        .env_remove("DOCKPRUNE_TELEMETRY")
        .current_dir(work.path());

    cmd.assert()
        .success()
        // Local file narrows the prompt, global telemetry survives the merge
        .stdout(predicate::str::contains("prompt_on_system_prune: false"))
        .stdout(predicate::str::contains("enabled: true"));
}

#[test]
fn test_config_env_overrides_files() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".dockprune.toml"),
        "[docker]\nprompt_on_system_prune = true\n",
    )
    .unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "show"])
        .env("HOME", home.path())
        .env("DOCKPRUNE_PROMPT_ON_SYSTEM_PRUNE", "false")
        .current_dir(home.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("prompt_on_system_prune: false"));
}

#[test]
fn test_config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("good.toml");
    fs::write(&file, "[docker]\nprompt_on_system_prune = false\n").unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "validate"]).arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.toml");
    fs::write(&file, "[docker]\nprompt_on_system_prune = \"sometimes\"\n").unwrap();

    let mut cmd = dockprune();
    cmd.args(["config", "validate"]).arg(&file);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
