use assert_cmd::Command;
use larder_backup::Settings;
use tempfile::tempdir;

#[test]
fn test_config_persists_settings() {
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();

    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("LARDER_HOME", temp_path);
    cmd.args(["config", "--max-workers", "4", "--request-throttling", "500"]);
    cmd.assert().success();

    let settings = Settings::read(&temp_path.join("settings.json")).unwrap();
    assert_eq!(settings.max_workers, 4);
    assert_eq!(settings.request_throttling, 500);
    assert_eq!(
        settings.request_timeout,
        Settings::default().request_timeout
    );
}

#[test]
fn test_config_without_args_writes_defaults() {
    let temp_dir = tempdir().unwrap();
    let temp_path = temp_dir.path();

    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("LARDER_HOME", temp_path);
    cmd.args(["config"]);
    cmd.assert().success();

    let settings = Settings::read(&temp_path.join("settings.json")).unwrap();
    assert_eq!(settings, Settings::default());
}
