use packhub_kernel::config::{ConfigError, load_config};
use packhub_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent")))?;

    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.packing.default_sizes, vec![250, 500, 1000, 2000, 5000]);
    Ok(())
}

#[test]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("server.toml"),
        "[server]\nport = 9000\n\n[packing]\ndefault_sizes = [23, 31, 53]\n",
    )?;

    let cfg: ApiConfig = load_config(Some(dir.path().join("server")))?;

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.packing.default_sizes, vec![23, 31, 53]);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("static"));
    Ok(())
}

#[test]
fn malformed_file_is_reported_with_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("broken.toml"), "[server\nport = ")?;

    let err = load_config::<ApiConfig>(Some(dir.path().join("broken")))
        .expect_err("malformed toml must fail");

    let ConfigError::Config { context, .. } = &err;
    assert_eq!(context.as_deref(), Some("Failed to build config"));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    Ok(())
}
