use clipgen::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CLIPGEN_SERVER__PORT");
        env::remove_var("CLIPGEN_MOCK__SCRIPT_DELAY_MS");
        env::remove_var("CLIPGEN_AUTH__ENFORCE_PASSWORD_MATCH");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("MOCK_INSTANT");
    }
}

fn temp_yaml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["clipgen"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.request_timeout_secs, 30);
    assert_eq!(config.mock.auth_delay_ms, 1000);
    assert_eq!(config.mock.thumbnail_delay_ms, 2000);
    assert_eq!(config.mock.script_delay_ms, 2000);
    assert_eq!(config.mock.video_delay_ms, 3000);
    assert!(!config.auth.enforce_password_match);
    assert_eq!(config.session.idle_timeout_secs, 1800);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CLIPGEN_SERVER__PORT", "9090");
        env::set_var("CLIPGEN_AUTH__ENFORCE_PASSWORD_MATCH", "true");
    }

    let config = AppConfig::load_from_args(["clipgen"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert!(config.auth.enforce_password_match);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_via_env_path() {
    clear_env_vars();

    let file = temp_yaml(
        r"
server:
  port: 7070
mock:
  script_delay_ms: 50
",
    );
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args(["clipgen"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.mock.script_delay_ms, 50);
    // Keys absent from the file keep their defaults.
    assert_eq!(config.mock.video_delay_ms, 3000);

    clear_env_vars();
}

#[test]
#[serial]
fn test_layering_precedence() {
    clear_env_vars();

    let file = temp_yaml(
        r"
server:
  port: 7070
mock:
  script_delay_ms: 50
",
    );
    let path = file.path().to_string_lossy().into_owned();
    unsafe {
        env::set_var("CLIPGEN_SERVER__PORT", "9090");
        env::set_var("CLIPGEN_MOCK__SCRIPT_DELAY_MS", "75");
    }

    // env beats file
    let config = AppConfig::load_from_args(["clipgen", "--config", path.as_str()])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.mock.script_delay_ms, 75);

    // CLI beats env
    let config = AppConfig::load_from_args([
        "clipgen",
        "--config",
        path.as_str(),
        "--port",
        "8181",
        "--instant",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.mock.script_delay_ms, 0);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(
        cwd_path,
        r"
server:
  port: 6060
",
    )
    .expect("Failed to write ./config.yaml");

    let result = AppConfig::load_from_args(["clipgen"]);
    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(result.expect("Failed to load config").server.port, 6060);
}
