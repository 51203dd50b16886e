use crate::Config;

use serial_test::serial;

fn clear_hm_env() {
    for (key, _) in std::env::vars() {
        if key.starts_with("HM_") {
            unsafe { std::env::remove_var(&key) };
        }
    }
}

#[test]
#[serial]
fn defaults_are_sane() {
    clear_hm_env();

    let config = Config::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.database.path, "data.db");
    assert_eq!(config.provisioning.max_slug_attempts, 3);
    assert_eq!(config.identity.timeout_secs, 10);
}

#[test]
#[serial]
fn env_overrides_apply() {
    clear_hm_env();

    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("HM_CONFIG_DIR", dir.path());
        std::env::set_var("HM_SERVER_PORT", "9100");
        std::env::set_var("HM_IDENTITY_URL", "https://identity.example.com");
        std::env::set_var("HM_IDENTITY_ANON_KEY", "anon");
        std::env::set_var("HM_IDENTITY_SERVICE_KEY", "service");
        std::env::set_var("HM_PROVISIONING_MAX_SLUG_ATTEMPTS", "5");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.identity.base_url, "https://identity.example.com");
    assert_eq!(config.identity.anon_key, "anon");
    assert_eq!(config.identity.service_key, "service");
    assert_eq!(config.provisioning.max_slug_attempts, 5);
    assert!(config.validate().is_ok());

    clear_hm_env();
}

#[test]
#[serial]
fn toml_file_is_loaded_then_env_wins() {
    clear_hm_env();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
[server]
port = 9200

[identity]
base_url = "https://toml.example.com"
anon_key = "toml-anon"
service_key = "toml-service"
"#,
    )
    .unwrap();

    unsafe {
        std::env::set_var("HM_CONFIG_DIR", dir.path());
        std::env::set_var("HM_IDENTITY_URL", "https://env.example.com");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9200);
    // Env override beats the file
    assert_eq!(config.identity.base_url, "https://env.example.com");
    assert_eq!(config.identity.anon_key, "toml-anon");

    clear_hm_env();
}

#[test]
#[serial]
fn invalid_env_values_are_ignored() {
    clear_hm_env();

    let dir = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("HM_CONFIG_DIR", dir.path());
        std::env::set_var("HM_SERVER_PORT", "not-a-port");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 8000);

    clear_hm_env();
}
