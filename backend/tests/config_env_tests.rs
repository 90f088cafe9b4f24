//! Environment overrides for the server configuration.

use std::io::Write;

use sustainability_api::config::{ConfigError, ServerConfig};

mod support;

#[test]
fn test_env_overrides_defaults() {
    support::with_scoped_env(
        &[
            ("SERVER_CONFIG", None),
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9191")),
            ("PUBLIC_BASE_URL", Some("https://kpi.example.org")),
        ],
        || {
            let mut config = ServerConfig::default();
            config.apply_env().unwrap();
            assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9191");
            assert_eq!(config.public_base_url(), Some("https://kpi.example.org"));
        },
    );
}

#[test]
fn test_empty_base_url_clears_setting() {
    support::with_scoped_env(&[("PUBLIC_BASE_URL", Some(""))], || {
        let mut config = ServerConfig::default();
        config.manifest.public_base_url = Some("https://old.example.org".to_string());
        config.apply_env().unwrap();
        assert_eq!(config.public_base_url(), None);
    });
}

#[test]
fn test_invalid_port_env() {
    support::with_scoped_env(&[("PORT", Some("eighty"))], || {
        let mut config = ServerConfig::default();
        let err = config.apply_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    });
}

#[test]
fn test_load_from_explicit_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nhost = \"127.0.0.1\"\nport = 7000\n\n[manifest]\npublic_base_url = \"https://file.example.org\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    support::with_scoped_env(
        &[
            ("SERVER_CONFIG", Some(path.as_str())),
            ("HOST", None),
            ("PORT", Some("7001")),
            ("PUBLIC_BASE_URL", None),
        ],
        || {
            let config = ServerConfig::load().unwrap();
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 7001);
            assert_eq!(config.public_base_url(), Some("https://file.example.org"));
        },
    );
}

#[test]
fn test_load_reports_unparseable_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server\nport = ").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    support::with_scoped_env(&[("SERVER_CONFIG", Some(path.as_str()))], || {
        let err = ServerConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    });
}
