use std::path::{Path, PathBuf};
use std::time::Duration;

use bugzilla_bug_id_field::config::{API_KEY_ENV, URL_ENV};
use bugzilla_bug_id_field::{load_config_file, ConfigError, ConfigFile};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn load_settings_from_fixture() {
    let settings = ConfigFile::load(&fixtures_root().join("config.toml"))
        .unwrap()
        .resolve()
        .unwrap();

    assert_eq!(
        settings.bugzilla.url().as_str(),
        "https://bugzilla.example.com/"
    );
    assert_eq!(settings.bugzilla.api_key(), "fixture-api-key");
    assert_eq!(settings.bugzilla.timeout(), Duration::from_secs(3));
    assert_eq!(
        settings.mozlog.path,
        Path::new("/tmp/bugzilla-bug-id-field/moz_log")
    );
    assert_eq!(settings.mozlog.hostname, "phabricator.example.com");
    assert_eq!(settings.mozlog.logger, "MozPhabTest");
    assert_eq!(settings.mozlog.env_version, "2.0");
}

#[test]
fn fixture_without_api_key_is_rejected() {
    temp_env::with_vars([(URL_ENV, None::<&str>), (API_KEY_ENV, None)], || {
        let result = load_config_file(Some(fixtures_root().join("missing-key.toml").as_path()))
            .unwrap()
            .resolve();

        assert!(matches!(
            result,
            Err(ConfigError::MissingSetting {
                key: "automation-api-key",
                ..
            })
        ));
    });
}

#[test]
fn environment_supplies_missing_api_key() {
    temp_env::with_vars(
        [(URL_ENV, None::<&str>), (API_KEY_ENV, Some("env-api-key"))],
        || {
            let settings = load_config_file(Some(fixtures_root().join("missing-key.toml").as_path()))
                .unwrap()
                .resolve()
                .unwrap();

            assert_eq!(settings.bugzilla.api_key(), "env-api-key");
        },
    );
}
