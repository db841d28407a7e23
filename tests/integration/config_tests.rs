//! Configuration loading and environment overrides

#[cfg(test)]
mod tests {
    use std::io::Write;

    use interior_studio::config::Config;
    use interior_studio::StudioError;
    use parking_lot::Mutex;
    use tempfile::NamedTempFile;

    use crate::{assert_err, assert_ok};

    /// Environment variables are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const OVERRIDE_VARS: &[&str] = &[
        "GEMINI_API_KEY",
        "GOOGLE_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
        "GEMINI_TIMEOUT",
        "STUDIO_HISTORY_CAPACITY",
        "STUDIO_LOG_LEVEL",
        "STUDIO_LOG_JSON",
    ];

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn new(vars: &[(&str, &str)]) -> Self {
            let saved = OVERRIDE_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect();
            for name in OVERRIDE_VARS {
                unsafe { std::env::remove_var(name) };
            }
            for (name, value) in vars {
                unsafe { std::env::set_var(name, value) };
            }
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(value) => unsafe { std::env::set_var(name, value) },
                    None => unsafe { std::env::remove_var(name) },
                }
            }
        }
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_file_then_env() {
        let _lock = ENV_LOCK.lock();
        let _env = EnvGuard::new(&[
            ("GEMINI_API_KEY", "env-key"),
            ("GEMINI_TIMEOUT", "45"),
            ("STUDIO_HISTORY_CAPACITY", "3"),
            ("STUDIO_LOG_JSON", "true"),
        ]);

        let file = write_config(
            r#"
gemini:
  model: "gemini-custom-image"
  request_timeout: 90
studio:
  history_capacity: 7
  default_quality: "hd"
"#,
        );

        let config = assert_ok!(Config::load(Some(file.path())).await);
        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.gemini.model, "gemini-custom-image");
        assert_eq!(config.gemini.request_timeout, 45);
        assert_eq!(config.studio.history_capacity, 3);
        assert_eq!(config.studio.default_quality, "hd");
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_google_api_key_fallback() {
        let _lock = ENV_LOCK.lock();
        let _env = EnvGuard::new(&[("GOOGLE_API_KEY", "google-key")]);

        let config = assert_ok!(Config::load(None).await);
        assert_eq!(config.gemini.api_key, "google-key");
        assert_eq!(config.studio.history_capacity, 10);
    }

    #[test]
    fn test_from_env_without_key_fails() {
        let _lock = ENV_LOCK.lock();
        let _env = EnvGuard::new(&[]);

        let err = assert_err!(Config::from_env());
        assert!(matches!(err, StudioError::Config(ref msg) if msg.contains("API key")));
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let _lock = ENV_LOCK.lock();
        let _env = EnvGuard::new(&[
            ("GEMINI_API_KEY", "key"),
            ("STUDIO_HISTORY_CAPACITY", "lots"),
        ]);

        let err = assert_err!(Config::from_env());
        assert!(matches!(err, StudioError::Config(ref msg) if msg.contains("STUDIO_HISTORY_CAPACITY")));
    }

    #[tokio::test]
    async fn test_unparseable_file() {
        let file = write_config("gemini: [not, a, map]");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, StudioError::Config(ref msg) if msg.contains("Failed to parse config")));
    }

    #[tokio::test]
    async fn test_yaml_round_trip_through_file() {
        let file = write_config("gemini:\n  api_key: \"file-key\"\nlogging:\n  level: \"warn\"\n");
        let config = assert_ok!(Config::from_file(file.path()).await);

        let reparsed = write_config(&config.to_yaml().unwrap());
        let again = assert_ok!(Config::from_file(reparsed.path()).await);
        assert_eq!(again.gemini.api_key, "file-key");
        assert_eq!(again.logging.level, "warn");
        assert_eq!(again.studio, config.studio);
    }
}
