use std::{env, path::PathBuf};

use tracing::{info, warn};

/// Filter directive used when `RECIPE_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration, read once at startup after logging is up.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding recipes.txt, favorites.txt and the log files
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            data_dir: PathBuf::from(try_load("RECIPE_DATA_DIR", ".")),
        }
    }

    /// Configuration rooted at an explicit directory
    #[cfg(test)]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

/// Filter directive for the tracing subscriber.
/// Read before the subscriber exists, so it cannot log.
pub fn log_filter() -> String {
    filter_or_default(env::var("RECIPE_LOG").ok())
}

fn filter_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn try_load(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            warn!("{key} is empty, using default: {default}");
            default.to_string()
        }
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn with_data_dir_sets_directory() {
        let config = Config::with_data_dir("/tmp/recipes");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/recipes"));
    }

    #[test]
    fn missing_variable_falls_back_to_default() {
        let value = try_load("RECIPE_TEST_SURELY_UNSET_VARIABLE", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(filter_or_default(None), "info");
        assert_eq!(filter_or_default(Some("  ".to_string())), "info");
        assert_eq!(filter_or_default(Some("debug".to_string())), "debug");
    }

    #[test]
    fn defaults_are_logged_once_a_subscriber_is_installed() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(DEFAULT_LOG_FILTER)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            try_load("RECIPE_TEST_SURELY_UNSET_VARIABLE", "fallback");
        });

        let output = String::from_utf8(captured.0.lock().expect("lock").clone()).expect("utf8");
        assert!(
            output.contains("RECIPE_TEST_SURELY_UNSET_VARIABLE not set, using default: fallback"),
            "unexpected log output: {output}"
        );
    }
}
