use std::path::Path;

use serde::Deserialize;

use crate::error::TailError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9999;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "JTAIL_CONFIG";

/// Connection defaults, overridable from a small YAML file:
///
/// ```yaml
/// host: logs.internal
/// port: 5000
/// ```
///
/// The command line still wins over anything loaded here.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub host: String,
    pub port: u16,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Loads defaults from `path` if given, else from the file named by
/// `JTAIL_CONFIG` if set, else returns the compiled-in defaults.
pub fn load_defaults(path: Option<&Path>) -> Result<Defaults, TailError> {
    let env_path = std::env::var_os(CONFIG_ENV).map(std::path::PathBuf::from);
    let path = match (path, &env_path) {
        (Some(path), _) => path,
        (None, Some(path)) => path.as_path(),
        (None, None) => return Ok(Defaults::default()),
    };
    load_defaults_from(path)
}

fn load_defaults_from(path: &Path) -> Result<Defaults, TailError> {
    let config_error = |message: String| TailError::Config {
        path: path.display().to_string(),
        message,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    serde_yaml::from_str(&raw).map_err(|e| config_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_compiled_in_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.host, "localhost");
        assert_eq!(defaults.port, 9999);
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host: logs.internal\nport: 5000").unwrap();

        let defaults = load_defaults(Some(file.path())).unwrap();
        assert_eq!(defaults.host, "logs.internal");
        assert_eq!(defaults.port, 5000);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port: 5000").unwrap();

        let defaults = load_defaults(Some(file.path())).unwrap();
        assert_eq!(defaults.host, "localhost");
        assert_eq!(defaults.port, 5000);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_defaults(Some(Path::new("/nonexistent/jtail.yaml")));
        assert!(matches!(result, Err(TailError::Config { .. })));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hsot: typo.example").unwrap();

        let result = load_defaults(Some(file.path()));
        assert!(matches!(result, Err(TailError::Config { .. })));
    }
}
