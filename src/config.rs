// config.rs
//
// responsible for handling cpdiag.toml

use std::{
    env,
    fs,
    io::ErrorKind,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Result,
};
use serde::Deserialize;
use tracing::debug;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "CPDIAG_CONFIG";
pub const CONFIG_FILE: &str = "cpdiag.toml";

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub diagnostics: DiagnosticsConfig,
    pub stress:      StressConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub color: ColorChoice,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always emit escape codes, even when stderr is redirected
    #[default]
    Always,
    /// Emit escape codes only when stderr is a terminal
    Auto,
    Never,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StressConfig {
    pub iterations: u64,
    pub seed:       u64,
    pub report:     PathBuf,
    pub log_dir:    PathBuf,
    /// Stop once this many failing inputs were collected
    pub stop_after: Option<usize>,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed:       0,
            report:     PathBuf::from("failures.jsonl"),
            log_dir:    PathBuf::from("logs"),
            stop_after: None,
        }
    }
}

impl Config {
    /// Loads the config from `$CPDIAG_CONFIG`, falling back to `cpdiag.toml`
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load() -> Result<Self> {
        let path = env::var_os(CONFIG_ENV).map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = match fs::read_to_string(path) {
            | Ok(s) => s,
            | Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {path:?}, using defaults");
                return Ok(Self::default());
            },
            | Err(e) => return Err(e).with_context(|| format!("Failed to read {path:?}")),
        };

        Self::parse(&config_str).with_context(|| format!("Invalid config at {path:?}"))
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(config_str)?;
        debug!("Parsed config: {config:#?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.diagnostics.color, ColorChoice::Always);
        assert_eq!(config.stress.iterations, 1000);
        assert_eq!(config.stress.report, PathBuf::from("failures.jsonl"));
        assert!(config.stress.stop_after.is_none());
    }

    #[test]
    fn parses_tables() {
        let config = Config::parse(
            r#"
            [diagnostics]
            color = "never"

            [stress]
            iterations = 25
            seed = 7
            stop_after = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.diagnostics.color, ColorChoice::Never);
        assert_eq!(config.stress.iterations, 25);
        assert_eq!(config.stress.seed, 7);
        assert_eq!(config.stress.stop_after, Some(3));
        assert_eq!(config.stress.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Config::parse("[diagnostics]\ncolor = \"sometimes\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.diagnostics.color, ColorChoice::Always);
    }

    #[test]
    fn env_var_names_the_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stress]\niterations = 3").unwrap();

        // SAFETY: the only test in this crate that sets the variable
        unsafe { env::set_var(CONFIG_ENV, file.path()) };
        let config = Config::load();
        unsafe { env::remove_var(CONFIG_ENV) };

        assert_eq!(config.unwrap().stress.iterations, 3);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[diagnostics]\ncolor = \"auto\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.diagnostics.color, ColorChoice::Auto);
    }
}
