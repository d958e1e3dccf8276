//! Startup loading: preset, optional file, then environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{ENV_APP_ENV, ENV_CONFIG_PATH};
use super::layer::PartialEnvironment;
use super::settings::EnvironmentConfig;
use super::target::{preset, DeploymentTarget};
use crate::errors::{ConfigError, ConfigResult};

type EnvLookup = Box<dyn Fn(&'static str) -> ConfigResult<Option<String>>>;

/// Read a process environment variable.
///
/// Unset is `None`; a value that is not valid UTF-8 is an error rather than
/// being treated as unset.
pub fn process_var(key: &'static str) -> ConfigResult<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::invalid(key, "not valid UTF-8")),
    }
}

/// Builds an [`EnvironmentConfig`] from layered sources.
///
/// ```rust,ignore
/// let config = ConfigLoader::new(DeploymentTarget::Development)
///     .with_file("env/local.json")
///     .with_env(process_var)
///     .load()?;
/// ```
pub struct ConfigLoader {
    target: DeploymentTarget,
    use_preset: bool,
    file: Option<PathBuf>,
    env: Option<EnvLookup>,
}

impl ConfigLoader {
    pub fn new(target: DeploymentTarget) -> Self {
        Self {
            target,
            use_preset: true,
            file: None,
            env: None,
        }
    }

    /// Layer a JSON file on top of the preset.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Start from an empty layer instead of the target's preset.
    pub fn without_preset(mut self) -> Self {
        self.use_preset = false;
        self
    }

    /// Read overrides through `lookup`; applied last.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&'static str) -> ConfigResult<Option<String>> + 'static,
    {
        self.env = Some(Box::new(lookup));
        self
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    /// Merge all layers and validate the result.
    pub fn load(self) -> ConfigResult<EnvironmentConfig> {
        let mut merged = if self.use_preset {
            preset(self.target)
        } else {
            PartialEnvironment::default()
        };

        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), "Reading configuration file");
            merged.merge(read_file(path)?);
        }

        if let Some(lookup) = &self.env {
            merged.merge(PartialEnvironment::from_env_lookup(lookup)?);
        }

        match merged.into_config() {
            Ok(config) => {
                tracing::info!(
                    target_env = %self.target,
                    production = config.production(),
                    api_server_url = %config.api_server_url(),
                    "Configuration loaded"
                );
                Ok(config)
            }
            Err(e) => {
                tracing::debug!(target_env = %self.target, error = %e, "Invalid configuration");
                Err(e)
            }
        }
    }

    /// Load using the process environment and a `.env` file if present.
    ///
    /// `APP_ENV` selects the target (default `development`) and
    /// `ENV_CONFIG_PATH` names an optional JSON file.
    pub fn load_from_process_env() -> ConfigResult<EnvironmentConfig> {
        dotenvy::dotenv().ok();
        Self::from_lookup(process_var)?.load()
    }

    /// Loader whose target, file and overrides all come from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> ConfigResult<Option<String>> + 'static,
    {
        let target = match lookup(ENV_APP_ENV)? {
            Some(name) => name.parse()?,
            None => DeploymentTarget::default(),
        };

        let mut loader = ConfigLoader::new(target);
        if let Some(path) = lookup(ENV_CONFIG_PATH)? {
            loader = loader.with_file(path);
        }

        Ok(loader.with_env(lookup))
    }
}

fn read_file(path: &Path) -> ConfigResult<PartialEnvironment> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PartialEnvironment::from_json(&contents)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::constants::{ENV_API_SERVER_URL, FIELD_API_SERVER_URL};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&'static str) -> ConfigResult<Option<String>> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| Ok(map.get(key).cloned())
    }

    #[test]
    fn test_loads_every_target_preset() {
        for target in DeploymentTarget::ALL {
            let config = ConfigLoader::new(target).load().unwrap();
            assert_eq!(config.production(), target == DeploymentTarget::Production);
        }
    }

    #[test]
    fn test_env_overrides_preset() {
        let config = ConfigLoader::new(DeploymentTarget::Development)
            .with_env(|key| match key {
                "API_SERVER_URL" => Ok(Some("http://10.0.0.5:8080/".to_string())),
                _ => Ok(None),
            })
            .load()
            .unwrap();

        assert_eq!(config.api_server_url(), "http://10.0.0.5:8080");
        assert_eq!(config.auth().audience(), "Coffee-Shop");
    }

    #[test]
    fn test_without_preset_requires_all_fields() {
        let err = ConfigLoader::new(DeploymentTarget::Production)
            .without_preset()
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::Missing { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigLoader::new(DeploymentTarget::Development)
            .with_file("/nonexistent/coffee-shop-env.json")
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_override_fails() {
        let err = ConfigLoader::new(DeploymentTarget::Development)
            .with_env(|key| Ok((key == "API_SERVER_URL").then(|| "not a url".to_string())))
            .load()
            .unwrap_err();

        assert_eq!(err.field(), Some(FIELD_API_SERVER_URL));
    }

    #[test]
    fn test_from_lookup_defaults_to_development() {
        let loader = ConfigLoader::from_lookup(lookup(&[])).unwrap();
        assert_eq!(loader.target(), DeploymentTarget::Development);

        let config = loader.load().unwrap();
        assert_eq!(config.api_server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_from_lookup_selects_target() {
        let config = ConfigLoader::from_lookup(lookup(&[("APP_ENV", "prod")]))
            .unwrap()
            .load()
            .unwrap();

        assert!(config.production());
    }

    #[test]
    fn test_from_lookup_rejects_unknown_target() {
        let err = ConfigLoader::from_lookup(lookup(&[("APP_ENV", "staging")]))
            .err()
            .unwrap();

        assert!(matches!(err, ConfigError::UnknownTarget(name) if name == "staging"));
    }

    #[test]
    fn test_from_lookup_layers_config_file() {
        let path = std::env::temp_dir().join(format!(
            "coffee-shop-config-loader-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "apiServerUrl": "http://192.168.1.20:5000" }"#).unwrap();

        let result = ConfigLoader::from_lookup(lookup(&[
            ("APP_ENV", "production"),
            ("ENV_CONFIG_PATH", path.to_str().unwrap()),
        ]))
        .unwrap()
        .load();
        fs::remove_file(&path).ok();
        let config = result.unwrap();

        assert!(config.production());
        assert_eq!(config.api_server_url(), "http://192.168.1.20:5000");
    }

    #[test]
    fn test_override_lookup_error_is_not_treated_as_unset() {
        let err = ConfigLoader::new(DeploymentTarget::Production)
            .with_env(|key| match key {
                ENV_API_SERVER_URL => Err(ConfigError::invalid(key, "not valid UTF-8")),
                _ => Ok(None),
            })
            .load()
            .unwrap_err();

        assert_eq!(err.field(), Some(ENV_API_SERVER_URL));
    }

    #[test]
    fn test_target_lookup_error_aborts() {
        let err = ConfigLoader::from_lookup(|key| match key {
            ENV_APP_ENV => Err(ConfigError::invalid(key, "not valid UTF-8")),
            _ => Ok(None),
        })
        .err()
        .unwrap();

        assert_eq!(err.field(), Some(ENV_APP_ENV));
    }

    #[test]
    fn test_process_var_unset_is_none() {
        assert!(process_var("COFFEE_SHOP_CONFIG_TEST_NEVER_SET").unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_var_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        const KEY: &str = "COFFEE_SHOP_CONFIG_TEST_NOT_UNICODE";
        env::set_var(KEY, OsStr::from_bytes(b"http://10.0.0.\xff:5000"));
        let result = process_var(KEY);
        env::remove_var(KEY);

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field, .. } if field == KEY));
    }
}
