//! Configuration loading with environment variable substitution.

use crate::types::ResolverConfig;
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable substitution.
///
/// Without a file the loader starts from `ResolverConfig::default()`, so
/// callers that only need the built-in chain table can skip configuration
/// entirely. Env overrides are applied after the file, then the merged
/// result is validated.
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "ABIRESOLVER_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<ResolverConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			debug!("no configuration file specified, starting from defaults");
			ResolverConfig::default()
		};

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &Path) -> Result<ResolverConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;

		let substituted_content = self.substitute_env_vars(&content)?;

		let config: ResolverConfig = toml::from_str(&substituted_content)
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value = env::var(var_name)
				.map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut ResolverConfig) -> Result<(), ConfigError> {
		if let Ok(production) = env::var(format!("{}PRODUCTION", self.env_prefix)) {
			config.resolver.production = production.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid production flag: {}", e))
			})?;
		}

		if let Ok(timeout) = env::var(format!("{}TIMEOUT_SECS", self.env_prefix)) {
			config.resolver.timeout_secs = timeout
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid timeout: {}", e)))?;
		}

		Ok(())
	}

	fn validate_config(&self, config: &ResolverConfig) -> Result<(), ConfigError> {
		if config.resolver.timeout_secs == 0 {
			return Err(ConfigError::ValidationError(
				"Per-attempt timeout must be non-zero".to_string(),
			));
		}

		for chain in config.scan_api_keys.keys() {
			if chain.parse::<u64>().is_err() {
				return Err(ConfigError::ValidationError(format!(
					"Invalid chain id in scan_api_keys: {}",
					chain
				)));
			}
		}

		for chain in config.chains.keys() {
			if chain.parse::<u64>().is_err() {
				return Err(ConfigError::ValidationError(format!(
					"Invalid chain id in chains: {}",
					chain
				)));
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn write_config(content: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(content.as_bytes()).unwrap();
		file
	}

	#[tokio::test]
	async fn test_load_without_file_yields_defaults() {
		let config = ConfigLoader::new()
			.with_env_prefix("LOADER_DEFAULTS_TEST_")
			.load()
			.await
			.unwrap();
		assert!(config.resolver.production);
		assert_eq!(config.resolver.timeout_secs, 10);
	}

	#[tokio::test]
	async fn test_load_from_file() {
		let file = write_config(
			r#"
			[resolver]
			production = false
			timeout_secs = 5

			[scan_api_keys]
			"1284" = "key-moonbeam"
			"#,
		);

		let config = ConfigLoader::new()
			.with_env_prefix("LOADER_FILE_TEST_")
			.with_file(file.path())
			.load()
			.await
			.unwrap();

		assert!(!config.resolver.production);
		assert_eq!(config.resolver.timeout_secs, 5);
		assert_eq!(
			config.scan_api_keys.get("1284").map(String::as_str),
			Some("key-moonbeam")
		);
	}

	#[tokio::test]
	async fn test_env_var_substitution() {
		env::set_var("LOADER_SUBST_TEST_KEY", "secret-value");
		let file = write_config(
			r#"
			[scan_api_keys]
			"25" = "${LOADER_SUBST_TEST_KEY}"
			"#,
		);

		let config = ConfigLoader::new()
			.with_env_prefix("LOADER_SUBST_TEST_PREFIX_")
			.with_file(file.path())
			.load()
			.await
			.unwrap();

		assert_eq!(
			config.scan_api_keys.get("25").map(String::as_str),
			Some("secret-value")
		);
	}

	#[tokio::test]
	async fn test_missing_env_var_is_an_error() {
		let file = write_config(
			r#"
			[scan_api_keys]
			"25" = "${LOADER_DEFINITELY_UNSET_VAR}"
			"#,
		);

		let result = ConfigLoader::new().with_file(file.path()).load().await;
		assert!(matches!(result, Err(ConfigError::EnvVarNotFound(_))));
	}

	#[tokio::test]
	async fn test_env_overrides() {
		env::set_var("LOADER_OVERRIDE_TEST_PRODUCTION", "false");
		env::set_var("LOADER_OVERRIDE_TEST_TIMEOUT_SECS", "2");

		let config = ConfigLoader::new()
			.with_env_prefix("LOADER_OVERRIDE_TEST_")
			.load()
			.await
			.unwrap();

		assert!(!config.resolver.production);
		assert_eq!(config.resolver.timeout_secs, 2);
	}

	#[tokio::test]
	async fn test_zero_timeout_rejected() {
		let file = write_config(
			r#"
			[resolver]
			timeout_secs = 0
			"#,
		);

		let result = ConfigLoader::new()
			.with_env_prefix("LOADER_ZERO_TIMEOUT_TEST_")
			.with_file(file.path())
			.load()
			.await;
		assert!(matches!(result, Err(ConfigError::ValidationError(_))));
	}

	#[tokio::test]
	async fn test_invalid_chain_key_rejected() {
		let file = write_config(
			r#"
			[scan_api_keys]
			"astar" = "some-key"
			"#,
		);

		let result = ConfigLoader::new()
			.with_env_prefix("LOADER_BAD_CHAIN_TEST_")
			.with_file(file.path())
			.load()
			.await;
		assert!(matches!(result, Err(ConfigError::ValidationError(_))));
	}
}
