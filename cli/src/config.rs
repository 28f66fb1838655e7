#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub output: OutputConfig,

	#[serde(default)]
	pub decode: DecodeConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent printed documents, compact single line otherwise
	pub pretty: bool,

	#[serde(default)]
	/// attach an @context to normalized documents
	pub ld_context: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DecodeConfig {
	#[serde(default)]
	/// make `check` fail when some value could not be classified
	pub reject_unclassified: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::Config;

	#[test]
	fn defaults() {
		let config = Config::default();
		assert!(config.output.pretty);
		assert!(!config.output.ld_context);
		assert!(!config.decode.reject_unclassified);
	}

	#[test]
	fn partial_file_keeps_other_defaults() {
		let config : Config = toml::from_str("[decode]\nreject_unclassified = true\n").unwrap();
		assert!(config.decode.reject_unclassified);
		assert!(config.output.pretty);
	}

	#[test]
	fn missing_file_falls_back_to_defaults() {
		let config = Config::load(Some(&std::path::PathBuf::from("/nonexistent/apvocab.toml")));
		assert!(config.output.pretty);
	}

	#[test]
	fn printed_config_parses_back() {
		let mut config = Config::default();
		config.output.ld_context = true;
		let text = toml::to_string_pretty(&config).unwrap();
		let again : Config = toml::from_str(&text).unwrap();
		assert!(again.output.ld_context);
	}
}
