//! Configuration for the todobot process
//!
//! Settings come from an optional config file (TOML, JSON or YAML) with
//! command-line flags layered on top. The result is stored once in
//! [`BOT_CONF`] and read from anywhere through [`bot_config!`].
//!
//! # Example
//!
//! ```no_run
//! use todobot::config::{BOT_CONF, Cli, Parser, setup};
//!
//! let args = Cli::parse();
//! setup(args)?;
//!
//! let config = BOT_CONF.load();
//! println!("Answering as {} in chat {}", config.bot_name, config.chat_id);
//! # Ok::<(), todobot::config::ConfigError>(())
//! ```

use std::path::Path;
use std::sync::Arc;
use std::sync::OnceLock;

use arc_swap::ArcSwap;
pub use clap::Parser;
use command::BOT_MENTION;
use command::ChatId;
use command::Command;
use command::CommandError;
use command::CommandTable;
use command::OperandParser;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,

	#[error("Invalid command catalogue: {0}")]
	Catalogue(#[from] CommandError),

	#[error("Failed to initialize logging: {0}")]
	Telemetry(#[from] telemetry::TelemetryError),
}

/// Command-line arguments for the bot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/config.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Mention the bot answers to, stripped from incoming commands
	#[arg(long)]
	pub bot_name: Option<String>,

	/// Chat the console transport speaks for
	#[arg(long, allow_hyphen_values = true)]
	pub chat_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
	pub bot_name: String,
	pub chat_id: i64,
	pub log_level: String,
	/// Replaces the built-in catalogue when set
	pub commands: Option<Vec<Command>>,
}

impl Default for BotConfig {
	fn default() -> Self {
		Self {
			bot_name: BOT_MENTION.into(),
			chat_id: 0,
			log_level: "info".into(),
			commands: None,
		}
	}
}

impl BotConfig {
	pub fn chat(&self) -> ChatId {
		ChatId(self.chat_id)
	}

	/// Build the command table, validating a configured catalogue
	pub fn command_table(&self) -> Result<CommandTable, CommandError> {
		let table = match &self.commands {
			Some(commands) => CommandTable::from_commands(commands.clone())?,
			None => CommandTable::new(),
		};
		Ok(table.with_parser(OperandParser::new([self.bot_name.clone()])))
	}
}

pub struct GlobalConfig {
	inner: OnceLock<ArcSwap<BotConfig>>,
}

impl GlobalConfig {
	pub const fn new() -> Self {
		Self {
			inner: OnceLock::new(),
		}
	}

	pub fn init(&self, config: BotConfig) {
		let _ = self.inner.set(ArcSwap::from_pointee(config));
	}

	pub fn load(&self) -> arc_swap::Guard<Arc<BotConfig>> {
		self.inner.get().expect("Config is not initialized").load()
	}
}

impl Default for GlobalConfig {
	fn default() -> Self {
		Self::new()
	}
}

pub static BOT_CONF: GlobalConfig = GlobalConfig::new();

/// Helper macro to access bot configuration fields
///
/// Usage:
/// - For Copy types (numbers): `let id = bot_config!(chat_id);`
/// - For Borrowed types (Strings): `let s = &bot_config!(bot_name);`
#[macro_export]
macro_rules! bot_config {
	($field:ident) => {
		$crate::config::BOT_CONF.load().$field
	};
}

/// Resolve the configuration, start logging and publish [`BOT_CONF`]
pub fn setup(args: Cli) -> Result<(), ConfigError> {
	let config = resolve(args)?;
	// Reject a bad catalogue before anything starts
	config.command_table()?;

	telemetry::init(&config.log_level)?;
	BOT_CONF.init(config);
	Ok(())
}

fn resolve(args: Cli) -> Result<BotConfig, ConfigError> {
	let default_config = "conf/config.toml";
	let mut config = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(default_config).exists() => load_from_file(default_config)?,
		None => BotConfig::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(log_level) = args.log_level {
		config.log_level = log_level;
	}
	if let Some(bot_name) = args.bot_name {
		config.bot_name = bot_name;
	}
	if let Some(chat_id) = args.chat_id {
		config.chat_id = chat_id;
	}
	Ok(config)
}

fn load_from_file<P: AsRef<Path>>(path: P) -> Result<BotConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write_config(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join(name);
		std::fs::write(&file_path, content).unwrap();
		(dir, file_path)
	}

	fn cli(config: Option<&Path>) -> Cli {
		Cli {
			config: config.map(|p| p.display().to_string()),
			log_level: None,
			bot_name: None,
			chat_id: None,
		}
	}

	#[test]
	fn test_config_singleton() {
		// If another test already initialized it, this is a no-op
		BOT_CONF.init(BotConfig::default());

		let bot_name = &bot_config!(bot_name);
		assert_eq!(bot_name, BOT_MENTION);
		assert_eq!(bot_config!(chat_id), 0);
	}

	#[test]
	fn test_parse_toml() {
		let (_dir, file_path) = write_config(
			"config.toml",
			r#"
bot_name = "@HomeBot"
chat_id = -1001
log_level = "debug"

[[commands]]
name = "note"
max_operands = 2
format = "/note text [; tag]"
example = "/note buy milk; home"
"#,
		);

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.bot_name, "@HomeBot");
		assert_eq!(config.chat(), ChatId(-1001));
		assert_eq!(config.log_level, "debug");

		let table = config.command_table().unwrap();
		assert_eq!(table.len(), 1);
		let operands = table.operands("note", "/note@HomeBot milk").unwrap();
		assert_eq!(operands.into_vec(), vec![Some("milk".to_string()), None]);
	}

	#[test]
	fn test_parse_json() {
		let (_dir, file_path) = write_config(
			"config.json",
			r#"
{
  "bot_name": "@HomeBot",
  "chat_id": 7,
  "log_level": "warn"
}
"#,
		);

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.bot_name, "@HomeBot");
		assert_eq!(config.chat_id, 7);
		assert_eq!(config.log_level, "warn");
		assert!(config.commands.is_none());
		assert_eq!(config.command_table().unwrap().len(), 5);
	}

	#[test]
	fn test_parse_yaml() {
		let (_dir, file_path) = write_config(
			"config.yml",
			r#"
chat_id: 12
commands:
  - name: diary
    max_operands: 1
    format: "/diary text"
    example: "/diary hello"
  - name: diary
    max_operands: 1
    format: "/diary text"
    example: "/diary hello"
"#,
		);

		let config = load_from_file(&file_path).unwrap();
		assert_eq!(config.chat_id, 12);
		assert_eq!(config.bot_name, BOT_MENTION);
		assert!(matches!(
			config.command_table(),
			Err(CommandError::DuplicateName(name)) if name == "diary"
		));
	}

	#[test]
	fn test_negative_arity_rejected() {
		let (_dir, file_path) = write_config(
			"config.toml",
			r#"
[[commands]]
name = "money"
max_operands = -1
format = "/money"
example = "/money 1"
"#,
		);

		assert!(matches!(
			load_from_file(&file_path),
			Err(ConfigError::TomlParse(_))
		));
	}

	#[test]
	fn test_unsupported_format() {
		let (_dir, file_path) = write_config("config.ini", "chat_id = 1");
		assert!(matches!(
			load_from_file(&file_path),
			Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
		));
	}

	#[test]
	fn test_missing_file() {
		assert!(matches!(
			load_from_file("/nonexistent/todobot.toml"),
			Err(ConfigError::Io { .. })
		));
	}

	#[test]
	fn test_cli_overrides_file() {
		let (_dir, file_path) = write_config("config.toml", "chat_id = 1\nlog_level = \"debug\"");
		let mut args = cli(Some(&file_path));
		args.chat_id = Some(99);
		args.bot_name = Some("@Other".to_string());

		let config = resolve(args).unwrap();
		assert_eq!(config.chat_id, 99);
		assert_eq!(config.bot_name, "@Other");
		assert_eq!(config.log_level, "debug");
	}
}
