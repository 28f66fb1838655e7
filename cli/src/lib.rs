use std::path::{Path, PathBuf};

mod config;
pub use config::*;

mod error;
pub use error::CliError;

mod inspect;
pub use inspect::*;

mod normalize;
pub use normalize::*;

mod check;
pub use check::*;

mod types;
pub use types::*;

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// show how every value of a document was classified
	Inspect {
		/// json document to read, stdin if not given
		path: Option<PathBuf>,
	},

	/// decode and encode a document, printing the result
	Normalize {
		/// json document to read, stdin if not given
		path: Option<PathBuf>,

		#[arg(long, default_value_t = false)]
		/// attach an @context, overrides config value
		context: bool,

		#[arg(long, default_value_t = false)]
		/// print on a single line, overrides config value
		compact: bool,
	},

	/// verify that a document survives decoding and encoding unchanged
	Check {
		/// json document to read, stdin if not given
		path: Option<PathBuf>,

		#[arg(long, default_value_t = false)]
		/// fail if any value could not be classified, overrides config value
		strict: bool,
	},

	/// list known type tokens and their capabilities
	Types {
		#[arg(long, value_parser = capability)]
		/// only show types carrying this capability
		capability: Option<apvocab::Capability>,
	},
}

pub fn run(config: &Config, command: CliCommand) -> Result<(), CliError> {
	match command {
		CliCommand::Inspect { path } => {
			let document = read_document(path.as_deref())?;
			let entity = apvocab::from_value(&document, &apvocab::Vocabulary)?;
			for line in inspect(&entity) {
				println!("{line}");
			}
		},

		CliCommand::Normalize { path, context, compact } => {
			let document = read_document(path.as_deref())?;
			let value = normalize(&document, context || config.output.ld_context)?;
			if config.output.pretty && !compact {
				println!("{}", serde_json::to_string_pretty(&value)?);
			} else {
				println!("{}", serde_json::to_string(&value)?);
			}
		},

		CliCommand::Check { path, strict } => {
			let document = read_document(path.as_deref())?;
			check(&document, strict || config.decode.reject_unclassified)?;
			tracing::info!("document round trips cleanly");
		},

		CliCommand::Types { capability } => {
			for line in types(capability) {
				println!("{line}");
			}
		},
	}

	Ok(())
}

fn read_document(path: Option<&Path>) -> Result<serde_json::Value, CliError> {
	let text = match path {
		Some(path) => std::fs::read_to_string(path)?,
		None => std::io::read_to_string(std::io::stdin())?,
	};
	Ok(serde_json::from_str(&text)?)
}

fn capability(value: &str) -> Result<apvocab::Capability, String> {
	apvocab::Capability::try_from(value).map_err(|_| format!("unknown capability '{value}'"))
}
