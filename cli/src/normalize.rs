use apvocab::{Vocabulary, LD};

use crate::CliError;

/// decode and encode again, dropping anything the codec would not emit on its own
pub fn normalize(document: &serde_json::Value, ld_context: bool) -> Result<serde_json::Value, CliError> {
	let entity = apvocab::from_value(document, &Vocabulary)?;
	let mut value = entity.to_value()?;
	if ld_context {
		value = value.ld_context();
	}
	Ok(value)
}
