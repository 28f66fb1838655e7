use apvocab::Vocabulary;

use crate::CliError;

/// decode, encode, and make sure a second pass yields the same document. returns how many values
/// stayed unclassified
pub fn check(document: &serde_json::Value, reject_unclassified: bool) -> Result<usize, CliError> {
	let entity = apvocab::from_value(document, &Vocabulary)?;
	let first = entity.to_value()?;
	let second = apvocab::from_value(&first, &Vocabulary)?.to_value()?;
	if first != second {
		tracing::debug!("first pass: {first}");
		tracing::debug!("second pass: {second}");
		return Err(CliError::Unstable);
	}

	let mut original = document.clone();
	if let Some(map) = original.as_object_mut() {
		map.remove("@context");
	}
	if original != first {
		tracing::info!("document is stable but its normalized form differs from the input");
	}

	let unclassified = crate::inspect::unclassified(&entity);
	if unclassified > 0 {
		if reject_unclassified {
			return Err(CliError::Unclassified(unclassified));
		}
		tracing::warn!("{unclassified} values could not be classified and are kept verbatim");
	}

	Ok(unclassified)
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::CliError;

	fn document() -> serde_json::Value {
		json!({
			"@context": ["https://www.w3.org/ns/activitystreams"],
			"type": "Announce",
			"id": "https://example.com/activities/1",
			"actor": "https://example.com/users/alice",
			"object": "https://example.com/notes/1",
			"published": "not a date",
			"to": ["https://www.w3.org/ns/activitystreams#Public"],
		})
	}

	#[test]
	fn unclassified_values_are_tolerated_by_default() {
		assert_eq!(super::check(&document(), false).unwrap(), 1);
	}

	#[test]
	fn unclassified_values_can_be_rejected() {
		assert!(matches!(super::check(&document(), true), Err(CliError::Unclassified(1))));
	}

	#[test]
	fn clean_documents_pass() {
		let document = json!({ "type": "Tombstone", "formerType": "Note", "deleted": "2024-06-04T17:09:20Z" });
		assert_eq!(super::check(&document, true).unwrap(), 0);
	}
}
