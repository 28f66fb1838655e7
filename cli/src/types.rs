use apvocab::{BaseType, Capability, Schema};

/// every known type token with the capabilities its schema carries
pub fn types(filter: Option<Capability>) -> Vec<String> {
	BaseType::all()
		.into_iter()
		.map(|t| t.schema())
		.filter(|schema| filter.map_or(true, |cap| schema.is(cap)))
		.map(|schema| {
			let capabilities = schema.capabilities
				.iter()
				.map(|x| x.to_string())
				.collect::<Vec<_>>()
				.join(", ");
			format!("{}: {capabilities}", schema.name)
		})
		.collect()
}

#[cfg(test)]
mod test {
	use apvocab::Capability;

	#[test]
	fn filtered_by_capability() {
		let pages = super::types(Some(Capability::CollectionPage));
		assert!(pages.contains(&"CollectionPage: Object, Collection, CollectionPage".to_string()));
		assert!(pages.iter().all(|x| x.contains("CollectionPage")));
		assert!(!pages.iter().any(|x| x.starts_with("Note:")));
	}

	#[test]
	fn everything_is_listed_once() {
		let all = super::types(None);
		assert!(all.contains(&"Link: Link".to_string()));
		assert!(all.contains(&"EmojiReact: Object, Activity".to_string()));
		let mut dedup = all.clone();
		dedup.sort();
		dedup.dedup();
		assert_eq!(dedup.len(), all.len());
	}
}
