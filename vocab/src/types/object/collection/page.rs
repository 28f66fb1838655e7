use crate::{Capability, Entity, Kind, Property};
use super::PAGE_REF;

pub const COLLECTION_PAGE: &[Property] = &[
	Property::functional("partOf", &[Kind::Embedded(Capability::Collection), Kind::Embedded(Capability::Link), Kind::Iri]),
	Property::functional("next", PAGE_REF),
	Property::functional("prev", PAGE_REF),
];

pub const ORDERED_PAGE: &[Property] = &[
	Property::functional("startIndex", &[Kind::NonNegativeInteger]),
];

pub trait CollectionPage : super::Collection {
	crate::macros::getter! { part_of::partOf -> one }
	crate::macros::getter! { next -> one }
	crate::macros::getter! { prev -> one }
	crate::macros::getter! { start_index::startIndex -> one }
}

pub trait CollectionPageMut : super::CollectionMut {
	crate::macros::setter! { part_of::partOf -> one }
	crate::macros::setter! { next -> one }
	crate::macros::setter! { prev -> one }
	crate::macros::setter! { start_index::startIndex -> one }
}

impl CollectionPage for Entity {}
impl CollectionPageMut for Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{CollectionType, Node};

	#[test]
	fn building_a_page() {
		let page = Entity::new(CollectionType::OrderedCollectionPage)
			.set_part_of(Some(Node::iri("https://example.com/outbox").unwrap()))
			.set_start_index(Some(20u64.into()))
			.set_next(Some(Node::iri("https://example.com/outbox?page=3").unwrap()));
		assert_eq!(
			page.to_value().unwrap(),
			json!({
				"type": "OrderedCollectionPage",
				"partOf": "https://example.com/outbox",
				"next": "https://example.com/outbox?page=3",
				"startIndex": 20,
			})
		);
		assert!(page.prev().unwrap().is_empty());
	}
}
