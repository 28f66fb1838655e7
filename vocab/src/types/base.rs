use crate::{codec::LangMap, Capability, Entity, Field, FieldErr, Kind, LinkType, ObjectType, Property, Slot, TypeSchema};

crate::macros::vocabulary! {
	pub enum BaseType : [] [] {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

/// properties every object and link carries
pub const BASE: &[Property] = &[
	Property::functional("id", &[Kind::Iri]),
	Property::non_functional("name", &[Kind::String, Kind::LangString]).with_language_map(),
	Property::functional("mediaType", &[Kind::MimeType]),
	Property::non_functional("preview", &[Kind::Embedded(Capability::Link), Kind::Embedded(Capability::Object), Kind::Iri]),
];

pub trait Base {
	fn type_schema(&self) -> &'static TypeSchema;
	fn slot(&self, key: &str) -> Option<&Slot>;
	fn lang_map(&self, key: &str) -> Option<&LangMap>;

	fn base_type(&self) -> Field<BaseType> {
		BaseType::try_from(self.type_schema().name).map_err(|_| FieldErr("type"))
	}

	crate::macros::getter! { id -> one }
	// plain text, never html
	crate::macros::getter! { name -> many }
	crate::macros::getter! { name_map::name -> lang }
	// on links the type of the referenced resource, on objects the type of `content`
	crate::macros::getter! { media_type::mediaType -> one }
	crate::macros::getter! { preview -> many }
}

pub trait BaseMut : Sized {
	fn slot_mut(&mut self, key: &str) -> Option<&mut Slot>;
	fn set_lang_map(&mut self, key: &str, val: Option<LangMap>) -> Field<()>;

	crate::macros::setter! { id -> one }
	crate::macros::setter! { name -> many }
	crate::macros::setter! { name_map::name -> lang }
	crate::macros::setter! { media_type::mediaType -> one }
	crate::macros::setter! { preview -> many }
}

impl Base for Entity {
	fn type_schema(&self) -> &'static TypeSchema {
		self.schema()
	}

	fn slot(&self, key: &str) -> Option<&Slot> {
		Entity::slot(self, key)
	}

	fn lang_map(&self, key: &str) -> Option<&LangMap> {
		Entity::lang_map(self, key)
	}
}

impl BaseMut for Entity {
	fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
		Entity::slot_mut(self, key)
	}

	fn set_lang_map(&mut self, key: &str, val: Option<LangMap>) -> Field<()> {
		Entity::set_lang_map(self, key, val)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Node, Schema};

	#[test]
	fn base_type_follows_schema() {
		let note = Entity::new(ObjectType::Note);
		assert_eq!(note.base_type().unwrap(), BaseType::Object(ObjectType::Note));
		let mention = Entity::new(LinkType::Mention);
		assert_eq!(mention.base_type().unwrap(), BaseType::Link(LinkType::Mention));
	}

	#[test]
	fn every_token_has_a_schema_named_after_it() {
		for token in BaseType::all() {
			assert_eq!(token.schema().name, token.as_ref());
			assert_eq!(BaseType::try_from(token.as_ref()).unwrap(), token);
		}
	}

	#[test]
	fn builder_setters_fill_slots() {
		let mut names = LangMap::new();
		names.insert("en".to_string(), "hello".to_string());
		let note = Entity::new(ObjectType::Note)
			.set_id(Some(Node::iri("https://example.com/1").unwrap()))
			.set_name(Some("hello".into()))
			.set_name_map(Some(names));
		assert_eq!(note.id().unwrap().get().and_then(Node::id), Some("https://example.com/1"));
		assert_eq!(note.name().unwrap().len(), 1);
		assert_eq!(
			note.to_value().unwrap(),
			json!({
				"type": "Note",
				"id": "https://example.com/1",
				"name": "hello",
				"nameMap": { "en": "hello" },
			})
		);

		let note = note.set_id(None);
		assert!(note.id().unwrap().is_empty());
	}
}
