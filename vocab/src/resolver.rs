use std::collections::BTreeMap;

use serde_json::Value;

use crate::{error::json_type_name, BaseType, Capability, Entity, Schema, TypeSchema, VocabError};

/// maps a type token to a fresh, empty entity having the requested capability
///
/// `None` only means "not this one": decoding moves on to the next token or capability
pub trait Resolver {
	fn resolve(&self, token: &str, capability: Capability) -> Option<Entity>;
}

/// every type this crate ships, as enabled by features
#[derive(Debug, Clone, Copy, Default)]
pub struct Vocabulary;

impl Resolver for Vocabulary {
	fn resolve(&self, token: &str, capability: Capability) -> Option<Entity> {
		let schema = BaseType::try_from(token).ok()?.schema();
		if !schema.is(capability) {
			return None;
		}
		Some(Entity::new(schema))
	}
}

/// the built-in vocabulary plus extra types, which take precedence over built-in ones of the
/// same name
#[derive(Debug, Default)]
pub struct Registry {
	extra: BTreeMap<&'static str, &'static TypeSchema>,
}

impl Registry {
	pub fn new() -> Self {
		Registry::default()
	}

	pub fn with(mut self, schema: &'static TypeSchema) -> Self {
		self.register(schema);
		self
	}

	pub fn register(&mut self, schema: &'static TypeSchema) -> Option<&'static TypeSchema> {
		self.extra.insert(schema.name, schema)
	}

	pub fn schemas(&self) -> impl Iterator<Item = &'static TypeSchema> + '_ {
		self.extra.values().copied()
	}
}

impl Resolver for Registry {
	fn resolve(&self, token: &str, capability: Capability) -> Option<Entity> {
		match self.extra.get(token) {
			Some(schema) if schema.is(capability) => Some(Entity::new(*schema)),
			Some(_) => None,
			None => Vocabulary.resolve(token, capability),
		}
	}
}

/// resolver backed by a plain function
pub struct Lookup<F>(pub F);

impl<F> Resolver for Lookup<F>
where
	F: Fn(&str, Capability) -> Option<Entity>,
{
	fn resolve(&self, token: &str, capability: Capability) -> Option<Entity> {
		(self.0)(token, capability)
	}
}

/// decode a whole document, which must be an Object or a Link
pub fn from_value(value: &Value, resolver: &dyn Resolver) -> Result<Entity, VocabError> {
	let Value::Object(map) = value else {
		return Err(VocabError::NotAnObject(json_type_name(value)));
	};
	let tokens : Vec<&str> = match map.get("type") {
		Some(Value::String(x)) => vec![x.as_str()],
		Some(Value::Array(x)) => x.iter().filter_map(Value::as_str).collect(),
		_ => Vec::new(),
	};
	for capability in [Capability::Object, Capability::Link] {
		for token in &tokens {
			if let Some(mut entity) = resolver.resolve(token, capability) {
				entity.read(map, resolver)?;
				return Ok(entity);
			}
		}
	}
	Err(VocabError::UnresolvedType(tokens.into_iter().map(str::to_string).collect()))
}

pub fn from_str(text: &str, resolver: &dyn Resolver) -> Result<Entity, VocabError> {
	let value : Value = serde_json::from_str(text)?;
	from_value(&value, resolver)
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Kind, Property};

	const EMOJI_PROPS: &[Property] = &[
		Property::functional("id", &[Kind::Iri]),
		Property::non_functional("name", &[Kind::String]),
		Property::functional("icon", &[Kind::Embedded(Capability::Image), Kind::Iri]),
	];
	static EMOJI: TypeSchema = TypeSchema::new("Emoji", &[Capability::Object], &[EMOJI_PROPS]);
	static SHADOW_NOTE: TypeSchema = TypeSchema::new("Note", &[Capability::Link], &[EMOJI_PROPS]);

	#[test]
	fn vocabulary_checks_capabilities() {
		assert!(Vocabulary.resolve("Note", Capability::Object).is_some());
		assert!(Vocabulary.resolve("Note", Capability::Link).is_none());
		assert!(Vocabulary.resolve("Person", Capability::Actor).is_some());
		assert!(Vocabulary.resolve("Image", Capability::Image).is_some());
		assert!(Vocabulary.resolve("Emoji", Capability::Object).is_none());
	}

	#[test]
	fn registry_extends_and_shadows() {
		let registry = Registry::new().with(&EMOJI).with(&SHADOW_NOTE);
		let emoji = registry.resolve("Emoji", Capability::Object).unwrap();
		assert_eq!(emoji.schema().name, "Emoji");
		assert!(registry.resolve("Note", Capability::Object).is_none());
		assert!(registry.resolve("Note", Capability::Link).is_some());
		assert!(registry.resolve("Person", Capability::Object).is_some());
	}

	#[test]
	fn extension_types_decode_nested() {
		let registry = Registry::new().with(&EMOJI);
		let note = from_value(&json!({
			"type": "Note",
			"tag": {
				"type": "Emoji",
				"name": ":blob:",
				"icon": { "type": "Image", "url": "https://example.com/blob.png" },
			},
		}), &registry).unwrap();
		let Some(crate::Slot::NonFunctional(tags)) = note.slot("tag") else { panic!("no tag slot") };
		let emoji = tags.get(0).entity().unwrap();
		assert_eq!(emoji.schema().name, "Emoji");
		assert!(emoji.slot("icon").unwrap().nodes()[0].is(Capability::Image));

		// without the registry the tag stays opaque
		let note = from_value(&json!({ "type": "Note", "tag": { "type": "Emoji" } }), &Vocabulary).unwrap();
		let Some(crate::Slot::NonFunctional(tags)) = note.slot("tag") else { panic!("no tag slot") };
		assert!(tags.get(0).is_unknown());
	}

	#[test]
	fn documents_must_be_typed_objects() {
		assert!(matches!(from_value(&json!([1, 2]), &Vocabulary), Err(VocabError::NotAnObject("array"))));
		assert!(matches!(
			from_value(&json!({ "type": "Banana" }), &Vocabulary),
			Err(VocabError::UnresolvedType(x)) if x == vec!["Banana".to_string()]
		));
		assert!(matches!(from_str("{ nope", &Vocabulary), Err(VocabError::Json(_))));
		let link = from_str(r#"{ "type": "Mention", "href": "https://example.com/alice" }"#, &Vocabulary).unwrap();
		assert_eq!(link.identifier(), Some("https://example.com/alice"));
	}

	#[test]
	fn lookup_wraps_functions() {
		let only_notes = Lookup(|token: &str, cap: Capability| match (token, cap) {
			("Note", Capability::Object) => Some(Entity::new(crate::ObjectType::Note)),
			_ => None,
		});
		assert!(from_value(&json!({ "type": ["Article", "Note"] }), &only_notes).is_ok());
		assert!(from_value(&json!({ "type": "Article" }), &only_notes).is_err());
	}
}
