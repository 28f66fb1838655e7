use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
	codec::LangMap,
	FieldErr, PartialEncode, Resolver, Schema, Slot, TypeSchema, VocabError, Vocabulary,
};

/// an instance of some vocabulary type
///
/// holds one slot per property its schema declares, the `type` tokens as found on the wire,
/// language map side channels and every key the schema does not know about. each wire key lands
/// in exactly one of these
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
	schema: &'static TypeSchema,
	type_tokens: Vec<Value>,
	slots: Vec<Slot>,
	lang_maps: BTreeMap<&'static str, LangMap>,
	unknown: Map<String, Value>,
}

impl Entity {
	pub fn new(schema: impl Schema) -> Self {
		let schema = schema.schema();
		Entity {
			schema,
			type_tokens: Vec::new(),
			slots: schema.properties().map(Slot::new).collect(),
			lang_maps: BTreeMap::new(),
			unknown: Map::new(),
		}
	}

	pub fn decode(schema: impl Schema, map: &Map<String, Value>, resolver: &dyn Resolver) -> Result<Self, VocabError> {
		let mut entity = Entity::new(schema);
		entity.read(map, resolver)?;
		Ok(entity)
	}

	/// route every key of `map` into this entity
	pub fn read(&mut self, map: &Map<String, Value>, resolver: &dyn Resolver) -> Result<(), VocabError> {
		for (key, value) in map {
			match key.as_str() {
				"@context" => continue,
				"type" => self.type_tokens = match value {
					Value::Array(tokens) => tokens.clone(),
					token => vec![token.clone()],
				},
				_ => if let Some(i) = self.position(key) {
					let slot = &mut self.slots[i];
					slot.read(value, resolver).map_err(|e| e.within(slot.property().key))?;
				} else if let (Some(property), Value::Object(tags)) = (self.schema.language_map_owner(key), value) {
					let texts = tags
						.iter()
						.filter_map(|(tag, text)| Some((tag.clone(), text.as_str()?.to_string())))
						.collect();
					self.lang_maps.insert(property.key, texts);
				} else {
					tracing::debug!("'{key}' is not a {} property, keeping it as extension", self.schema.name);
					self.unknown.insert(key.clone(), value.clone());
				},
			}
		}
		Ok(())
	}

	/// flat wire mapping for this entity
	///
	/// on failure the mapping built up to the failing property is handed back with the error
	pub fn encode(&self) -> Result<Map<String, Value>, PartialEncode> {
		let mut out = self.unknown.clone();

		let mut tokens = self.type_tokens.clone();
		if !tokens.iter().any(|t| t.as_str() == Some(self.schema.name)) {
			tokens.push(Value::String(self.schema.name.to_string()));
		}
		let tokens = match tokens.len() {
			1 => tokens.remove(0),
			_ => Value::Array(tokens),
		};
		out.insert("type".to_string(), tokens);

		for slot in &self.slots {
			let key = slot.property().key;
			match slot.encode() {
				Ok(Some(value)) => { out.insert(key.to_string(), value); },
				Ok(None) => {},
				Err(e) => return Err(PartialEncode { partial: out, error: e.within(key) }),
			}
		}

		for (key, texts) in &self.lang_maps {
			let texts = texts
				.iter()
				.map(|(tag, text)| (tag.clone(), Value::String(text.clone())))
				.collect();
			out.insert(format!("{key}Map"), Value::Object(texts));
		}

		Ok(out)
	}

	pub fn to_value(&self) -> Result<Value, VocabError> {
		Ok(Value::Object(self.encode()?))
	}

	pub fn schema(&self) -> &'static TypeSchema {
		self.schema
	}

	fn position(&self, key: &str) -> Option<usize> {
		self.slots.iter().position(|s| s.property().key == key)
	}

	pub fn slot(&self, key: &str) -> Option<&Slot> {
		self.slots.iter().find(|s| s.property().key == key)
	}

	pub fn slot_mut(&mut self, key: &str) -> Option<&mut Slot> {
		self.slots.iter_mut().find(|s| s.property().key == key)
	}

	/// all slots in declared order
	pub fn slots(&self) -> impl Iterator<Item = &Slot> {
		self.slots.iter()
	}

	/// id of this entity, or href when it is a link
	pub fn identifier(&self) -> Option<&str> {
		["id", "href"].into_iter().find_map(|key| match self.slot(key)? {
			Slot::Functional(x) => x.get()?.id(),
			Slot::NonFunctional(x) => x.first()?.id(),
		})
	}

	pub fn type_tokens(&self) -> &[Value] {
		&self.type_tokens
	}

	/// tokens that are strings, in wire order
	pub fn type_names(&self) -> Vec<&str> {
		self.type_tokens.iter().filter_map(Value::as_str).collect()
	}

	pub fn set_type_tokens(&mut self, tokens: Vec<Value>) {
		self.type_tokens = tokens;
	}

	pub fn lang_map(&self, key: &str) -> Option<&LangMap> {
		self.lang_maps.get(key)
	}

	pub fn lang_maps(&self) -> impl Iterator<Item = (&'static str, &LangMap)> {
		self.lang_maps.iter().map(|(k, v)| (*k, v))
	}

	/// set or drop the language map of `key`, which must declare one
	pub fn set_lang_map(&mut self, key: &str, texts: Option<LangMap>) -> Result<(), FieldErr> {
		let property = self.schema
			.property(key)
			.filter(|p| p.language_map)
			.ok_or(FieldErr("language map"))?;
		// a non-mapping `<key>Map` read from the wire sits among extensions
		self.unknown.remove(&format!("{}Map", property.key));
		match texts {
			Some(texts) => { self.lang_maps.insert(property.key, texts); },
			None => { self.lang_maps.remove(property.key); },
		}
		Ok(())
	}

	pub fn extension(&self, key: &str) -> Option<&Value> {
		self.unknown.get(key)
	}

	pub fn extensions(&self) -> &Map<String, Value> {
		&self.unknown
	}

	/// store a key the schema does not declare, returning what it replaced
	pub fn set_extension(&mut self, key: &str, value: Value) -> Result<Option<Value>, VocabError> {
		if self.is_reserved(key) {
			return Err(VocabError::ReservedKey(key.to_string()));
		}
		Ok(self.unknown.insert(key.to_string(), value))
	}

	pub fn remove_extension(&mut self, key: &str) -> Option<Value> {
		self.unknown.remove(key)
	}

	fn is_reserved(&self, key: &str) -> bool {
		key == "type"
			|| key == "@context"
			|| self.schema.property(key).is_some()
			|| self.schema.language_map_owner(key).is_some()
	}
}

impl serde::Serialize for Entity {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		use serde::ser::Error;
		self.encode()
			.map_err(S::Error::custom)?
			.serialize(serializer)
	}
}

impl<'de> serde::Deserialize<'de> for Entity {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		use serde::de::Error;
		let value = Value::deserialize(deserializer)?;
		crate::from_value(&value, &Vocabulary).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Node, ObjectType};

	fn object(value: Value) -> Entity {
		let Value::Object(map) = value else { panic!("not an object") };
		Entity::decode(ObjectType::Note, &map, &Vocabulary).unwrap()
	}

	#[test]
	fn extension_keys_never_reach_slots() {
		let note = object(json!({ "id": "https://example.com/1", "xCustom": 42 }));
		assert_eq!(note.identifier(), Some("https://example.com/1"));
		assert_eq!(note.extension("xCustom"), Some(&json!(42)));
		assert!(note.extension("id").is_none());
		assert!(note.slot("xCustom").is_none());

		let out = note.encode().unwrap();
		assert_eq!(out.get("id"), Some(&json!("https://example.com/1")));
		assert_eq!(out.get("xCustom"), Some(&json!(42)));
	}

	#[test]
	fn context_is_dropped() {
		let note = object(json!({
			"@context": "https://www.w3.org/ns/activitystreams",
			"type": "Note",
		}));
		assert!(note.extensions().is_empty());
		assert!(!note.encode().unwrap().contains_key("@context"));
	}

	#[test]
	fn type_defaults_to_schema_name() {
		let note = Entity::new(ObjectType::Note);
		assert_eq!(note.to_value().unwrap(), json!({ "type": "Note" }));

		let note = object(json!({ "type": "Note" }));
		assert_eq!(note.encode().unwrap().get("type"), Some(&json!("Note")));

		let note = object(json!({ "type": ["Note", "https://example.com/ns#Draft"] }));
		assert_eq!(note.encode().unwrap().get("type"), Some(&json!(["Note", "https://example.com/ns#Draft"])));

		let mut note = Entity::new(ObjectType::Note);
		note.set_type_tokens(vec![json!("Draft")]);
		assert_eq!(note.encode().unwrap().get("type"), Some(&json!(["Draft", "Note"])));
	}

	#[test]
	fn language_maps_are_side_channels() {
		let note = object(json!({
			"content": "hello",
			"contentMap": { "en": "hello", "it": "ciao", "xx": 3 },
			"idMap": { "en": "not a thing" },
		}));
		let content = note.lang_map("content").unwrap();
		assert_eq!(content.len(), 2);
		assert_eq!(content.get("it").map(String::as_str), Some("ciao"));
		assert_eq!(note.extension("idMap"), Some(&json!({ "en": "not a thing" })));

		let out = note.encode().unwrap();
		assert_eq!(out.get("content"), Some(&json!("hello")));
		assert_eq!(out.get("contentMap"), Some(&json!({ "en": "hello", "it": "ciao" })));
	}

	#[test]
	fn empty_language_map_is_still_emitted() {
		let mut note = Entity::new(ObjectType::Note);
		note.set_lang_map("summary", Some(LangMap::new())).unwrap();
		assert_eq!(note.encode().unwrap().get("summaryMap"), Some(&json!({})));
		assert!(note.set_lang_map("published", Some(LangMap::new())).is_err());
	}

	#[test]
	fn setting_a_language_map_replaces_a_malformed_one() {
		let mut note = object(json!({ "summaryMap": "not a map" }));
		assert_eq!(note.extension("summaryMap"), Some(&json!("not a map")));
		note.set_lang_map("summary", Some(LangMap::from([("en".to_string(), "hi".to_string())]))).unwrap();
		assert!(note.extension("summaryMap").is_none());
		assert_eq!(note.encode().unwrap().get("summaryMap"), Some(&json!({ "en": "hi" })));

		let mut note = object(json!({ "contentMap": 12 }));
		note.set_lang_map("content", None).unwrap();
		assert!(note.encode().unwrap().get("contentMap").is_none());
	}

	#[test]
	fn entities_can_be_read_across_threads() {
		fn shared<T: Send + Sync>() {}
		shared::<Entity>();
		let note = object(json!({ "id": "https://example.com/1" }));
		let value = std::thread::scope(|s| s.spawn(|| note.to_value().unwrap()).join().unwrap());
		assert_eq!(value, note.to_value().unwrap());
	}

	#[test]
	fn failing_property_returns_partial_mapping() {
		let mut place = Entity::new(ObjectType::Place);
		place.set_extension("xCustom", json!(true)).unwrap();
		if let Some(Slot::Functional(id)) = place.slot_mut("id") {
			id.set(Node::iri("https://example.com/here").unwrap());
		}
		if let Some(Slot::Functional(latitude)) = place.slot_mut("latitude") {
			latitude.set(Node::Float(f64::NAN));
		}
		let err = place.encode().unwrap_err();
		assert!(matches!(err.error.root(), VocabError::Unencodable { .. }));
		assert_eq!(err.partial.get("id"), Some(&json!("https://example.com/here")));
		assert_eq!(err.partial.get("type"), Some(&json!("Place")));
		assert_eq!(err.partial.get("xCustom"), Some(&json!(true)));
		assert!(!err.partial.contains_key("latitude"));
	}

	#[test]
	fn reserved_keys_are_not_extensions() {
		let mut note = Entity::new(ObjectType::Note);
		for key in ["type", "@context", "id", "content", "contentMap"] {
			assert!(matches!(note.set_extension(key, json!(1)), Err(VocabError::ReservedKey(_))), "{key}");
		}
		assert_eq!(note.set_extension("xCustom", json!(1)).unwrap(), None);
		assert_eq!(note.set_extension("xCustom", json!(2)).unwrap(), Some(json!(1)));
		assert_eq!(note.remove_extension("xCustom"), Some(json!(2)));
	}

	#[test]
	fn unknown_values_pass_through() {
		let value = json!({
			"type": "Note",
			"attributedTo": { "name": "no type here" },
			"published": "some day",
			"tag": [1, "https://example.com/tag", { "type": "Hashtag-ish" }],
		});
		let note = object(value.clone());
		assert_eq!(note.to_value().unwrap(), value);
	}

	#[test]
	fn serde_goes_through_the_vocabulary() {
		let value = json!({ "type": "Note", "id": "https://example.com/1", "content": "hi" });
		let note : Entity = serde_json::from_value(value.clone()).unwrap();
		assert_eq!(note.schema().name, "Note");
		assert_eq!(serde_json::to_value(&note).unwrap(), value);
	}
}
