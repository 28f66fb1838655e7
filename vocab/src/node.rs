use serde_json::Value;

use crate::{
	codec::{AnyUri, Codec, Iri, LangMap, MimeType},
	Capability, Entity, Kind, Property, Resolver, VocabError,
};

/// the value of one occurrence of one property: exactly one alternative, or the raw value when
/// nothing matched
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Embedded(Capability, Box<Entity>),
	Iri(Iri),
	String(String),
	LangString(LangMap),
	Float(f64),
	DateTime(chrono::DateTime<chrono::FixedOffset>),
	Duration(chrono::TimeDelta),
	AnyUri(AnyUri),
	MimeType(MimeType),
	Boolean(bool),
	NonNegativeInteger(u64),
	Unknown(Value),
}

impl Node {
	/// classify one wire value against the property's alternatives
	///
	/// mappings carrying `type` are resolved capability by capability, trying every token under
	/// each one before moving on; the first hit decodes the whole mapping. anything else goes
	/// through leaf codecs in declared order. values nothing accepts are kept as [Node::Unknown]
	pub fn decode(property: &Property, value: &Value, resolver: &dyn Resolver) -> Result<Self, VocabError> {
		let Value::Object(map) = value else {
			for kind in property.kinds.iter().filter(|k| !k.is_embedded()) {
				if let Ok(node) = kind.decode(value) {
					return Ok(node);
				}
			}
			tracing::debug!("no alternative of '{}' accepts {value}, keeping it verbatim", property.key);
			return Ok(Node::Unknown(value.clone()));
		};

		if !property.embeds() {
			// only leaf codecs taking mappings can save this, e.g. an inline language map
			for kind in property.kinds {
				if let Ok(node) = kind.decode(value) {
					return Ok(node);
				}
			}
			return Err(VocabError::UnexpectedMap(value.clone()));
		}

		let Some(types) = map.get("type") else {
			tracing::debug!("untyped object under '{}', keeping it verbatim", property.key);
			return Ok(Node::Unknown(value.clone()));
		};

		let tokens = type_tokens(types);
		for capability in property.capabilities() {
			for token in &tokens {
				if let Some(mut entity) = resolver.resolve(token, capability) {
					entity.read(map, resolver)?;
					return Ok(Node::Embedded(capability, Box::new(entity)));
				}
			}
		}

		tracing::debug!("no type among {tokens:?} resolves for '{}', keeping it verbatim", property.key);
		Ok(Node::Unknown(value.clone()))
	}

	pub fn encode(&self) -> Result<Value, VocabError> {
		match self {
			Node::Embedded(_, entity) => Ok(Value::Object(entity.encode()?)),
			Node::Iri(x) => x.encode(),
			Node::String(x) => x.encode(),
			Node::LangString(x) => x.encode(),
			Node::Float(x) => x.encode(),
			Node::DateTime(x) => x.encode(),
			Node::Duration(x) => x.encode(),
			Node::AnyUri(x) => x.encode(),
			Node::MimeType(x) => x.encode(),
			Node::Boolean(x) => x.encode(),
			Node::NonNegativeInteger(x) => x.encode(),
			Node::Unknown(x) => Ok(x.clone()),
		}
	}

	/// which alternative this node holds, none for unknown values
	pub fn kind(&self) -> Option<Kind> {
		match self {
			Node::Embedded(cap, _) => Some(Kind::Embedded(*cap)),
			Node::Iri(_) => Some(Kind::Iri),
			Node::String(_) => Some(Kind::String),
			Node::LangString(_) => Some(Kind::LangString),
			Node::Float(_) => Some(Kind::Float),
			Node::DateTime(_) => Some(Kind::DateTime),
			Node::Duration(_) => Some(Kind::Duration),
			Node::AnyUri(_) => Some(Kind::AnyUri),
			Node::MimeType(_) => Some(Kind::MimeType),
			Node::Boolean(_) => Some(Kind::Boolean),
			Node::NonNegativeInteger(_) => Some(Kind::NonNegativeInteger),
			Node::Unknown(_) => None,
		}
	}

	pub fn iri(value: &str) -> Result<Self, VocabError> {
		Iri::parse(value)
			.map(Node::Iri)
			.map_err(|e| VocabError::Unencodable { kind: Iri::KIND, reason: e.to_string() })
	}

	/// embed an entity under the Object capability
	pub fn object(entity: Entity) -> Self {
		Node::Embedded(Capability::Object, Box::new(entity))
	}

	/// embed an entity under the Link capability
	pub fn link(entity: Entity) -> Self {
		Node::Embedded(Capability::Link, Box::new(entity))
	}

	pub fn embedded(capability: Capability, entity: Entity) -> Self {
		Node::Embedded(capability, Box::new(entity))
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Node::Iri(_))
	}

	pub fn as_iri(&self) -> Option<&Iri> {
		match self {
			Node::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_embedded(&self) -> bool {
		matches!(self, Node::Embedded(..))
	}

	/// whether this is an embedded entity whose type has the given capability
	pub fn is(&self, capability: Capability) -> bool {
		match self {
			Node::Embedded(_, entity) => entity.schema().is(capability),
			_ => false,
		}
	}

	pub fn entity(&self) -> Option<&Entity> {
		match self {
			Node::Embedded(_, x) => Some(x),
			_ => None,
		}
	}

	pub fn entity_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Node::Embedded(_, x) => Some(x),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Node::String(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_lang_string(&self) -> Option<&LangMap> {
		match self {
			Node::LangString(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Node::Float(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_date_time(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		match self {
			Node::DateTime(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<chrono::TimeDelta> {
		match self {
			Node::Duration(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_any_uri(&self) -> Option<&AnyUri> {
		match self {
			Node::AnyUri(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_mime_type(&self) -> Option<&MimeType> {
		match self {
			Node::MimeType(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Node::Boolean(x) => Some(*x),
			_ => None,
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Node::NonNegativeInteger(x) => Some(*x),
			_ => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Node::Unknown(_))
	}

	pub fn as_unknown(&self) -> Option<&Value> {
		match self {
			Node::Unknown(x) => Some(x),
			_ => None,
		}
	}

	/// the identifier this node refers to: the reference itself, or an embedded entity's id (href
	/// for links)
	pub fn id(&self) -> Option<&str> {
		match self {
			Node::Iri(x) => Some(x.as_str()),
			Node::AnyUri(x) => Some(x.as_str()),
			Node::Embedded(_, entity) => entity.identifier(),
			_ => None,
		}
	}
}

fn type_tokens(value: &Value) -> Vec<&str> {
	match value {
		Value::String(x) => vec![x.as_str()],
		Value::Array(x) => x.iter().filter_map(Value::as_str).collect(),
		_ => Vec::new(),
	}
}

impl From<Iri> for Node {
	fn from(value: Iri) -> Self {
		Node::Iri(value)
	}
}

impl From<String> for Node {
	fn from(value: String) -> Self {
		Node::String(value)
	}
}

impl From<&str> for Node {
	fn from(value: &str) -> Self {
		Node::String(value.to_string())
	}
}

impl From<LangMap> for Node {
	fn from(value: LangMap) -> Self {
		Node::LangString(value)
	}
}

impl From<f64> for Node {
	fn from(value: f64) -> Self {
		Node::Float(value)
	}
}

impl From<chrono::DateTime<chrono::FixedOffset>> for Node {
	fn from(value: chrono::DateTime<chrono::FixedOffset>) -> Self {
		Node::DateTime(value)
	}
}

impl From<chrono::DateTime<chrono::Utc>> for Node {
	fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
		Node::DateTime(value.fixed_offset())
	}
}

impl From<chrono::TimeDelta> for Node {
	fn from(value: chrono::TimeDelta) -> Self {
		Node::Duration(value)
	}
}

impl From<AnyUri> for Node {
	fn from(value: AnyUri) -> Self {
		Node::AnyUri(value)
	}
}

impl From<MimeType> for Node {
	fn from(value: MimeType) -> Self {
		Node::MimeType(value)
	}
}

impl From<bool> for Node {
	fn from(value: bool) -> Self {
		Node::Boolean(value)
	}
}

impl From<u64> for Node {
	fn from(value: u64) -> Self {
		Node::NonNegativeInteger(value)
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Lookup, Vocabulary};

	const ACTOR: Property = Property::non_functional("actor", &[
		Kind::Embedded(Capability::Object),
		Kind::Embedded(Capability::Link),
		Kind::Iri,
	]);
	const HREF_FIRST: Property = Property::functional("preview", &[
		Kind::Embedded(Capability::Link),
		Kind::Embedded(Capability::Object),
	]);
	const NAME: Property = Property::non_functional("name", &[Kind::String, Kind::LangString]);
	const WHEN: Property = Property::functional("published", &[Kind::DateTime]);
	const SIZE: Property = Property::functional("width", &[Kind::NonNegativeInteger]);

	#[test]
	fn bare_reference_is_iri() {
		let node = Node::decode(&ACTOR, &json!("https://example.com/alice"), &Vocabulary).unwrap();
		assert!(node.is_iri());
		assert_eq!(node.id(), Some("https://example.com/alice"));
		assert_eq!(node.encode().unwrap(), json!("https://example.com/alice"));
	}

	#[test]
	fn typed_mapping_is_embedded() {
		let value = json!({ "type": "Person", "id": "https://example.com/alice", "name": "alice" });
		let node = Node::decode(&ACTOR, &value, &Vocabulary).unwrap();
		assert!(node.is(Capability::Actor));
		assert!(matches!(node, Node::Embedded(Capability::Object, _)));
		assert_eq!(node.id(), Some("https://example.com/alice"));
		assert_eq!(node.encode().unwrap(), value);
	}

	#[test]
	fn capability_order_beats_token_order() {
		// "Mention" only resolves as a link, "Note" only as an object: whichever capability the
		// property lists first wins, no matter where the token sits
		let value = json!({ "type": ["Mention", "Note"], "href": "https://example.com/x" });
		for _ in 0..3 {
			let node = Node::decode(&ACTOR, &value, &Vocabulary).unwrap();
			assert!(matches!(&node, Node::Embedded(Capability::Object, e) if e.schema().name == "Note"));
			let node = Node::decode(&HREF_FIRST, &value, &Vocabulary).unwrap();
			assert!(matches!(&node, Node::Embedded(Capability::Link, e) if e.schema().name == "Mention"));
		}
	}

	#[test]
	fn injected_resolver_is_consulted() {
		let nothing = Lookup(|_: &str, _: Capability| None::<Entity>);
		let value = json!({ "type": "Person", "id": "https://example.com/alice" });
		let node = Node::decode(&ACTOR, &value, &nothing).unwrap();
		assert_eq!(node.as_unknown(), Some(&value));
	}

	#[test]
	fn untyped_mapping_is_unknown() {
		let value = json!({ "id": "https://example.com/alice" });
		let node = Node::decode(&ACTOR, &value, &Vocabulary).unwrap();
		assert!(node.is_unknown());
		assert_eq!(node.encode().unwrap(), value);
	}

	#[test]
	fn unaccepted_scalar_is_kept_verbatim() {
		let node = Node::decode(&ACTOR, &json!(42), &Vocabulary).unwrap();
		assert_eq!(node.as_unknown(), Some(&json!(42)));
		let node = Node::decode(&WHEN, &json!("yesterday"), &Vocabulary).unwrap();
		assert_eq!(node.encode().unwrap(), json!("yesterday"));
		let node = Node::decode(&SIZE, &json!(-3), &Vocabulary).unwrap();
		assert!(node.is_unknown());
	}

	#[test]
	fn first_leaf_alternative_wins() {
		let node = Node::decode(&NAME, &json!("https://example.com"), &Vocabulary).unwrap();
		assert_eq!(node.as_str(), Some("https://example.com"));
	}

	#[test]
	fn mapping_for_leaf_property() {
		let node = Node::decode(&NAME, &json!({ "en": "hello", "it": "ciao" }), &Vocabulary).unwrap();
		assert_eq!(node.as_lang_string().and_then(|m| m.get("it")).map(String::as_str), Some("ciao"));

		let err = Node::decode(&WHEN, &json!({ "type": "Note" }), &Vocabulary).unwrap_err();
		assert!(matches!(err, VocabError::UnexpectedMap(_)));
	}

	#[test]
	fn nested_failures_propagate() {
		// resolved as a Note, whose own `published` cannot hold a mapping
		let value = json!({ "type": "Note", "published": { "en": "today" } });
		let err = Node::decode(&ACTOR, &value, &Vocabulary).unwrap_err();
		assert!(matches!(err.root(), VocabError::UnexpectedMap(_)));
	}

	#[test]
	fn dates_reencode_canonically() {
		let node = Node::decode(&WHEN, &json!("2024-06-04T17:09:20+00:00"), &Vocabulary).unwrap();
		assert!(node.as_date_time().is_some());
		assert_eq!(node.encode().unwrap(), json!("2024-06-04T17:09:20Z"));
	}
}
