use crate::{codec::{AnyUri, Codec, Iri, LangMap, MimeType}, Node, ShapeErr};

crate::macros::strenum! {
	pub enum Capability {
		Object,
		Link,
		Activity,
		IntransitiveActivity,
		Question,
		Actor,
		Collection,
		OrderedCollection,
		CollectionPage,
		OrderedCollectionPage,
		Document,
		Image,
		Place,
		Profile,
		Relationship,
		Tombstone;
	};
}

/// one alternative shape a property value may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// a typed sub-object resolved under the given capability
	Embedded(Capability),
	Iri,
	String,
	LangString,
	Float,
	DateTime,
	Duration,
	AnyUri,
	MimeType,
	Boolean,
	NonNegativeInteger,
}

impl Kind {
	pub fn is_embedded(&self) -> bool {
		matches!(self, Kind::Embedded(_))
	}

	/// run this kind's leaf codec; embedded kinds never match here, they go through a resolver
	pub fn decode(&self, value: &serde_json::Value) -> Result<Node, ShapeErr> {
		match self {
			Kind::Embedded(_) => Err(ShapeErr("embedded")),
			Kind::Iri => Iri::decode(value).map(Node::Iri),
			Kind::String => String::decode(value).map(Node::String),
			Kind::LangString => LangMap::decode(value).map(Node::LangString),
			Kind::Float => f64::decode(value).map(Node::Float),
			Kind::DateTime => chrono::DateTime::<chrono::FixedOffset>::decode(value).map(Node::DateTime),
			Kind::Duration => chrono::TimeDelta::decode(value).map(Node::Duration),
			Kind::AnyUri => AnyUri::decode(value).map(Node::AnyUri),
			Kind::MimeType => MimeType::decode(value).map(Node::MimeType),
			Kind::Boolean => bool::decode(value).map(Node::Boolean),
			Kind::NonNegativeInteger => u64::decode(value).map(Node::NonNegativeInteger),
		}
	}
}

impl std::fmt::Display for Kind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Kind::Embedded(cap) => write!(f, "{cap}"),
			Kind::Iri => f.write_str(Iri::KIND),
			Kind::String => f.write_str(String::KIND),
			Kind::LangString => f.write_str(LangMap::KIND),
			Kind::Float => f.write_str(f64::KIND),
			Kind::DateTime => f.write_str(chrono::DateTime::<chrono::FixedOffset>::KIND),
			Kind::Duration => f.write_str(chrono::TimeDelta::KIND),
			Kind::AnyUri => f.write_str(AnyUri::KIND),
			Kind::MimeType => f.write_str(MimeType::KIND),
			Kind::Boolean => f.write_str(bool::KIND),
			Kind::NonNegativeInteger => f.write_str(u64::KIND),
		}
	}
}

/// a declared property: wire key, cardinality, alternatives in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
	pub key: &'static str,
	pub functional: bool,
	pub kinds: &'static [Kind],
	pub language_map: bool,
}

impl Property {
	pub const fn functional(key: &'static str, kinds: &'static [Kind]) -> Self {
		Property { key, functional: true, kinds, language_map: false }
	}

	pub const fn non_functional(key: &'static str, kinds: &'static [Kind]) -> Self {
		Property { key, functional: false, kinds, language_map: false }
	}

	/// also carries a `<key>Map` side channel
	pub const fn with_language_map(mut self) -> Self {
		self.language_map = true;
		self
	}

	pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
		self.kinds.iter().filter_map(|k| match k {
			Kind::Embedded(cap) => Some(*cap),
			_ => None,
		})
	}

	pub fn embeds(&self) -> bool {
		self.kinds.iter().any(Kind::is_embedded)
	}

	/// whether the node's shape is one of this property's alternatives; unknown values always are
	pub fn admits(&self, node: &Node) -> bool {
		match node {
			Node::Unknown(_) => true,
			Node::Embedded(_, entity) => self.capabilities().any(|cap| entity.schema().is(cap)),
			_ => node.kind().is_some_and(|k| self.kinds.contains(&k)),
		}
	}
}

/// static description of one vocabulary type
#[derive(Debug)]
pub struct TypeSchema {
	pub name: &'static str,
	pub capabilities: &'static [Capability],
	properties: &'static [&'static [Property]],
}

impl TypeSchema {
	pub const fn new(
		name: &'static str,
		capabilities: &'static [Capability],
		properties: &'static [&'static [Property]],
	) -> Self {
		TypeSchema { name, capabilities, properties }
	}

	pub fn is(&self, capability: Capability) -> bool {
		self.capabilities.contains(&capability)
	}

	/// every declared property, in declaration order
	pub fn properties(&self) -> impl Iterator<Item = &'static Property> {
		self.properties.iter().flat_map(|group| group.iter())
	}

	pub fn property(&self, key: &str) -> Option<&'static Property> {
		self.properties().find(|p| p.key == key)
	}

	/// the property owning a `<key>Map` companion, if any
	pub fn language_map_owner(&self, key: &str) -> Option<&'static Property> {
		let base = key.strip_suffix("Map")?;
		self.property(base).filter(|p| p.language_map)
	}
}

impl PartialEq for TypeSchema {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other) || self.name == other.name
	}
}

pub trait Schema {
	fn schema(&self) -> &'static TypeSchema;
}

impl Schema for &'static TypeSchema {
	fn schema(&self) -> &'static TypeSchema {
		self
	}
}
