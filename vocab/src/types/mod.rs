pub mod base;
pub mod link;
pub mod object;

use crate::{Capability, Kind};

/// an object, a link, or a reference to either
pub(crate) const ANY: &[Kind] = &[
	Kind::Embedded(Capability::Object),
	Kind::Embedded(Capability::Link),
	Kind::Iri,
];

/// natural language text, plain or keyed by language
pub(crate) const TEXT: &[Kind] = &[Kind::String, Kind::LangString];
