use crate::{types::ANY, Capability, Entity, Kind, Property};

pub const RELATIONSHIP: &[Property] = &[
	Property::functional("subject", ANY),
	Property::non_functional("object", ANY),
	Property::non_functional("relationship", &[Kind::Embedded(Capability::Object), Kind::Iri]),
];

pub trait Relationship : super::Object {
	crate::macros::getter! { subject -> one }
	crate::macros::getter! { relationship_object::object -> many }
	crate::macros::getter! { relationship -> many }
}

pub trait RelationshipMut : super::ObjectMut {
	crate::macros::setter! { subject -> one }
	crate::macros::setter! { relationship_object::object -> many }
	crate::macros::setter! { relationship -> many }
}

impl Relationship for Entity {}
impl RelationshipMut for Entity {}
