use crate::{Capability, Entity, Kind, Property};

pub const TOMBSTONE: &[Property] = &[
	Property::non_functional("formerType", &[Kind::Embedded(Capability::Object), Kind::String]),
	Property::functional("deleted", &[Kind::DateTime]),
];

pub trait Tombstone : super::Object {
	crate::macros::getter! { former_type::formerType -> many }
	crate::macros::getter! { deleted -> one }
}

pub trait TombstoneMut : super::ObjectMut {
	crate::macros::setter! { former_type::formerType -> many }
	crate::macros::setter! { deleted -> one }
}

impl Tombstone for Entity {}
impl TombstoneMut for Entity {}
