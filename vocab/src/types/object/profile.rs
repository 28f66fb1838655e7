use crate::{Capability, Entity, Kind, Property};

pub const PROFILE: &[Property] = &[
	Property::functional("describes", &[Kind::Embedded(Capability::Object), Kind::Iri]),
];

pub trait Profile : super::Object {
	crate::macros::getter! { describes -> one }
}

pub trait ProfileMut : super::ObjectMut {
	crate::macros::setter! { describes -> one }
}

impl Profile for Entity {}
impl ProfileMut for Entity {}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{Node, ObjectType};

	#[test]
	fn profile_describes_an_object() {
		let profile = Entity::new(ObjectType::Profile)
			.set_describes(Some(Node::iri("https://example.com/users/sally").unwrap()));
		assert_eq!(profile.describes().unwrap().get().and_then(Node::id), Some("https://example.com/users/sally"));
		assert!(Entity::new(ObjectType::Note).describes().is_err());
	}
}
