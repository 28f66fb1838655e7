pub mod page;

use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}, ANY},
	Capability, Entity, Field, FieldErr, Kind, ObjectType, Property,
};
use page::{COLLECTION_PAGE, ORDERED_PAGE};

crate::macros::vocabulary! {
	pub enum CollectionType : [Object, Collection] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, COLLECTION] {
		Collection,
		CollectionPage : [Object, Collection, CollectionPage] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, COLLECTION, COLLECTION_PAGE],
		OrderedCollection : [Object, Collection, OrderedCollection] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, COLLECTION, ORDERED],
		OrderedCollectionPage : [Object, Collection, OrderedCollection, CollectionPage, OrderedCollectionPage]
			[BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, COLLECTION, ORDERED, COLLECTION_PAGE, ORDERED_PAGE];
	};
}

pub(crate) const PAGE_REF: &[Kind] = &[
	Kind::Embedded(Capability::CollectionPage),
	Kind::Embedded(Capability::Link),
	Kind::Iri,
];

pub const COLLECTION: &[Property] = &[
	Property::functional("totalItems", &[Kind::NonNegativeInteger]),
	Property::functional("current", PAGE_REF),
	Property::functional("first", PAGE_REF),
	Property::functional("last", PAGE_REF),
	Property::non_functional("items", ANY),
];

pub const ORDERED: &[Property] = &[
	Property::non_functional("orderedItems", ANY),
];

pub trait Collection : crate::Object {
	fn collection_type(&self) -> Field<CollectionType> {
		match self.object_type()? {
			ObjectType::Collection(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}

	// counts the whole logical collection, not just what is serialized here
	crate::macros::getter! { total_items::totalItems -> one }
	crate::macros::getter! { current -> one }
	crate::macros::getter! { first -> one }
	crate::macros::getter! { last -> one }
	crate::macros::getter! { items -> many }
	crate::macros::getter! { ordered_items::orderedItems -> many }
}

pub trait CollectionMut : crate::ObjectMut {
	crate::macros::setter! { total_items::totalItems -> one }
	crate::macros::setter! { current -> one }
	crate::macros::setter! { first -> one }
	crate::macros::setter! { last -> one }
	crate::macros::setter! { items -> many }
	crate::macros::setter! { ordered_items::orderedItems -> many }
}

impl Collection for Entity {}
impl CollectionMut for Entity {}
