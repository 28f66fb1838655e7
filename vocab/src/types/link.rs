use crate::{types::base::BASE, BaseType, Entity, Field, FieldErr, Kind, Property};

#[cfg(feature = "activitypub-miscellaneous-terms")]
crate::macros::vocabulary! {
	pub enum LinkType : [Link] [BASE, LINK] {
		Link,
		Hashtag,
		Mention;
	};
}

#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
crate::macros::vocabulary! {
	pub enum LinkType : [Link] [BASE, LINK] {
		Link,
		Mention;
	};
}

pub const LINK: &[Property] = &[
	Property::functional("href", &[Kind::AnyUri]),
	Property::non_functional("rel", &[Kind::String]),
	Property::functional("hreflang", &[Kind::String]),
	Property::functional("height", &[Kind::NonNegativeInteger]),
	Property::functional("width", &[Kind::NonNegativeInteger]),
];

pub trait Link : crate::Base {
	fn link_type(&self) -> Field<LinkType> {
		match self.base_type()? {
			BaseType::Link(x) => Ok(x),
			BaseType::Object(_) => Err(FieldErr("type")),
		}
	}

	crate::macros::getter! { href -> one }
	crate::macros::getter! { rel -> many }
	crate::macros::getter! { hreflang -> one }
	crate::macros::getter! { height -> one }
	crate::macros::getter! { width -> one }
}

pub trait LinkMut : crate::BaseMut {
	crate::macros::setter! { href -> one }
	crate::macros::setter! { rel -> many }
	crate::macros::setter! { hreflang -> one }
	crate::macros::setter! { height -> one }
	crate::macros::setter! { width -> one }
}

impl Link for Entity {}
impl LinkMut for Entity {}
