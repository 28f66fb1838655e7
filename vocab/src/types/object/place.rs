use crate::{Entity, Kind, Property};

pub const PLACE: &[Property] = &[
	Property::functional("accuracy", &[Kind::Float]),
	Property::functional("altitude", &[Kind::Float]),
	Property::functional("latitude", &[Kind::Float]),
	Property::functional("longitude", &[Kind::Float]),
	Property::functional("radius", &[Kind::Float]),
	// "cm", "feet", "inches", "km", "m", "miles" or any uri
	Property::functional("units", &[Kind::String, Kind::AnyUri]),
];

pub trait Place : super::Object {
	crate::macros::getter! { accuracy -> one }
	crate::macros::getter! { altitude -> one }
	crate::macros::getter! { latitude -> one }
	crate::macros::getter! { longitude -> one }
	crate::macros::getter! { radius -> one }
	crate::macros::getter! { units -> one }
}

pub trait PlaceMut : super::ObjectMut {
	crate::macros::setter! { accuracy -> one }
	crate::macros::setter! { altitude -> one }
	crate::macros::setter! { latitude -> one }
	crate::macros::setter! { longitude -> one }
	crate::macros::setter! { radius -> one }
	crate::macros::setter! { units -> one }
}

impl Place for Entity {}
impl PlaceMut for Entity {}
