use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	ActivityType, Entity, Field, FieldErr,
};
use super::{ACTIVITY, TRANSITIVE};

crate::macros::vocabulary! {
	pub enum OfferType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Offer,
		Invite;
	};
}

pub trait Offer : super::Activity {
	fn offer_type(&self) -> Field<OfferType> {
		match self.activity_type()? {
			ActivityType::Offer(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

impl Offer for Entity {}
