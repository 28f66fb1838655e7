use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	ActivityType, Entity, Field, FieldErr,
};
use super::{ACTIVITY, TRANSITIVE};

crate::macros::vocabulary! {
	pub enum RejectType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Reject,
		TentativeReject;
	};
}

pub trait Reject : super::Activity {
	fn reject_type(&self) -> Field<RejectType> {
		match self.activity_type()? {
			ActivityType::Reject(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

impl Reject for Entity {}
