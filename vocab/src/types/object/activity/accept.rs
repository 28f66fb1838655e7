use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	ActivityType, Entity, Field, FieldErr,
};
use super::{ACTIVITY, TRANSITIVE};

crate::macros::vocabulary! {
	pub enum AcceptType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Accept,
		TentativeAccept;
	};
}

pub trait Accept : super::Activity {
	fn accept_type(&self) -> Field<AcceptType> {
		match self.activity_type()? {
			ActivityType::Accept(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

impl Accept for Entity {}
