use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	ActivityType, Entity, Field, FieldErr,
};
use super::{ACTIVITY, TRANSITIVE};

crate::macros::vocabulary! {
	pub enum IgnoreType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Ignore,
		Block;
	};
}

pub trait Ignore : super::Activity {
	fn ignore_type(&self) -> Field<IgnoreType> {
		match self.activity_type()? {
			ActivityType::Ignore(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

impl Ignore for Entity {}
