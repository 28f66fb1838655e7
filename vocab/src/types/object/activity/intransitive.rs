use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}, ANY},
	ActivityType, Capability, Entity, Field, FieldErr, Kind, Property,
};
use super::ACTIVITY;

crate::macros::vocabulary! {
	pub enum IntransitiveActivityType : [Object, Activity, IntransitiveActivity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY] {
		IntransitiveActivity,
		Arrive,
		Travel,
		Question : [Object, Activity, IntransitiveActivity, Question] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, QUESTION];
	};
}

pub const QUESTION: &[Property] = &[
	Property::non_functional("oneOf", ANY),
	Property::non_functional("anyOf", ANY),
	Property::non_functional("closed", &[
		Kind::Embedded(Capability::Object),
		Kind::Embedded(Capability::Link),
		Kind::DateTime,
		Kind::Boolean,
		Kind::Iri,
	]),
];

pub trait IntransitiveActivity : super::Activity {
	fn intransitive_activity_type(&self) -> Field<IntransitiveActivityType> {
		match self.activity_type()? {
			ActivityType::IntransitiveActivity(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

pub trait Question : IntransitiveActivity {
	// exclusive options
	crate::macros::getter! { one_of::oneOf -> many }
	// inclusive options
	crate::macros::getter! { any_of::anyOf -> many }
	crate::macros::getter! { closed -> many }
}

pub trait QuestionMut : super::ActivityMut {
	crate::macros::setter! { one_of::oneOf -> many }
	crate::macros::setter! { any_of::anyOf -> many }
	crate::macros::setter! { closed -> many }
}

impl IntransitiveActivity for Entity {}
impl Question for Entity {}
impl QuestionMut for Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Activity, Schema, Vocabulary};

	#[test]
	fn questions_have_options_but_no_object() {
		let schema = IntransitiveActivityType::Question.schema();
		assert!(schema.is(Capability::Question));
		assert!(schema.property("oneOf").is_some());
		assert!(schema.property("object").is_none());
		assert!(!IntransitiveActivityType::Arrive.schema().is(Capability::Question));
	}

	#[test]
	fn poll_round_trip() {
		let value = json!({
			"type": "Question",
			"id": "https://example.com/polls/1",
			"name": "tabs or spaces?",
			"oneOf": [
				{ "type": "Note", "name": "tabs" },
				{ "type": "Note", "name": "spaces" },
			],
			"closed": "2024-06-04T17:09:20Z",
		});
		let poll = crate::from_value(&value, &Vocabulary).unwrap();
		assert_eq!(poll.intransitive_activity_type().unwrap(), IntransitiveActivityType::Question);
		assert_eq!(poll.one_of().unwrap().len(), 2);
		assert!(poll.any_of().unwrap().is_empty());
		assert!(poll.closed().unwrap().get(0).as_date_time().is_some());
		assert!(poll.object().is_err());
		assert_eq!(poll.to_value().unwrap(), value);
	}

	#[test]
	fn closed_can_be_a_flag() {
		let poll = Entity::new(IntransitiveActivityType::Question).set_closed(Some(true.into()));
		assert_eq!(poll.to_value().unwrap(), json!({ "type": "Question", "closed": true }));
	}
}
