pub mod accept;
pub mod ignore;
pub mod intransitive;
pub mod offer;
pub mod reject;

use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}, ANY},
	Entity, Field, FieldErr, ObjectType, Property,
};
use accept::AcceptType;
use reject::RejectType;
use offer::OfferType;
use intransitive::IntransitiveActivityType;
use ignore::IgnoreType;

#[cfg(feature = "litepub")]
crate::macros::vocabulary! {
	pub enum ActivityType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		EmojiReact,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

#[cfg(not(feature = "litepub"))]
crate::macros::vocabulary! {
	pub enum ActivityType : [Object, Activity] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTIVITY, TRANSITIVE] {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

/// properties of every activity, transitive or not
pub const ACTIVITY: &[Property] = &[
	Property::non_functional("actor", ANY),
	Property::non_functional("target", ANY),
	Property::non_functional("result", ANY),
	Property::non_functional("origin", ANY),
	Property::non_functional("instrument", ANY),
];

pub const TRANSITIVE: &[Property] = &[
	Property::non_functional("object", ANY),
];

pub trait Activity : crate::Object {
	fn activity_type(&self) -> Field<ActivityType> {
		match self.object_type()? {
			ObjectType::Activity(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}

	crate::macros::getter! { actor -> many }
	// missing on intransitive activities
	crate::macros::getter! { object -> many }
	crate::macros::getter! { target -> many }
	crate::macros::getter! { result -> many }
	crate::macros::getter! { origin -> many }
	crate::macros::getter! { instrument -> many }
}

pub trait ActivityMut : crate::ObjectMut {
	crate::macros::setter! { actor -> many }
	crate::macros::setter! { object -> many }
	crate::macros::setter! { target -> many }
	crate::macros::setter! { result -> many }
	crate::macros::setter! { origin -> many }
	crate::macros::setter! { instrument -> many }
}

impl Activity for Entity {}
impl ActivityMut for Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::*;
	use crate::{Capability, Node, Schema, Vocabulary};

	#[test]
	fn delete_with_actor_reference_round_trips() {
		let delete = Entity::new(ActivityType::Delete)
			.set_actor(Some(Node::iri("https://example.com/alice").unwrap()))
			.set_object(Some(Node::iri("https://example.com/alice/notes/1").unwrap()));
		let value = delete.to_value().unwrap();
		assert_eq!(
			value,
			json!({
				"type": "Delete",
				"actor": "https://example.com/alice",
				"object": "https://example.com/alice/notes/1",
			})
		);

		let decoded = crate::from_value(&value, &Vocabulary).unwrap();
		assert_eq!(decoded.activity_type().unwrap(), ActivityType::Delete);
		let actor = decoded.actor().unwrap();
		assert_eq!(actor.len(), 1);
		assert!(actor.get(0).is_iri());
		assert_eq!(actor.get(0).as_iri().map(|x| x.as_str()), Some("https://example.com/alice"));
		assert_eq!(decoded.to_value().unwrap(), value);
	}

	#[test]
	fn appending_folds_only_single_values() {
		let mut create = Entity::new(ActivityType::Create);
		create.actor_mut().unwrap().append(Node::iri("https://example.com/alice").unwrap());
		assert_eq!(create.to_value().unwrap()["actor"], json!("https://example.com/alice"));
		create.actor_mut().unwrap().append(Node::iri("https://example.com/bob").unwrap());
		assert_eq!(
			create.to_value().unwrap()["actor"],
			json!(["https://example.com/alice", "https://example.com/bob"])
		);
	}

	#[test]
	fn embedded_objects_decode_recursively() {
		let value = json!({
			"type": "Create",
			"id": "https://example.com/activities/1",
			"actor": { "type": "Person", "id": "https://example.com/alice", "preferredUsername": "alice" },
			"object": {
				"type": "Note",
				"id": "https://example.com/notes/1",
				"content": "hi",
				"inReplyTo": { "type": "Tombstone", "id": "https://example.com/notes/0" },
			},
		});
		let create = crate::from_value(&value, &Vocabulary).unwrap();
		let actor = create.actor().unwrap().get(0);
		assert!(actor.is(Capability::Actor));
		assert_eq!(actor.id(), Some("https://example.com/alice"));
		let note = create.object().unwrap().get(0).entity().unwrap();
		assert_eq!(note.schema().name, "Note");
		assert!(crate::Object::in_reply_to(note).unwrap().get(0).is(Capability::Tombstone));
		assert_eq!(create.to_value().unwrap(), value);
	}

	#[test]
	fn nested_type_tokens_are_activities() {
		for token in ["Accept", "TentativeReject", "Block", "Invite", "Arrive", "Question"] {
			let schema = ActivityType::try_from(token).unwrap().schema();
			assert!(schema.is(Capability::Activity), "{token}");
		}
		assert!(ActivityType::Create.schema().property("object").is_some());
	}

	#[cfg(feature = "litepub")]
	#[test]
	fn emoji_reactions() {
		assert_eq!(ActivityType::try_from("EmojiReact").unwrap(), ActivityType::EmojiReact);
	}
}
