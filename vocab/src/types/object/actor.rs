use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	Capability, Entity, Field, FieldErr, Kind, ObjectType, Property,
};

crate::macros::vocabulary! {
	pub enum ActorType : [Object, Actor] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, ACTOR, ACTOR_MISC, ACTOR_COUNTERS] {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};
}

const ORDERED_REF: &[Kind] = &[Kind::Embedded(Capability::OrderedCollection), Kind::Iri];
const COLLECTION_REF: &[Kind] = &[Kind::Embedded(Capability::Collection), Kind::Iri];

pub const ACTOR: &[Property] = &[
	Property::functional("preferredUsername", &[Kind::String]).with_language_map(),
	Property::functional("inbox", ORDERED_REF),
	Property::functional("outbox", ORDERED_REF),
	Property::functional("following", COLLECTION_REF),
	Property::functional("followers", COLLECTION_REF),
	Property::functional("liked", COLLECTION_REF),
	Property::non_functional("streams", COLLECTION_REF),
	// usually a plain untyped mapping of urls
	Property::functional("endpoints", &[Kind::Embedded(Capability::Object), Kind::Iri]),
	Property::functional("publicKey", &[Kind::Embedded(Capability::Object), Kind::Iri]),
	Property::functional("discoverable", &[Kind::Boolean]),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const ACTOR_MISC: &[Property] = &[
	Property::functional("movedTo", &[Kind::Embedded(Capability::Actor), Kind::Iri]),
	Property::functional("manuallyApprovesFollowers", &[Kind::Boolean]),
];
#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const ACTOR_MISC: &[Property] = &[];

#[cfg(feature = "activitypub-counters")]
pub const ACTOR_COUNTERS: &[Property] = &[
	Property::functional("followersCount", &[Kind::NonNegativeInteger]),
	Property::functional("followingCount", &[Kind::NonNegativeInteger]),
	Property::functional("statusesCount", &[Kind::NonNegativeInteger]),
];
#[cfg(not(feature = "activitypub-counters"))]
pub const ACTOR_COUNTERS: &[Property] = &[];

pub trait Actor : crate::Object {
	fn actor_type(&self) -> Field<ActorType> {
		match self.object_type()? {
			ObjectType::Actor(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}

	crate::macros::getter! { preferred_username::preferredUsername -> one }
	crate::macros::getter! { preferred_username_map::preferredUsername -> lang }
	crate::macros::getter! { inbox -> one }
	crate::macros::getter! { outbox -> one }
	crate::macros::getter! { following -> one }
	crate::macros::getter! { followers -> one }
	crate::macros::getter! { liked -> one }
	crate::macros::getter! { streams -> many }
	crate::macros::getter! { endpoints -> one }
	crate::macros::getter! { public_key::publicKey -> one }
	// everyone has it but AP doesn't mention it
	crate::macros::getter! { discoverable -> one }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::getter! { moved_to::movedTo -> one }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::getter! { manually_approves_followers::manuallyApprovesFollowers -> one }

	#[cfg(feature = "activitypub-counters")]
	crate::macros::getter! { followers_count::followersCount -> one }
	#[cfg(feature = "activitypub-counters")]
	crate::macros::getter! { following_count::followingCount -> one }
	#[cfg(feature = "activitypub-counters")]
	crate::macros::getter! { statuses_count::statusesCount -> one }
}

pub trait ActorMut : crate::ObjectMut {
	crate::macros::setter! { preferred_username::preferredUsername -> one }
	crate::macros::setter! { preferred_username_map::preferredUsername -> lang }
	crate::macros::setter! { inbox -> one }
	crate::macros::setter! { outbox -> one }
	crate::macros::setter! { following -> one }
	crate::macros::setter! { followers -> one }
	crate::macros::setter! { liked -> one }
	crate::macros::setter! { streams -> many }
	crate::macros::setter! { endpoints -> one }
	crate::macros::setter! { public_key::publicKey -> one }
	crate::macros::setter! { discoverable -> one }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::setter! { moved_to::movedTo -> one }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::setter! { manually_approves_followers::manuallyApprovesFollowers -> one }

	#[cfg(feature = "activitypub-counters")]
	crate::macros::setter! { followers_count::followersCount -> one }
	#[cfg(feature = "activitypub-counters")]
	crate::macros::setter! { following_count::followingCount -> one }
	#[cfg(feature = "activitypub-counters")]
	crate::macros::setter! { statuses_count::statusesCount -> one }
}

impl Actor for Entity {}
impl ActorMut for Entity {}
