pub mod activity;
pub mod actor;
pub mod collection;
pub mod document;
pub mod place;
pub mod profile;
pub mod relationship;
pub mod tombstone;

use crate::{
	types::{base::BASE, ANY, TEXT},
	BaseType, Capability, Entity, Field, FieldErr, Kind, Property,
};

use activity::ActivityType;
use actor::ActorType;
use collection::CollectionType;
use document::DocumentType;
use place::PLACE;
use profile::PROFILE;
use relationship::RELATIONSHIP;
use tombstone::TOMBSTONE;

crate::macros::vocabulary! {
	pub enum ObjectType : [Object] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS] {
		Object,
		Article,
		Event,
		Note,
		Place : [Object, Place] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, PLACE],
		Profile : [Object, Profile] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, PROFILE],
		Relationship : [Object, Relationship] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, RELATIONSHIP],
		Tombstone : [Object, Tombstone] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS, TOMBSTONE];

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};
}

const COLLECTION_REF: &[Kind] = &[Kind::Embedded(Capability::Collection), Kind::Iri];
const IMAGE: &[Kind] = &[Kind::Embedded(Capability::Image), Kind::Embedded(Capability::Link), Kind::Iri];

pub const OBJECT: &[Property] = &[
	Property::non_functional("attachment", ANY),
	Property::non_functional("attributedTo", ANY),
	Property::non_functional("audience", ANY),
	Property::non_functional("content", TEXT).with_language_map(),
	Property::non_functional("context", ANY),
	Property::functional("endTime", &[Kind::DateTime]),
	Property::non_functional("generator", ANY),
	Property::non_functional("icon", IMAGE),
	Property::non_functional("image", IMAGE),
	Property::non_functional("inReplyTo", ANY),
	Property::non_functional("location", ANY),
	Property::functional("published", &[Kind::DateTime]),
	Property::functional("replies", COLLECTION_REF),
	Property::functional("startTime", &[Kind::DateTime]),
	Property::non_functional("summary", TEXT).with_language_map(),
	Property::non_functional("tag", ANY),
	Property::functional("updated", &[Kind::DateTime]),
	Property::non_functional("url", &[Kind::Embedded(Capability::Link), Kind::AnyUri]),
	Property::non_functional("to", ANY),
	Property::non_functional("bto", ANY),
	Property::non_functional("cc", ANY),
	Property::non_functional("bcc", ANY),
	Property::functional("duration", &[Kind::Duration]),
	Property::functional("likes", COLLECTION_REF),
	Property::functional("shares", COLLECTION_REF),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub const OBJECT_MISC: &[Property] = &[
	Property::functional("sensitive", &[Kind::Boolean]),
	Property::functional("quoteUrl", &[Kind::Embedded(Capability::Object), Kind::Iri]),
];
#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
pub const OBJECT_MISC: &[Property] = &[];

#[cfg(feature = "ostatus")]
pub const OBJECT_OSTATUS: &[Property] = &[
	Property::functional("conversation", &[Kind::Embedded(Capability::Object), Kind::Iri]),
];
#[cfg(not(feature = "ostatus"))]
pub const OBJECT_OSTATUS: &[Property] = &[];

pub trait Object : crate::Base {
	fn object_type(&self) -> Field<ObjectType> {
		match self.base_type()? {
			BaseType::Object(x) => Ok(x),
			BaseType::Link(_) => Err(FieldErr("type")),
		}
	}

	// resources needing special handling, like email attachments
	crate::macros::getter! { attachment -> many }
	crate::macros::getter! { attributed_to::attributedTo -> many }
	crate::macros::getter! { audience -> many }
	crate::macros::getter! { content -> many }
	crate::macros::getter! { content_map::content -> lang }
	crate::macros::getter! { context -> many }
	crate::macros::getter! { end_time::endTime -> one }
	crate::macros::getter! { generator -> many }
	crate::macros::getter! { icon -> many }
	crate::macros::getter! { image -> many }
	crate::macros::getter! { in_reply_to::inReplyTo -> many }
	crate::macros::getter! { location -> many }
	crate::macros::getter! { published -> one }
	crate::macros::getter! { replies -> one }
	crate::macros::getter! { start_time::startTime -> one }
	crate::macros::getter! { summary -> many }
	crate::macros::getter! { summary_map::summary -> lang }
	crate::macros::getter! { tag -> many }
	crate::macros::getter! { updated -> one }
	crate::macros::getter! { url -> many }
	crate::macros::getter! { to -> many }
	crate::macros::getter! { bto -> many }
	crate::macros::getter! { cc -> many }
	crate::macros::getter! { bcc -> many }
	crate::macros::getter! { duration -> one }
	crate::macros::getter! { likes -> one }
	crate::macros::getter! { shares -> one }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::getter! { sensitive -> one }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::getter! { quote_url::quoteUrl -> one }

	#[cfg(feature = "ostatus")]
	crate::macros::getter! { conversation -> one }
}

pub trait ObjectMut : crate::BaseMut {
	crate::macros::setter! { attachment -> many }
	crate::macros::setter! { attributed_to::attributedTo -> many }
	crate::macros::setter! { audience -> many }
	crate::macros::setter! { content -> many }
	crate::macros::setter! { content_map::content -> lang }
	crate::macros::setter! { context -> many }
	crate::macros::setter! { end_time::endTime -> one }
	crate::macros::setter! { generator -> many }
	crate::macros::setter! { icon -> many }
	crate::macros::setter! { image -> many }
	crate::macros::setter! { in_reply_to::inReplyTo -> many }
	crate::macros::setter! { location -> many }
	crate::macros::setter! { published -> one }
	crate::macros::setter! { replies -> one }
	crate::macros::setter! { start_time::startTime -> one }
	crate::macros::setter! { summary -> many }
	crate::macros::setter! { summary_map::summary -> lang }
	crate::macros::setter! { tag -> many }
	crate::macros::setter! { updated -> one }
	crate::macros::setter! { url -> many }
	crate::macros::setter! { to -> many }
	crate::macros::setter! { bto -> many }
	crate::macros::setter! { cc -> many }
	crate::macros::setter! { bcc -> many }
	crate::macros::setter! { duration -> one }
	crate::macros::setter! { likes -> one }
	crate::macros::setter! { shares -> one }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::setter! { sensitive -> one }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	crate::macros::setter! { quote_url::quoteUrl -> one }

	#[cfg(feature = "ostatus")]
	crate::macros::setter! { conversation -> one }
}

impl Object for Entity {}
impl ObjectMut for Entity {}
