//! schema driven data binding for activitystreams documents
//!
//! every vocabulary type is an [Entity] built from a static [TypeSchema]: one [Slot] per declared
//! property, each holding [Node]s. a node is exactly one of the shapes its property allows, or the
//! original json when none fits. keys the schema doesn't know end up in the entity's extension map,
//! so decoding and encoding again never loses data
//!
//! entities own their whole tree and are `Send + Sync`: reading, encoding included, is fine from
//! many threads at once, but mutating one entity concurrently must be guarded by the caller

pub(crate) mod macros;
pub use macros::TypeValueError;

mod field;
pub use field::{Field, FieldErr};

mod error;
pub use error::{PartialEncode, ShapeErr, VocabError};

pub mod codec;
pub use codec::{AnyUri, Codec, Iri, LangMap, MimeType};

mod schema;
pub use schema::{Capability, Kind, Property, Schema, TypeSchema};

mod node;
pub use node::Node;

mod slot;
pub use slot::{Functional, NonFunctional, Slot};

mod entity;
pub use entity::Entity;

mod resolver;
pub use resolver::{from_str, from_value, Lookup, Registry, Resolver, Vocabulary};

pub mod target;
pub use target::Addressed;

#[cfg(feature = "jsonld")]
mod jsonld;
#[cfg(feature = "jsonld")]
pub use jsonld::LD;

pub mod types;
pub use types::{
	base::{Base, BaseMut, BaseType},
	link::{Link, LinkMut, LinkType},
	object::{
		Object, ObjectMut, ObjectType,
		activity::{
			Activity, ActivityMut, ActivityType,
			accept::{Accept, AcceptType},
			ignore::{Ignore, IgnoreType},
			intransitive::{IntransitiveActivity, IntransitiveActivityType, Question, QuestionMut},
			offer::{Offer, OfferType},
			reject::{Reject, RejectType},
		},
		actor::{Actor, ActorMut, ActorType},
		collection::{
			Collection, CollectionMut, CollectionType,
			page::{CollectionPage, CollectionPageMut},
		},
		document::{Document, DocumentType},
		place::{Place, PlaceMut},
		profile::{Profile, ProfileMut},
		relationship::{Relationship, RelationshipMut},
		tombstone::{Tombstone, TombstoneMut},
	},
};
