use crate::{
	types::{base::BASE, object::{OBJECT, OBJECT_MISC, OBJECT_OSTATUS}},
	Entity, Field, FieldErr, ObjectType,
};

crate::macros::vocabulary! {
	pub enum DocumentType : [Object, Document] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS] {
		Document,
		Audio,
		Image : [Object, Document, Image] [BASE, OBJECT, OBJECT_MISC, OBJECT_OSTATUS],
		Page,
		Video;
	};
}

pub trait Document : crate::Object {
	fn document_type(&self) -> Field<DocumentType> {
		match self.object_type()? {
			ObjectType::Document(x) => Ok(x),
			_ => Err(FieldErr("type")),
		}
	}
}

impl Document for Entity {}
