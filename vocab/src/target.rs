use crate::{Field, Node, NonFunctional, Object};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// everyone this is delivered to: to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// primary targets only: to and bto
	fn mentioning(&self) -> Vec<String>;
	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

fn ids(field: Field<&NonFunctional>) -> Vec<String> {
	match field {
		Ok(slot) => slot.iter().filter_map(Node::id).map(str::to_string).collect(),
		Err(_) => Vec::new(),
	}
}

impl<T: Object> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		let mut to = ids(self.to());
		to.append(&mut ids(self.bto()));
		to.append(&mut ids(self.cc()));
		to.append(&mut ids(self.bcc()));
		to
	}

	fn mentioning(&self) -> Vec<String> {
		let mut to = ids(self.to());
		to.append(&mut ids(self.bto()));
		to
	}
}
