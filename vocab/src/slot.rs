use std::collections::VecDeque;

use serde_json::Value;

use crate::{Node, Property, Resolver, VocabError};

/// storage for one declared property, shaped by its cardinality
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
	Functional(Functional),
	NonFunctional(NonFunctional),
}

impl Slot {
	pub fn new(property: &'static Property) -> Self {
		if property.functional {
			Slot::Functional(Functional { property, node: None })
		} else {
			Slot::NonFunctional(NonFunctional { property, nodes: VecDeque::new(), unknown: None })
		}
	}

	pub fn property(&self) -> &'static Property {
		match self {
			Slot::Functional(x) => x.property,
			Slot::NonFunctional(x) => x.property,
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Slot::Functional(x) => x.node.is_none(),
			Slot::NonFunctional(x) => x.nodes.is_empty() && x.unknown.is_none(),
		}
	}

	/// every node held, in order
	pub fn nodes(&self) -> Vec<&Node> {
		match self {
			Slot::Functional(x) => x.node.iter().collect(),
			Slot::NonFunctional(x) => x.nodes.iter().collect(),
		}
	}

	/// replace the content with what the wire value holds
	pub fn read(&mut self, value: &Value, resolver: &dyn Resolver) -> Result<(), VocabError> {
		match self {
			Slot::Functional(x) => x.read(value, resolver),
			Slot::NonFunctional(x) => x.read(value, resolver),
		}
	}

	/// wire value for this property, none when it should be omitted
	pub fn encode(&self) -> Result<Option<Value>, VocabError> {
		match self {
			Slot::Functional(x) => x.encode(),
			Slot::NonFunctional(x) => x.encode(),
		}
	}
}

fn check(property: &Property, node: &Node) {
	if !property.admits(node) {
		tracing::warn!("'{}' does not admit {:?} values, storing anyway", property.key, node.kind());
	}
}

/// a property holding zero or one value
#[derive(Debug, Clone, PartialEq)]
pub struct Functional {
	property: &'static Property,
	node: Option<Node>,
}

impl Functional {
	pub fn property(&self) -> &'static Property {
		self.property
	}

	/// the whole wire value is one occurrence, arrays included
	pub fn read(&mut self, value: &Value, resolver: &dyn Resolver) -> Result<(), VocabError> {
		self.node = Some(Node::decode(self.property, value, resolver)?);
		Ok(())
	}

	pub fn encode(&self) -> Result<Option<Value>, VocabError> {
		self.node.as_ref().map(Node::encode).transpose()
	}

	pub fn is_empty(&self) -> bool {
		self.node.is_none()
	}

	pub fn get(&self) -> Option<&Node> {
		self.node.as_ref()
	}

	pub fn get_mut(&mut self) -> Option<&mut Node> {
		self.node.as_mut()
	}

	pub fn set(&mut self, node: Node) {
		check(self.property, &node);
		self.node = Some(node);
	}

	pub fn clear(&mut self) {
		self.node = None;
	}

	pub fn take(&mut self) -> Option<Node> {
		self.node.take()
	}

	pub fn set_unknown(&mut self, value: Value) {
		self.node = Some(Node::Unknown(value));
	}

	pub fn has_unknown(&self) -> bool {
		self.node.as_ref().is_some_and(Node::is_unknown)
	}

	pub fn unknown(&self) -> Option<&Value> {
		self.node.as_ref().and_then(Node::as_unknown)
	}
}

/// a property holding an ordered sequence of values
///
/// besides the sequence it can keep one opaque payload standing for the whole property: the two
/// never coexist, storing one drops the other
#[derive(Debug, Clone, PartialEq)]
pub struct NonFunctional {
	property: &'static Property,
	nodes: VecDeque<Node>,
	unknown: Option<Value>,
}

impl NonFunctional {
	pub fn property(&self) -> &'static Property {
		self.property
	}

	/// arrays give one node per element, anything else a single node
	pub fn read(&mut self, value: &Value, resolver: &dyn Resolver) -> Result<(), VocabError> {
		self.nodes.clear();
		self.unknown = None;
		match value {
			Value::Array(values) => {
				for value in values {
					self.nodes.push_back(Node::decode(self.property, value, resolver)?);
				}
			},
			_ => self.nodes.push_back(Node::decode(self.property, value, resolver)?),
		}
		Ok(())
	}

	/// one value folds to a scalar, none omits the property
	pub fn encode(&self) -> Result<Option<Value>, VocabError> {
		if self.nodes.is_empty() {
			return Ok(self.unknown.clone());
		}
		let mut out = self.nodes
			.iter()
			.map(Node::encode)
			.collect::<Result<Vec<Value>, VocabError>>()?;
		if out.len() == 1 {
			Ok(out.pop())
		} else {
			Ok(Some(Value::Array(out)))
		}
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// panics if `i` is out of bounds
	pub fn get(&self, i: usize) -> &Node {
		&self.nodes[i]
	}

	/// panics if `i` is out of bounds
	pub fn get_mut(&mut self, i: usize) -> &mut Node {
		&mut self.nodes[i]
	}

	pub fn first(&self) -> Option<&Node> {
		self.nodes.front()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter()
	}

	pub fn append(&mut self, node: Node) {
		check(self.property, &node);
		self.unknown = None;
		self.nodes.push_back(node);
	}

	pub fn prepend(&mut self, node: Node) {
		check(self.property, &node);
		self.unknown = None;
		self.nodes.push_front(node);
	}

	/// panics if `i` is out of bounds
	pub fn remove(&mut self, i: usize) -> Node {
		match self.nodes.remove(i) {
			Some(node) => node,
			None => panic!("index {i} out of bounds for '{}' with {} values", self.property.key, self.nodes.len()),
		}
	}

	/// replace everything with a single value
	pub fn set(&mut self, node: Node) {
		self.clear();
		self.append(node);
	}

	pub fn clear(&mut self) {
		self.nodes.clear();
		self.unknown = None;
	}

	pub fn set_unknown(&mut self, value: Value) {
		self.nodes.clear();
		self.unknown = Some(value);
	}

	pub fn has_unknown(&self) -> bool {
		self.unknown.is_some()
	}

	pub fn unknown(&self) -> Option<&Value> {
		self.unknown.as_ref()
	}

	pub fn take_unknown(&mut self) -> Option<Value> {
		self.unknown.take()
	}
}

impl<'a> IntoIterator for &'a NonFunctional {
	type Item = &'a Node;
	type IntoIter = std::collections::vec_deque::Iter<'a, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.nodes.iter()
	}
}
