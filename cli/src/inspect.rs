use apvocab::{Entity, Kind, Node, Slot};

/// one line per classified value, embedded entities indented under the property holding them
pub fn inspect(entity: &Entity) -> Vec<String> {
	let mut out = Vec::new();
	describe(entity, 0, &mut out);
	out
}

/// how many values, at any depth, fell back to their raw json
pub fn unclassified(entity: &Entity) -> usize {
	entity.slots()
		.map(|slot| {
			let raw = match slot {
				Slot::NonFunctional(x) if x.has_unknown() => 1,
				_ => 0,
			};
			raw + slot.nodes()
				.into_iter()
				.map(|node| match node {
					Node::Unknown(_) => 1,
					_ => node.entity().map(unclassified).unwrap_or_default(),
				})
				.sum::<usize>()
		})
		.sum()
}

fn describe(entity: &Entity, depth: usize, out: &mut Vec<String>) {
	let pad = "  ".repeat(depth);
	let schema = entity.schema();
	let capabilities = schema.capabilities
		.iter()
		.map(|x| x.to_string())
		.collect::<Vec<_>>()
		.join(", ");
	out.push(format!("{pad}{} [{capabilities}]", schema.name));

	for slot in entity.slots() {
		let key = slot.property().key;
		if let Slot::NonFunctional(x) = slot {
			if let Some(raw) = x.unknown() {
				out.push(format!("{pad}  {key}: unclassified {raw}"));
			}
		}
		for node in slot.nodes() {
			match node.kind() {
				None => out.push(format!("{pad}  {key}: unclassified {}", node.as_unknown().unwrap_or(&serde_json::Value::Null))),
				Some(Kind::Embedded(cap)) => {
					out.push(format!("{pad}  {key}: embedded {cap}"));
					if let Some(inner) = node.entity() {
						describe(inner, depth + 2, out);
					}
				},
				Some(kind) => out.push(format!("{pad}  {key}: {kind}")),
			}
		}
	}

	for (key, texts) in entity.lang_maps() {
		out.push(format!("{pad}  {key}Map: {} translations", texts.len()));
	}

	for key in entity.extensions().keys() {
		out.push(format!("{pad}  {key}: extension"));
	}
}
