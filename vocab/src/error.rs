/// a leaf codec refusing a value because it is not of its shape: the next alternative should be
/// tried, this never reaches callers of decode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value cannot be interpreted as {0}")]
pub struct ShapeErr(pub &'static str);

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
	#[error("expected a json object, got {0}")]
	NotAnObject(&'static str),

	#[error("no known vocabulary type among {0:?}")]
	UnresolvedType(Vec<String>),

	#[error("given a json object but this property cannot hold one: {0}")]
	UnexpectedMap(serde_json::Value),

	#[error("key '{0}' is reserved and cannot be stored as an extension")]
	ReservedKey(String),

	#[error("cannot encode {kind}: {reason}")]
	Unencodable {
		kind: &'static str,
		reason: String,
	},

	#[error("in '{key}': {source}")]
	Property {
		key: &'static str,
		source: Box<VocabError>,
	},

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),
}

impl VocabError {
	/// attach the property key this error surfaced under
	pub fn within(self, key: &'static str) -> Self {
		VocabError::Property { key, source: Box::new(self) }
	}

	/// the innermost error, skipping any property context
	pub fn root(&self) -> &VocabError {
		match self {
			VocabError::Property { source, .. } => source.root(),
			x => x,
		}
	}
}

/// encoding stopped at the first failing property: `partial` holds everything written before it
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct PartialEncode {
	pub partial: serde_json::Map<String, serde_json::Value>,
	#[source]
	pub error: VocabError,
}

impl From<PartialEncode> for VocabError {
	fn from(value: PartialEncode) -> Self {
		value.error
	}
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
