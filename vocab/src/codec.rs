//! leaf value codecs, one per primitive kind a property may hold
//!
//! decoding failures are [ShapeErr]s: they just mean "not this kind" and let the caller try the
//! next alternative. encoding can only fail for values json cannot represent

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::{ShapeErr, VocabError};

pub trait Codec : Sized {
	/// name of this kind, as used in errors and reports
	const KIND: &'static str;

	fn decode(value: &Value) -> Result<Self, ShapeErr>;
	fn encode(&self) -> Result<Value, VocabError>;
}

/// natural language values keyed by language tag
pub type LangMap = BTreeMap<String, String>;

static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:\S*$").expect("invalid iri regex"));
static NO_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S*$").expect("invalid uri regex"));
static MEDIA_TYPE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^[A-Za-z0-9!#$&^_.+\-]+/[A-Za-z0-9!#$&^_.+\-]+(\s*;.*)?$").expect("invalid media type regex")
});
static DURATION: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.(\d{1,9}))?S)?)?$")
		.expect("invalid duration regex")
});

/// absolute identifier used in place of an inlined object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
	pub fn parse(value: &str) -> Result<Self, ShapeErr> {
		if SCHEME.is_match(value) {
			Ok(Iri(value.to_string()))
		} else {
			Err(ShapeErr(<Self as Codec>::KIND))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn scheme(&self) -> &str {
		self.0.split(':').next().unwrap_or_default()
	}
}

/// possibly relative uri reference, as `xsd:anyURI`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnyUri(String);

impl AnyUri {
	pub fn parse(value: &str) -> Result<Self, ShapeErr> {
		if NO_WHITESPACE.is_match(value) {
			Ok(AnyUri(value.to_string()))
		} else {
			Err(ShapeErr(<Self as Codec>::KIND))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MimeType(String);

impl MimeType {
	pub fn parse(value: &str) -> Result<Self, ShapeErr> {
		if MEDIA_TYPE.is_match(value) {
			Ok(MimeType(value.to_string()))
		} else {
			Err(ShapeErr(<Self as Codec>::KIND))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// media type without parameters, e.g. `text/html` for `text/html; charset=utf-8`
	pub fn essence(&self) -> &str {
		self.0.split(';').next().unwrap_or_default().trim()
	}
}

macro_rules! string_newtype {
	($($t:ident => $kind:literal),*) => {
		$(
			impl AsRef<str> for $t {
				fn as_ref(&self) -> &str {
					&self.0
				}
			}

			impl std::fmt::Display for $t {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(&self.0)
				}
			}

			impl std::str::FromStr for $t {
				type Err = ShapeErr;

				fn from_str(s: &str) -> Result<Self, Self::Err> {
					$t::parse(s)
				}
			}

			impl TryFrom<&str> for $t {
				type Error = ShapeErr;

				fn try_from(value: &str) -> Result<Self, Self::Error> {
					$t::parse(value)
				}
			}

			impl From<$t> for String {
				fn from(value: $t) -> String {
					value.0
				}
			}

			impl Codec for $t {
				const KIND: &'static str = $kind;

				fn decode(value: &Value) -> Result<Self, ShapeErr> {
					value.as_str()
						.ok_or(ShapeErr(Self::KIND))
						.and_then($t::parse)
				}

				fn encode(&self) -> Result<Value, VocabError> {
					Ok(Value::String(self.0.clone()))
				}
			}
		)*
	};
}

string_newtype!(Iri => "@id", AnyUri => "xsd:anyURI", MimeType => "mime:type");

impl Codec for String {
	const KIND: &'static str = "xsd:string";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		value.as_str()
			.map(|x| x.to_string())
			.ok_or(ShapeErr(Self::KIND))
	}

	fn encode(&self) -> Result<Value, VocabError> {
		Ok(Value::String(self.clone()))
	}
}

impl Codec for LangMap {
	const KIND: &'static str = "rdf:langString";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		let map = value.as_object().ok_or(ShapeErr(Self::KIND))?;
		map.iter()
			.map(|(lang, text)| Ok((lang.clone(), text.as_str().ok_or(ShapeErr(Self::KIND))?.to_string())))
			.collect()
	}

	fn encode(&self) -> Result<Value, VocabError> {
		Ok(Value::Object(
			self.iter()
				.map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
				.collect()
		))
	}
}

impl Codec for f64 {
	const KIND: &'static str = "xsd:float";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		value.as_f64().ok_or(ShapeErr(Self::KIND))
	}

	fn encode(&self) -> Result<Value, VocabError> {
		// whole numbers go back out as integers, like most of them came in
		if self.is_finite() && self.fract() == 0.0 && self.abs() < i64::MAX as f64 {
			return Ok(Value::Number(serde_json::Number::from(*self as i64)));
		}
		serde_json::Number::from_f64(*self)
			.map(Value::Number)
			.ok_or_else(|| VocabError::Unencodable { kind: Self::KIND, reason: format!("{self} is not finite") })
	}
}

impl Codec for bool {
	const KIND: &'static str = "xsd:boolean";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		value.as_bool().ok_or(ShapeErr(Self::KIND))
	}

	fn encode(&self) -> Result<Value, VocabError> {
		Ok(Value::Bool(*self))
	}
}

impl Codec for u64 {
	const KIND: &'static str = "xsd:nonNegativeInteger";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		value.as_u64().ok_or(ShapeErr(Self::KIND))
	}

	fn encode(&self) -> Result<Value, VocabError> {
		Ok(Value::Number(serde_json::Number::from(*self)))
	}
}

impl Codec for chrono::DateTime<chrono::FixedOffset> {
	const KIND: &'static str = "xsd:dateTime";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		let text = value.as_str().ok_or(ShapeErr(Self::KIND))?;
		if let Ok(x) = chrono::DateTime::parse_from_rfc3339(text) {
			return Ok(x);
		}
		// some implementations drop the seconds, e.g. 2024-06-04T17:09Z
		let text = match text.strip_suffix('Z') {
			Some(stripped) => format!("{stripped}+00:00"),
			None => text.to_string(),
		};
		chrono::DateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M%:z")
			.map_err(|_| ShapeErr(Self::KIND))
	}

	fn encode(&self) -> Result<Value, VocabError> {
		Ok(Value::String(self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)))
	}
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
// xsd:duration can't know about leap years or month lengths, so these are approximations. encode
// never emits them, days are exact
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

impl Codec for chrono::TimeDelta {
	const KIND: &'static str = "xsd:duration";

	fn decode(value: &Value) -> Result<Self, ShapeErr> {
		let text = value.as_str().ok_or(ShapeErr(Self::KIND))?;
		let captures = DURATION.captures(text).ok_or(ShapeErr(Self::KIND))?;
		if (2..=8).all(|i| captures.get(i).is_none()) {
			return Err(ShapeErr(Self::KIND)); // bare "P" or "PT"
		}
		let component = |i: usize, unit: i64| -> Result<i64, ShapeErr> {
			match captures.get(i) {
				None => Ok(0),
				Some(m) => m.as_str()
					.parse::<i64>()
					.ok()
					.and_then(|x| x.checked_mul(unit))
					.ok_or(ShapeErr(Self::KIND)),
			}
		};
		let mut seconds = 0i64;
		for (i, unit) in [(2, YEAR), (3, MONTH), (4, DAY), (5, HOUR), (6, MINUTE), (7, 1)] {
			seconds = seconds.checked_add(component(i, unit)?).ok_or(ShapeErr(Self::KIND))?;
		}
		let nanos = match captures.get(8) {
			None => 0,
			Some(m) => format!("{:0<9}", m.as_str()).parse::<u32>().map_err(|_| ShapeErr(Self::KIND))?,
		};
		let delta = chrono::TimeDelta::new(seconds, nanos).ok_or(ShapeErr(Self::KIND))?;
		if captures.get(1).is_some() {
			Ok(-delta)
		} else {
			Ok(delta)
		}
	}

	fn encode(&self) -> Result<Value, VocabError> {
		let (sign, delta) = if *self < chrono::TimeDelta::zero() { ("-", -*self) } else { ("", *self) };
		let mut rest = delta.num_seconds();
		let nanos = delta.subsec_nanos();
		let mut out = format!("{sign}P");
		if rest >= DAY {
			out.push_str(&format!("{}D", rest / DAY));
			rest %= DAY;
		}
		if rest > 0 || nanos > 0 || out.ends_with('P') {
			out.push('T');
			for (unit, suffix) in [(HOUR, 'H'), (MINUTE, 'M')] {
				if rest >= unit {
					out.push_str(&format!("{}{suffix}", rest / unit));
					rest %= unit;
				}
			}
			if nanos > 0 {
				let fraction = format!("{nanos:09}");
				out.push_str(&format!("{rest}.{}S", fraction.trim_end_matches('0')));
			} else if rest > 0 || out.ends_with('T') {
				out.push_str(&format!("{rest}S"));
			}
		}
		Ok(Value::String(out))
	}
}
