#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}

			impl $enum_name {
				/// every token this enum can hold, nested ones included
				pub fn all() -> Vec<Self> {
					#[allow(unused_mut)]
					let mut out : Vec<Self> = vec![$(Self::$flat,)*];
					$(out.extend($inner::all().into_iter().map(Self::$deep));)*
					out
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// token enums whose flat variants are concrete vocabulary types: on top of strenum! every flat
/// variant gets a static [crate::TypeSchema], either from the enum-wide capabilities and
/// property groups or from its own override
macro_rules! vocabulary {
	( $(
		pub enum $enum_name:ident : [$($cap:ident),*] [$($props:path),*] {
			$($flat:ident $(: [$($fcap:ident),*] [$($fprops:path),*])?),* ;
			$($deep:ident($inner:ident)),*
		};
	)+ ) => {
		$crate::macros::strenum! {
			$( pub enum $enum_name { $($flat),* ; $($deep($inner)),* }; )+
		}

		$(
			impl $crate::Schema for $enum_name {
				fn schema(&self) -> &'static $crate::TypeSchema {
					#[allow(dead_code)]
					const CAPABILITIES: &[$crate::Capability] = &[$($crate::Capability::$cap),*];
					#[allow(dead_code)]
					const PROPERTIES: &[&[$crate::Property]] = &[$($props),*];
					match self {
						$(
							Self::$flat => {
								static SCHEMA: $crate::TypeSchema = $crate::macros::type_schema!(
									stringify!($flat) $(, [$($fcap),*] [$($fprops),*])? ; CAPABILITIES, PROPERTIES
								);
								&SCHEMA
							},
						)*
						$(Self::$deep(x) => x.schema(),)*
					}
				}
			}
		)+
	};
}

pub(crate) use vocabulary;

macro_rules! type_schema {
	($name:expr, [$($cap:ident),*] [$($props:path),*] ; $caps:ident, $groups:ident) => {
		$crate::TypeSchema::new($name, &[$($crate::Capability::$cap),*], &[$($props),*])
	};

	($name:expr ; $caps:ident, $groups:ident) => {
		$crate::TypeSchema::new($name, $caps, $groups)
	};
}

pub(crate) use type_schema;

macro_rules! getter {
	($name:ident -> one) => {
		fn $name(&self) -> $crate::Field<&$crate::Functional> {
			match self.slot(stringify!($name)) {
				Some($crate::Slot::Functional(x)) => Ok(x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident::$rename:ident -> one) => {
		fn $name(&self) -> $crate::Field<&$crate::Functional> {
			match self.slot(stringify!($rename)) {
				Some($crate::Slot::Functional(x)) => Ok(x),
				_ => Err($crate::FieldErr(stringify!($rename))),
			}
		}
	};

	($name:ident -> many) => {
		fn $name(&self) -> $crate::Field<&$crate::NonFunctional> {
			match self.slot(stringify!($name)) {
				Some($crate::Slot::NonFunctional(x)) => Ok(x),
				_ => Err($crate::FieldErr(stringify!($name))),
			}
		}
	};

	($name:ident::$rename:ident -> many) => {
		fn $name(&self) -> $crate::Field<&$crate::NonFunctional> {
			match self.slot(stringify!($rename)) {
				Some($crate::Slot::NonFunctional(x)) => Ok(x),
				_ => Err($crate::FieldErr(stringify!($rename))),
			}
		}
	};

	($name:ident::$rename:ident -> lang) => {
		fn $name(&self) -> Option<&$crate::LangMap> {
			self.lang_map(stringify!($rename))
		}
	};
}

pub(crate) use getter;

macro_rules! setter {
	($name:ident -> one) => {
		$crate::macros::setter! { $name::$name -> one }
	};

	($name:ident::$rename:ident -> one) => {
		paste::item! {
			fn [< $name _mut >](&mut self) -> $crate::Field<&mut $crate::Functional> {
				match self.slot_mut(stringify!($rename)) {
					Some($crate::Slot::Functional(x)) => Ok(x),
					_ => Err($crate::FieldErr(stringify!($rename))),
				}
			}

			fn [< set_ $name >](mut self, val: Option<$crate::Node>) -> Self {
				match self.[< $name _mut >]() {
					Ok(slot) => match val {
						Some(node) => slot.set(node),
						None => slot.clear(),
					},
					Err(e) => tracing::error!("error setting '{}': {e}", stringify!($rename)),
				}
				self
			}
		}
	};

	($name:ident -> many) => {
		$crate::macros::setter! { $name::$name -> many }
	};

	($name:ident::$rename:ident -> many) => {
		paste::item! {
			fn [< $name _mut >](&mut self) -> $crate::Field<&mut $crate::NonFunctional> {
				match self.slot_mut(stringify!($rename)) {
					Some($crate::Slot::NonFunctional(x)) => Ok(x),
					_ => Err($crate::FieldErr(stringify!($rename))),
				}
			}

			fn [< set_ $name >](mut self, val: Option<$crate::Node>) -> Self {
				match self.[< $name _mut >]() {
					Ok(slot) => match val {
						Some(node) => slot.set(node),
						None => slot.clear(),
					},
					Err(e) => tracing::error!("error setting '{}': {e}", stringify!($rename)),
				}
				self
			}
		}
	};

	($name:ident::$rename:ident -> lang) => {
		paste::item! {
			fn [< set_ $name >](mut self, val: Option<$crate::LangMap>) -> Self {
				if let Err(e) = self.set_lang_map(stringify!($rename), val) {
					tracing::error!("error setting '{}Map': {e}", stringify!($rename));
				}
				self
			}
		}
	};
}

pub(crate) use setter;
