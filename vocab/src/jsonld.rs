use crate::{BaseType, ObjectType};

/// attach an `@context` describing the terms this crate may emit
pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self) -> Self {
		let o_type = match self.get("type") {
			Some(serde_json::Value::String(x)) => BaseType::try_from(x.as_str()).ok(),
			Some(serde_json::Value::Array(x)) => x.iter()
				.filter_map(|x| x.as_str())
				.find_map(|x| BaseType::try_from(x).ok()),
			_ => None,
		};
		if let Some(obj) = self.as_object_mut() {
			let mut ctx = serde_json::Map::new();
			#[cfg(feature = "activitypub-miscellaneous-terms")]
			{
				ctx.insert("sensitive".to_string(), serde_json::Value::String("as:sensitive".into()));
				ctx.insert("quoteUrl".to_string(), serde_json::Value::String("as:quoteUrl".into()));
				ctx.insert("Hashtag".to_string(), serde_json::Value::String("as:Hashtag".into()));
			}
			match o_type {
				Some(BaseType::Object(ObjectType::Actor(_))) => {
					#[cfg(feature = "activitypub-miscellaneous-terms")]
					{
						ctx.insert("manuallyApprovesFollowers".to_string(), serde_json::Value::String("as:manuallyApprovesFollowers".into()));
						ctx.insert("movedTo".to_string(), serde_json::Value::String("as:movedTo".into()));
					}
					#[cfg(feature = "activitypub-counters")]
					{
						ctx.insert("counters".to_string(), serde_json::Value::String("https://ns.alemi.dev/as/counters/#".into()));
						ctx.insert("followingCount".to_string(), serde_json::Value::String("counters:followingCount".into()));
						ctx.insert("followersCount".to_string(), serde_json::Value::String("counters:followersCount".into()));
						ctx.insert("statusesCount".to_string(), serde_json::Value::String("counters:statusesCount".into()));
					}
				},
				#[cfg(feature = "litepub")]
				Some(BaseType::Object(ObjectType::Activity(crate::ActivityType::EmojiReact))) => {
					ctx.insert("litepub".to_string(), serde_json::Value::String("http://litepub.social/ns#".into()));
					ctx.insert("EmojiReact".to_string(), serde_json::Value::String("litepub:EmojiReact".into()));
				},
				Some(BaseType::Object(_)) => {
					#[cfg(feature = "ostatus")]
					{
						ctx.insert("ostatus".to_string(), serde_json::Value::String("http://ostatus.org#".into()));
						ctx.insert("conversation".to_string(), serde_json::Value::String("ostatus:conversation".into()));
					}
				},
				_ => {},
			}
			obj.insert(
				"@context".to_string(),
				serde_json::Value::Array(vec![
					serde_json::Value::String("https://www.w3.org/ns/activitystreams".into()),
					serde_json::Value::String("https://w3id.org/security/v1".into()),
					serde_json::Value::Object(ctx),
				]),
			);
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}
