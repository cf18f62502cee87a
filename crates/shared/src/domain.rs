use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CommentId);

/// A comment as persisted by the backend. `id` and `created_at` are assigned
/// server-side and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    pub created_at: String,
}

impl Comment {
    /// Parses `created_at` as RFC 3339. Backends that emit some other format
    /// yield `None` and the raw string is shown instead.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.created_at.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_wire_shape() {
        let comment: Comment = serde_json::from_str(
            r#"{"id":1,"username":"alice","content":"hi","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .expect("decode");

        assert_eq!(comment.id, CommentId(1));
        assert_eq!(comment.username, "alice");
        assert_eq!(comment.content, "hi");
        assert_eq!(
            comment.created_at_utc().expect("timestamp").to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn missing_or_null_content_decodes_as_empty() {
        let missing: Comment = serde_json::from_str(
            r#"{"id":2,"username":"bob","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .expect("decode missing");
        let null: Comment = serde_json::from_str(
            r#"{"id":3,"username":"bob","content":null,"createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .expect("decode null");

        assert!(missing.content.is_empty());
        assert!(null.content.is_empty());
    }

    #[test]
    fn unparseable_timestamp_is_kept_verbatim() {
        let comment = Comment {
            id: CommentId(4),
            username: "carol".to_string(),
            content: String::new(),
            created_at: "yesterday".to_string(),
        };

        assert!(comment.created_at_utc().is_none());
        assert_eq!(comment.created_at, "yesterday");
    }
}
