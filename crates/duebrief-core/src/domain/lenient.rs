//! Lenient field decoders for snapshot payloads.
//!
//! 一件のタスクの壊れたフィールドでスナップショット全体のデコードが
//! 失敗しないよう、タスク側のフィールドはいったん `serde_json::Value`
//! として受けてから解釈します。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::ids::{ExternalId, IdMarker};

/// Text form of a scalar. `null` becomes empty; other shapes keep their
/// JSON text so they can still be reported.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Id from a string or an integer. Anything else is treated as absent.
pub(crate) fn id_of<T: IdMarker>(value: &Value) -> Option<ExternalId<T>> {
    match value {
        Value::String(s) if !s.is_empty() => Some(ExternalId::new(s.as_str())),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(ExternalId::new(n.to_string())),
        _ => None,
    }
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|v| text_of(&v))
}

pub(crate) fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<ExternalId<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: IdMarker,
{
    Value::deserialize(deserializer).map(|v| id_of(&v))
}

/// Like [`optional_id`], but an unreadable id becomes the empty id.
pub(crate) fn id_or_empty<'de, D, T>(deserializer: D) -> Result<ExternalId<T>, D::Error>
where
    D: Deserializer<'de>,
    T: IdMarker,
{
    optional_id(deserializer).map(Option::unwrap_or_default)
}
