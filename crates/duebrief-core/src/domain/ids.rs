//! Domain identifiers (strongly-typed IDs).
//!
//! 二種類の ID を扱います。
//! - **RunId**: 実行ごとに生成する ULID ベースの ID（ログの相関用）
//! - **TaskId / ProjectId**: タスク管理サービス側が発行する外部 ID（不透明な文字列）
//!
//! ## Phantom Type パターン
//! `Id<T>` / `ExternalId<T>` はジェネリック型で共通実装を提供しつつ、
//! `T` をマーカー型として使い、TaskId と ProjectId を型レベルで区別します。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"run-" など）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ULID ベースの生成 ID
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// サービス側が発行する外部 ID
///
/// Sync API は ID を文字列で返しますが、古いペイロードや手書きの
/// スナップショットでは数値のこともあるため、どちらも受け付けて
/// 10 進文字列として保持します。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExternalId<T: IdMarker> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T: IdMarker> ExternalId<T> {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// 空の ID（デコードできなかった ID の代わりに使う）
impl<T: IdMarker> Default for ExternalId<T> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<T: IdMarker> From<&str> for ExternalId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> From<u64> for ExternalId<T> {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: IdMarker> fmt::Display for ExternalId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

impl<T: IdMarker> Serialize for ExternalId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T: IdMarker> Deserialize<'de> for ExternalId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Unsigned(n) => n.to_string(),
            Raw::Signed(n) => n.to_string(),
        };
        Ok(Self::new(value))
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Run のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Run {}

impl IdMarker for Run {
    fn prefix() -> &'static str {
        "run-"
    }
}

/// Task のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskMarker {}

impl IdMarker for TaskMarker {
    fn prefix() -> &'static str {
        "task-"
    }
}

/// Project のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectMarker {}

impl IdMarker for ProjectMarker {
    fn prefix() -> &'static str {
        "project-"
    }
}

// ========================================
// Type Alias（使いやすさのため）
// ========================================

/// Identifier of one digest invocation.
pub type RunId = Id<Run>;

/// Identifier of a task as issued by the task service.
pub type TaskId = ExternalId<TaskMarker>;

/// Identifier of a project as issued by the task service.
pub type ProjectId = ExternalId<ProjectMarker>;
