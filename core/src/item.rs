//! Domain types for the todo service.
//!
//! # Design
//! `TodoItem` is the stored record and the wire shape at the same time: the
//! service returns items exactly as they are held in the collection. Request
//! payloads (`CreateItems`, `ItemPatch`) are decoded strictly so malformed
//! input is rejected at the boundary instead of being coerced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Texts of the items every fresh collection starts with.
pub const SEED_TEXTS: [&str; 3] = ["Go to store", "Buy some eggs", "Have a good time"];

/// Opaque identifier of a todo item, generated once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    /// Create an open item with a freshly generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            done: false,
        }
    }
}

/// Build one fresh item per text, preserving input order.
pub fn make_items<I, S>(texts: I) -> Vec<TodoItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts.into_iter().map(TodoItem::new).collect()
}

/// Body of `POST /`: the texts of the items to create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItems {
    pub items: Vec<String>,
}

/// Body of `PATCH /{id}`. Only `text` and `done` may appear; any other key
/// fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none()
    }

    /// Overwrite each field present in the patch.
    pub fn apply(self, item: &mut TodoItem) {
        if let Some(text) = self.text {
            item.text = text;
        }
        if let Some(done) = self.done {
            item.done = done;
        }
    }
}
