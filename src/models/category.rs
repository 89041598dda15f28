use serde::{Deserialize, Serialize};

use super::Id;

/// A bookkeeping category as denormalized onto a transaction.
///
/// Only the display name matters to aggregation; the id is carried through
/// for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Id,
    pub name: String,
}

impl CategoryRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
        }
    }
}
