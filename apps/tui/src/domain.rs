use serde::{Deserialize, Serialize};

/// A single expense document in the shared ledger.
///
/// Identity is the `id` field; `name` and `cost` may change over the
/// document's lifetime. `cost` is expected to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub cost: f64,
}

impl Expense {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
        }
    }
}

/// Kind of delta delivered by the change feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

impl ChangeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

/// One delta from the ledger. `doc` carries the full field snapshot for
/// added/modified changes and is absent for removals.
#[derive(Debug, Clone, PartialEq)]
pub struct DocChange {
    pub kind: ChangeKind,
    pub id: String,
    pub doc: Option<Expense>,
}

impl DocChange {
    pub fn added(doc: Expense) -> Self {
        Self {
            kind: ChangeKind::Added,
            id: doc.id.clone(),
            doc: Some(doc),
        }
    }

    pub fn modified(doc: Expense) -> Self {
        Self {
            kind: ChangeKind::Modified,
            id: doc.id.clone(),
            doc: Some(doc),
        }
    }

    pub fn removed(id: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            id: id.into(),
            doc: None,
        }
    }
}

/// Deltas delivered together from one observation of the ledger.
pub type ChangeBatch = Vec<DocChange>;
