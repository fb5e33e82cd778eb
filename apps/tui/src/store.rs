use crate::domain::{ChangeBatch, ChangeKind, DocChange, Expense};
use tracing::warn;

/// Ordered mirror of the ledger, kept current by applying change batches.
///
/// Records keep their arrival order; identifiers are unique. Changes that
/// reference an unknown identifier are logged and ignored rather than
/// treated as fatal.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|record| record.cost.max(0.0)).sum()
    }

    /// Apply every change of a batch in the order received.
    pub fn apply(&mut self, batch: &ChangeBatch) {
        for change in batch {
            self.apply_change(change);
        }
    }

    fn apply_change(&mut self, change: &DocChange) {
        match change.kind {
            ChangeKind::Added => {
                let Some(doc) = &change.doc else {
                    warn!(
                        kind = change.kind.as_str(),
                        id = %change.id,
                        "change without a document, ignoring"
                    );
                    return;
                };
                if let Some(position) = self.position(&change.id) {
                    warn!(id = %change.id, "added change for known id, replacing in place");
                    self.records[position] = doc.clone();
                } else {
                    self.records.push(doc.clone());
                }
            }
            ChangeKind::Modified => {
                let Some(doc) = &change.doc else {
                    warn!(
                        kind = change.kind.as_str(),
                        id = %change.id,
                        "change without a document, ignoring"
                    );
                    return;
                };
                if let Some(position) = self.position(&change.id) {
                    self.records[position] = doc.clone();
                } else {
                    warn!(
                        kind = change.kind.as_str(),
                        id = %change.id,
                        "change for unknown id, ignoring"
                    );
                }
            }
            ChangeKind::Removed => {
                if self.position(&change.id).is_none() {
                    warn!(
                        kind = change.kind.as_str(),
                        id = %change.id,
                        "change for unknown id, ignoring"
                    );
                    return;
                }
                self.records.retain(|record| record.id != change.id);
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, name: &str, cost: f64) -> Expense {
        Expense::new(id, name, cost)
    }

    #[test]
    fn applies_added_in_order() {
        let mut store = ExpenseStore::new();
        store.apply(&vec![
            DocChange::added(expense("a", "Food", 30.0)),
            DocChange::added(expense("b", "Rent", 70.0)),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "Food");
        assert_eq!(store.records()[1].name, "Rent");
        assert!((store.total_cost() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn modified_replaces_all_fields_in_place() {
        let mut store = ExpenseStore::new();
        store.apply(&vec![
            DocChange::added(expense("a", "Food", 30.0)),
            DocChange::added(expense("b", "Rent", 70.0)),
        ]);
        store.apply(&vec![DocChange::modified(expense("a", "Groceries", 45.0))]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id, "a");
        assert_eq!(store.records()[0].name, "Groceries");
        assert!((store.records()[0].cost - 45.0).abs() < f64::EPSILON);
        // Order is unchanged by modification.
        assert_eq!(store.records()[1].id, "b");
    }

    #[test]
    fn removed_deletes_only_the_named_record() {
        let mut store = ExpenseStore::new();
        store.apply(&vec![
            DocChange::added(expense("a", "Food", 30.0)),
            DocChange::added(expense("b", "Rent", 70.0)),
            DocChange::added(expense("c", "Fun", 10.0)),
        ]);
        store.apply(&vec![DocChange::removed("b")]);

        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn unknown_modified_and_removed_are_ignored() {
        let mut store = ExpenseStore::new();
        store.apply(&vec![DocChange::added(expense("a", "Food", 30.0))]);

        store.apply(&vec![
            DocChange::modified(expense("ghost", "Ghost", 1.0)),
            DocChange::removed("ghost"),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, "a");
    }

    #[test]
    fn duplicate_added_replaces_instead_of_duplicating() {
        let mut store = ExpenseStore::new();
        store.apply(&vec![DocChange::added(expense("a", "Food", 30.0))]);
        store.apply(&vec![DocChange::added(expense("a", "Food", 35.0))]);

        assert_eq!(store.len(), 1);
        assert!((store.records()[0].cost - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn replaying_batches_yields_implied_state() {
        let mut store = ExpenseStore::new();
        let batches: Vec<ChangeBatch> = vec![
            vec![
                DocChange::added(expense("a", "Food", 30.0)),
                DocChange::added(expense("b", "Rent", 70.0)),
            ],
            vec![DocChange::modified(expense("a", "Food", 0.0))],
            vec![
                DocChange::removed("b"),
                DocChange::added(expense("c", "Travel", 12.5)),
            ],
        ];
        for batch in &batches {
            store.apply(batch);
        }

        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!((store.get("a").map(|r| r.cost).unwrap_or(-1.0)).abs() < f64::EPSILON);

        let mut seen = ids.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ids.len(), "identifiers must stay unique");
    }
}
