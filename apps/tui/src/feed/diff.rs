use std::collections::HashMap;

use crate::domain::{ChangeBatch, DocChange, Expense};

/// Computes the change batch that turns `previous` into `next`.
///
/// Additions and modifications come out in `next` order, removals in
/// `previous` order, matching how the upstream collection reports its
/// deltas.
pub fn diff(previous: &[Expense], next: &[Expense]) -> ChangeBatch {
    let prev_by_id: HashMap<&str, &Expense> = previous
        .iter()
        .map(|record| (record.id.as_str(), record))
        .collect();

    let mut batch = ChangeBatch::new();

    for record in next {
        match prev_by_id.get(record.id.as_str()) {
            None => batch.push(DocChange::added(record.clone())),
            Some(old) if **old != *record => batch.push(DocChange::modified(record.clone())),
            Some(_) => {}
        }
    }

    for record in previous {
        if !next.iter().any(|candidate| candidate.id == record.id) {
            batch.push(DocChange::removed(record.id.clone()));
        }
    }

    batch
}
