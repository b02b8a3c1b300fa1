//! Merge-by-key planning for ordered child lists.
//!
//! Given the current list of keyed items and an incoming batch, decides for
//! every incoming entry whether it updates an existing item in place or is
//! appended as a new one. Items absent from the batch are never touched.

use std::collections::HashSet;

use crate::types::DbId;

/// An item that may carry a store-assigned identifier.
pub trait Keyed {
    fn key(&self) -> Option<DbId>;
}

/// What to do with one incoming entry.
#[derive(Debug, PartialEq, Eq)]
pub enum MergeStep<'a, T> {
    /// The entry names an existing item: overwrite its mutable fields.
    Update { id: DbId, incoming: &'a T },
    /// The entry is new (or names an id the list does not contain).
    Append(&'a T),
}

/// Plan a merge of `incoming` into `existing`.
///
/// The returned steps follow the order of `incoming`, so results collected
/// while applying them come back in input order. An incoming key that does
/// not match any existing item is treated as new; the store assigns a fresh
/// id and the caller's key is dropped.
pub fn plan_merge<'a, E, T>(existing: &[E], incoming: &'a [T]) -> Vec<MergeStep<'a, T>>
where
    E: Keyed,
    T: Keyed,
{
    let known: HashSet<DbId> = existing.iter().filter_map(Keyed::key).collect();

    incoming
        .iter()
        .map(|entry| match entry.key() {
            Some(id) if known.contains(&id) => MergeStep::Update {
                id,
                incoming: entry,
            },
            _ => MergeStep::Append(entry),
        })
        .collect()
}
