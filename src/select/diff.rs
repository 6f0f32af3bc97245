use std::collections::{BTreeMap, BTreeSet};

use crate::select::option_model::{SelectIndex, SelectOption};

/// Changes between the option lists built before and after a catalog
/// refresh, keyed by stored value.
#[derive(Debug, Clone)]
pub struct OptionListDiff {
    /// Stored values present only in the new list.
    pub added: Vec<String>,

    /// Stored values present only in the old list.
    pub removed: Vec<String>,

    /// Stored values whose disambiguated label changed. A record that did
    /// not change at all can still relabel when a colliding neighbour
    /// appears or disappears.
    pub relabelled: Vec<Relabelled>,

    /// Caller-held selections that no longer resolve in the new list.
    pub stale_selections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relabelled {
    pub stored: String,
    pub before_label: String,
    pub after_label: String,
}

impl OptionListDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.relabelled.is_empty()
            && self.stale_selections.is_empty()
    }
}

/// Whether two indexes were built from identical (stored, label) input.
pub fn unchanged<T, U>(before: &SelectIndex<'_, T>, after: &SelectIndex<'_, U>) -> bool {
    before.fingerprint() == after.fingerprint()
}

/// Diff two built option lists.
///
/// Duplicate stored values collapse to their first occurrence, matching
/// `token_for` resolution. `selected` is the set of stored values some
/// caller has persisted; any of them missing from `after` is reported
/// stale.
pub fn diff_options<T, U>(
    before: &SelectIndex<'_, T>,
    after: &SelectIndex<'_, U>,
    selected: &[String],
) -> OptionListDiff {
    let before_options = first_by_stored(before);
    let after_options = first_by_stored(after);

    let before_set: BTreeSet<&str> = before_options.keys().copied().collect();
    let after_set: BTreeSet<&str> = after_options.keys().copied().collect();

    let added = after_set
        .difference(&before_set)
        .map(|s| s.to_string())
        .collect();

    let removed = before_set
        .difference(&after_set)
        .map(|s| s.to_string())
        .collect();

    let mut relabelled = vec![];
    for stored in before_set.intersection(&after_set) {
        let b = before_options[stored];
        let a = after_options[stored];
        if b.label != a.label {
            relabelled.push(Relabelled {
                stored: stored.to_string(),
                before_label: b.label.clone(),
                after_label: a.label.clone(),
            });
        }
    }

    let stale_selections = selected
        .iter()
        .filter(|s| !s.is_empty() && after.token_for(s).is_none())
        .cloned()
        .collect();

    OptionListDiff {
        added,
        removed,
        relabelled,
        stale_selections,
    }
}

fn first_by_stored<'i, T>(index: &'i SelectIndex<'_, T>) -> BTreeMap<&'i str, &'i SelectOption> {
    let mut map = BTreeMap::new();
    for (stored, opt) in index.stored.iter().zip(index.options.iter()) {
        map.entry(stored.as_str()).or_insert(opt);
    }
    map
}
