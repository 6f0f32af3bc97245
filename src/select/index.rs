use std::collections::HashMap;

use crate::select::normalize::batch_fingerprint;
use crate::select::option_model::{SelectIndex, SelectOption, TOKEN_DELIMITER};

/// Build a duplicate-safe option list from an ordered item collection.
///
/// `get_stored` projects the value persisted outside the widget (e.g. a
/// resource id), `get_label` the human-readable text. Neither projection
/// has to be unique: colliding labels are disambiguated with a per-label
/// running occurrence ordinal, and keys/tokens stay unique through the
/// positional index.
///
/// Output preserves input length and order. Never panics, for any input
/// including the empty collection and empty-string projections.
pub fn build<'a, T, S, L>(items: &'a [T], get_stored: S, get_label: L) -> SelectIndex<'a, T>
where
    S: Fn(&T) -> String,
    L: Fn(&T) -> String,
{
    let stored: Vec<String> = items.iter().map(|item| get_stored(item)).collect();
    let labels: Vec<String> = items.iter().map(|item| get_label(item)).collect();

    // First pass: how often does each label appear in the whole batch?
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for label in &labels {
        *frequency.entry(label.as_str()).or_insert(0) += 1;
    }

    // Second pass: emit options, numbering repeated labels as they occur.
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut options = Vec::with_capacity(items.len());

    for (idx, (value, base)) in stored.iter().zip(labels.iter()).enumerate() {
        let occurrence = {
            let count = seen.entry(base.as_str()).or_insert(0);
            *count += 1;
            *count
        };

        let duplicate = frequency[base.as_str()] > 1;

        let label = if duplicate {
            format!("{} ({})", base, occurrence)
        } else {
            base.clone()
        };

        options.push(SelectOption {
            key: format!("{}-{}", value, idx),
            token: format!("{}{}{}", value, TOKEN_DELIMITER, idx),
            label,
            base_label: base.clone(),
            occurrence,
            duplicate,
        });
    }

    let fingerprint = batch_fingerprint(stored.iter().zip(labels.iter()));

    SelectIndex {
        items,
        stored,
        options,
        fingerprint,
    }
}
