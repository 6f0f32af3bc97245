use serde::{Deserialize, Serialize};

/// Delimiter between the stored value and the positional index in a
/// selection token. Tokens never leave the UI layer, so the format only
/// has to be unambiguous, not pretty.
pub const TOKEN_DELIMITER: &str = ":::";

/// One presentable entry of a built option list.
///
/// `key` is unique within the list that produced it; `token` is the
/// selection handle a widget holds while the option is displayed; `label`
/// is already disambiguated. Widgets that prefer a separate duplicate
/// marker (a trailing `#2` badge instead of a suffixed label) can render
/// `base_label` plus `occurrence` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Rendering key: `"<stored>-<idx>"`.
    pub key: String,

    /// Selection token: `"<stored>:::<idx>"`. Valid only against the
    /// batch that minted it.
    pub token: String,

    /// Display label, suffixed with `" (<n>)"` when the base label
    /// collides within the batch.
    pub label: String,

    /// Label before disambiguation.
    pub base_label: String,

    /// 1-based occurrence of this base label within the batch.
    pub occurrence: usize,

    /// Whether the base label is borne by more than one item.
    pub duplicate: bool,
}

/// A built option list plus everything needed to resolve its tokens.
///
/// Derived, read-only, and recomputed from scratch on every build; a new
/// index invalidates all tokens minted by previous ones.
#[derive(Debug)]
pub struct SelectIndex<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) stored: Vec<String>,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) fingerprint: String,
}

impl<'a, T> SelectIndex<'a, T> {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options paired with the items they were built from, in input order.
    pub fn entries(&self) -> impl Iterator<Item = (&SelectOption, &'a T)> {
        self.options.iter().zip(self.items.iter())
    }

    /// SHA-1 fingerprint of the (stored, base label) sequence this index
    /// was built from. Two indexes over identical input share it.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Token of the first item (by position) whose stored value matches.
    ///
    /// Empty stored values never match; unmatched lookups are `None`, not
    /// errors.
    pub fn token_for(&self, stored: &str) -> Option<&str> {
        if stored.is_empty() {
            return None;
        }

        self.stored
            .iter()
            .position(|s| s == stored)
            .map(|idx| self.options[idx].token.as_str())
    }

    /// Resolve a token minted by *this* batch back to its item.
    ///
    /// The positional index must be in range and the stored prefix must
    /// match what this batch recorded at that position, so tokens from a
    /// different batch resolve to `None` unless the batches agree at that
    /// position anyway (in which case they are interchangeable).
    pub fn resolve(&self, token: &str) -> Option<&'a T> {
        // The index is the numeric tail, so split at the last delimiter;
        // stored values containing the delimiter still resolve exactly.
        let (stored, idx) = token.rsplit_once(TOKEN_DELIMITER)?;
        let idx: usize = idx.parse().ok()?;

        if self.stored.get(idx).map(String::as_str) == Some(stored) {
            self.items.get(idx)
        } else {
            None
        }
    }
}

/// Strip a token down to its stored value.
///
/// Everything from the first delimiter onward is dropped; a token without
/// a delimiter yields the empty string rather than an error.
pub fn to_stored_value(token: &str) -> &str {
    token
        .split_once(TOKEN_DELIMITER)
        .map(|(stored, _)| stored)
        .unwrap_or("")
}
