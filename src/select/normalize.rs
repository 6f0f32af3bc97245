/// Normalize a display label taken from a raw catalog field.
///
/// Collapses internal whitespace runs and trims the ends. Applied by the
/// catalog projection layer so that padding differences don't split or
/// merge collision groups; the core build uses its projections verbatim.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// SHA-1 hex fingerprint over an ordered (stored, label) sequence.
///
/// Stamps a built option list so that tokens can be checked against the
/// batch that minted them. Fields are separated with control bytes so
/// adjacent values don't run together in the digest.
pub fn batch_fingerprint<'a, I>(pairs: I) -> String
where
    I: Iterator<Item = (&'a String, &'a String)>,
{
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    for (stored, label) in pairs {
        hasher.update(stored.as_bytes());
        hasher.update([0x1f]);
        hasher.update(label.as_bytes());
        hasher.update([0x1e]);
    }
    format!("{:x}", hasher.finalize())
}
