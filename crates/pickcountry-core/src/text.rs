// crates/pickcountry-core/src/text.rs

/// Case-folds a string for comparison.
///
/// Only case is folded; there is no transliteration, so `"Åland"` and
/// `"aland"` stay distinct.
///
/// ```rust
/// use pickcountry_core::text::fold_key;
///
/// assert_eq!(fold_key("United States"), "united states");
/// ```
#[inline]
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Total order used everywhere a list of names is shown: case-insensitive,
/// ties broken by the raw string so the order is deterministic.
pub fn cmp_folded(a: &str, b: &str) -> std::cmp::Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}
