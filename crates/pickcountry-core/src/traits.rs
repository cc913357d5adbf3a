// crates/pickcountry-core/src/traits.rs
use crate::common::NameEntry;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive equality through
/// [`NameMatch::is_named`].
///
/// # Examples
/// ```rust
/// use pickcountry_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Canada").is_named("CANADA"));
/// assert!(!Place("Canada").is_named("Can"));
/// ```
pub trait NameMatch {
    /// Returns the name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }
}

impl NameMatch for NameEntry {
    fn name_str(&self) -> &str {
        &self.name
    }
}
