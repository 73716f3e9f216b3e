// crates/gazetteer-core/src/traits.rs
use crate::model::{City, Country, LocationKey};
use crate::text::fold_key;
use std::collections::HashMap;

/// The named-value store the natural-language layer resolves terms against.
///
/// The knowledge base only deposits into it; how terms are matched is up to
/// the implementation. Deposits are append/overwrite: a later value under an
/// existing term replaces the earlier one.
pub trait NamedValues: Send + Sync {
    /// Deposit `key` under `term`.
    fn add_value(&mut self, term: &str, key: LocationKey);

    /// Look a term up.
    fn value_for_term(&self, term: &str) -> Option<LocationKey>;

    /// All deposited terms, in no particular order.
    fn terms(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of distinct terms.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default term index: exact display names, with an accent- and
/// case-insensitive fallback built on [`fold_key`].
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    exact: HashMap<String, LocationKey>,
    folded: HashMap<String, LocationKey>,
}

impl NamedValues for NameIndex {
    fn add_value(&mut self, term: &str, key: LocationKey) {
        if let Some(previous) = self.exact.insert(term.to_owned(), key) {
            log::debug!("term {term:?} now maps to {key:?}, was {previous:?}");
        }
        self.folded.insert(fold_key(term), key);
    }

    fn value_for_term(&self, term: &str) -> Option<LocationKey> {
        self.exact
            .get(term)
            .or_else(|| self.folded.get(&fold_key(term)))
            .copied()
    }

    fn terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.exact.keys().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.exact.len()
    }
}

/// Name-based matching helpers for types that expose a canonical display name.
///
/// # Examples
/// ```rust
/// use gazetteer_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").name_contains("LODZ"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}
